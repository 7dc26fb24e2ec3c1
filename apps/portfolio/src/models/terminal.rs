use serde::{Deserialize, Serialize};

/// Static texts answered by the terminal's informational commands.
///
/// `help` is not stored here; it is generated from the command registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalContent {
    pub prompt: String,
    pub welcome: String,
    pub whoami: String,
    pub education: String,
    pub experience: String,
    pub projects: String,
    pub contact: String,
    pub certifications: String,
    pub social: String,
}
