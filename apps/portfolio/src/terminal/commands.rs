//! Command table and resolution.
//!
//! Each command is either static text or an action the session performs.
//! Lookup trims and lower-cases the input; anything not in the table
//! resolves to the not-found message.

use std::collections::HashMap;

use crate::models::TerminalContent;

use super::registry::help_text;

/// Text printed after the `cv` action has launched the generator.
pub const CV_CONFIRMATION: &str = "Opening CV in a new tab and starting download...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Empty the output log. No output.
    Clear,
    /// Run the CV generation entry point, then confirm.
    OpenCv,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandEntry {
    Text(String),
    Action(Action),
}

/// What a line of input resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Blank input: nothing is echoed or queued.
    Empty,
    Output(String),
    NotFound(String),
    Action(Action),
}

pub fn not_found_message(command: &str) -> String {
    format!("Command not found: {command}\nType 'help' to see available commands")
}

/// Immutable for the life of the process.
#[derive(Debug, Clone)]
pub struct CommandTable {
    entries: HashMap<&'static str, CommandEntry>,
}

impl CommandTable {
    pub fn from_content(content: &TerminalContent) -> Self {
        let text = |s: &str| CommandEntry::Text(s.to_string());
        let entries = HashMap::from([
            ("help", CommandEntry::Text(help_text())),
            ("whoami", text(&content.whoami)),
            ("education", text(&content.education)),
            ("experience", text(&content.experience)),
            ("projects", text(&content.projects)),
            ("contact", text(&content.contact)),
            ("certifications", text(&content.certifications)),
            ("social", text(&content.social)),
            ("cv", CommandEntry::Action(Action::OpenCv)),
            ("clear", CommandEntry::Action(Action::Clear)),
        ]);
        Self { entries }
    }

    pub fn lookup(&self, input: &str) -> Option<&CommandEntry> {
        self.entries.get(input.trim().to_lowercase().as_str())
    }

    pub fn resolve(&self, input: &str) -> Resolution {
        let command = input.trim();
        if command.is_empty() {
            return Resolution::Empty;
        }
        match self.lookup(command) {
            Some(CommandEntry::Text(text)) => Resolution::Output(text.clone()),
            Some(CommandEntry::Action(action)) => Resolution::Action(*action),
            None => Resolution::NotFound(not_found_message(command)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin_content;
    use crate::terminal::registry::COMMANDS;

    fn table() -> CommandTable {
        CommandTable::from_content(&builtin_content().terminal)
    }

    #[test]
    fn test_every_registered_command_has_an_entry() {
        let table = table();
        for spec in COMMANDS {
            assert!(table.lookup(spec.name).is_some(), "{} unmapped", spec.name);
        }
        assert_eq!(table.entries.len(), COMMANDS.len());
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trimmed() {
        let table = table();
        assert_eq!(table.resolve("HELP"), table.resolve("help"));
        assert_eq!(table.resolve("  WhoAmI \t"), table.resolve("whoami"));
        assert!(matches!(table.resolve("help"), Resolution::Output(_)));
    }

    #[test]
    fn test_blank_input_resolves_to_empty() {
        let table = table();
        assert_eq!(table.resolve(""), Resolution::Empty);
        assert_eq!(table.resolve("   \t "), Resolution::Empty);
    }

    #[test]
    fn test_unknown_command_keeps_original_case_in_message() {
        let table = table();
        assert_eq!(
            table.resolve(" Sudo "),
            Resolution::NotFound(
                "Command not found: Sudo\nType 'help' to see available commands".to_string()
            )
        );
    }

    #[test]
    fn test_actions_resolve_to_actions() {
        let table = table();
        assert_eq!(table.resolve("clear"), Resolution::Action(Action::Clear));
        assert_eq!(table.resolve("CV"), Resolution::Action(Action::OpenCv));
    }

    #[test]
    fn test_text_commands_come_from_content() {
        let content = builtin_content().terminal;
        let table = CommandTable::from_content(&content);
        assert_eq!(table.resolve("social"), Resolution::Output(content.social));
    }
}
