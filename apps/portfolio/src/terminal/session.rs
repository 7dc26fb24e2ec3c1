use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::cv::CvLauncher;
use crate::models::TerminalContent;

use super::commands::{Action, CommandTable, Resolution, CV_CONFIRMATION};
use super::log::{EntryKind, SharedLog};
use super::typewriter::Typewriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalState {
    Idle,
    Dispatching,
    Animating,
}

/// Result of submitting one line.
#[derive(Debug)]
pub enum Submission {
    /// Blank input. Nothing echoed, nothing queued.
    Ignored,
    /// The log was emptied.
    Cleared,
    /// Output was queued; resolves once it has been fully typed.
    Queued(oneshot::Receiver<()>),
    /// Echoed but produced no output (a failed `cv`).
    Silent,
}

/// One interactive terminal: echoes input, dispatches it and feeds output
/// through the typewriter.
pub struct Terminal {
    table: Arc<CommandTable>,
    prompt: String,
    welcome: String,
    log: SharedLog,
    typewriter: Typewriter,
    launcher: Arc<dyn CvLauncher>,
    dispatching: bool,
}

impl Terminal {
    pub fn new(
        content: &TerminalContent,
        table: Arc<CommandTable>,
        log: SharedLog,
        typewriter: Typewriter,
        launcher: Arc<dyn CvLauncher>,
    ) -> Self {
        Self {
            table,
            prompt: content.prompt.clone(),
            welcome: content.welcome.clone(),
            log,
            typewriter,
            launcher,
            dispatching: false,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn log(&self) -> &SharedLog {
        &self.log
    }

    pub fn state(&self) -> TerminalState {
        if self.dispatching {
            TerminalState::Dispatching
        } else if self.typewriter.pending() > 0 {
            TerminalState::Animating
        } else {
            TerminalState::Idle
        }
    }

    /// Types the welcome message.
    pub fn start(&self) -> oneshot::Receiver<()> {
        self.typewriter
            .enqueue(self.welcome.clone(), EntryKind::Welcome)
    }

    pub async fn submit(&mut self, input: &str) -> Submission {
        let command = input.trim();
        if command.is_empty() {
            return Submission::Ignored;
        }

        self.dispatching = true;
        self.log
            .lock()
            .push(EntryKind::CommandLine, format!("{} {}", self.prompt, command));
        debug!("Dispatching terminal command {command:?}");

        let submission = match self.table.resolve(command) {
            Resolution::Empty => Submission::Ignored,
            Resolution::Output(text) => {
                Submission::Queued(self.typewriter.enqueue(text, EntryKind::Output))
            }
            Resolution::NotFound(message) => {
                Submission::Queued(self.typewriter.enqueue(message, EntryKind::Error))
            }
            Resolution::Action(Action::Clear) => {
                self.log.lock().clear();
                Submission::Cleared
            }
            Resolution::Action(Action::OpenCv) => match self.launcher.launch().await {
                Ok(location) => {
                    info!("CV available at {location}");
                    Submission::Queued(
                        self.typewriter
                            .enqueue(CV_CONFIRMATION, EntryKind::Output),
                    )
                }
                Err(e) => {
                    // Already alerted by the launcher.
                    warn!("cv command failed: {e}");
                    Submission::Silent
                }
            },
        };

        self.dispatching = false;
        submission
    }
}
