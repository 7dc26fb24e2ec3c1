//! The command terminal.
//!
//! A line of input is trimmed, echoed after the prompt, resolved against
//! the command table and answered through a typewriter queue that reveals
//! output one character at a time. The same table answers the HTTP
//! terminal endpoint, where output is returned whole.

pub mod commands;
pub mod console;
pub mod log;
pub mod registry;
pub mod session;
pub mod typewriter;

pub use commands::{Action, CommandTable, Resolution, CV_CONFIRMATION};
pub use console::{play_rain, run_console, ConsoleAlert};
pub use log::{EntryKind, LogEntry};
