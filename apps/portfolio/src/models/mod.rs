pub mod document;
pub mod terminal;

pub use document::{Document, FontStyle, LineItem, PersonalHeader, Section};
pub use terminal::TerminalContent;
