use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Welcome,
    CommandLine,
    Output,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    #[serde(skip)]
    pub id: u64,
    pub kind: EntryKind,
    pub text: String,
}

/// Everything the terminal has displayed. Grows until `clear`.
#[derive(Debug, Default)]
pub struct OutputLog {
    entries: Vec<LogEntry>,
    next_id: u64,
}

impl OutputLog {
    /// Appends an entry and returns its id.
    pub fn push(&mut self, kind: EntryKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(LogEntry {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    /// Appends one character to entry `id`.
    ///
    /// Returns false when the entry no longer exists (the log was cleared
    /// while it was being typed); the character is dropped.
    pub fn append_char(&mut self, id: u64, ch: char) -> bool {
        match self.entries.iter_mut().rev().find(|e| e.id == id) {
            Some(entry) => {
                entry.text.push(ch);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The log shared between a session and its typewriter task. The lock is
/// only ever held for a single push/append/clear.
#[derive(Debug, Clone, Default)]
pub struct SharedLog(Arc<Mutex<OutputLog>>);

impl SharedLog {
    pub fn lock(&self) -> MutexGuard<'_, OutputLog> {
        // A panic while holding the lock cannot leave the log half-written.
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.lock().entries().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut log = OutputLog::default();
        let a = log.push(EntryKind::Output, "a");
        let b = log.push(EntryKind::Output, "b");
        assert!(b > a);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_append_char_after_clear_is_dropped() {
        let mut log = OutputLog::default();
        let id = log.push(EntryKind::Output, "");
        assert!(log.append_char(id, 'x'));
        log.clear();
        assert!(!log.append_char(id, 'y'));
        assert!(log.is_empty());
    }

    #[test]
    fn test_ids_are_not_reused_after_clear() {
        let mut log = OutputLog::default();
        let old = log.push(EntryKind::Output, "");
        log.clear();
        let new = log.push(EntryKind::Output, "");
        assert_ne!(old, new);
        assert!(!log.append_char(old, 'z'));
        assert_eq!(log.entries()[0].text, "");
    }
}
