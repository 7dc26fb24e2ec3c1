//! Serialized character-by-character output.
//!
//! A single task owns the receiving end of an unbounded channel and
//! animates one job at a time, so two outputs never interleave even when
//! they are enqueued back to back. Enqueuing returns a receiver that
//! resolves once the job's last character has been revealed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use super::log::{EntryKind, SharedLog};

/// Where revealed characters go.
pub trait RevealSink: Send + 'static {
    /// A new output entry starts.
    fn begin(&mut self, kind: EntryKind);
    fn reveal(&mut self, ch: char);
    /// The current entry is complete.
    fn end(&mut self);
}

/// Writes revealed characters into the shared output log.
pub struct LogSink {
    log: SharedLog,
    current: Option<u64>,
}

impl LogSink {
    pub fn new(log: SharedLog) -> Self {
        Self { log, current: None }
    }
}

impl RevealSink for LogSink {
    fn begin(&mut self, kind: EntryKind) {
        self.current = Some(self.log.lock().push(kind, String::new()));
    }

    fn reveal(&mut self, ch: char) {
        if let Some(id) = self.current {
            // A cleared log drops the rest of the entry.
            if !self.log.lock().append_char(id, ch) {
                self.current = None;
            }
        }
    }

    fn end(&mut self) {
        self.current = None;
    }
}

struct OutputJob {
    text: String,
    kind: EntryKind,
    done: oneshot::Sender<()>,
}

#[derive(Clone)]
pub struct Typewriter {
    tx: mpsc::UnboundedSender<OutputJob>,
    pending: Arc<AtomicUsize>,
}

impl Typewriter {
    /// Starts the animation task. Must be called inside a tokio runtime.
    pub fn spawn<S: RevealSink>(sink: S, interval: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let pending = Arc::new(AtomicUsize::new(0));
        tokio::spawn(run(rx, sink, interval, pending.clone()));
        Self { tx, pending }
    }

    /// Queues `text` behind every earlier job.
    pub fn enqueue(&self, text: impl Into<String>, kind: EntryKind) -> oneshot::Receiver<()> {
        let (done, finished) = oneshot::channel();
        let job = OutputJob {
            text: text.into(),
            kind,
            done,
        };
        self.pending.fetch_add(1, Ordering::SeqCst);
        if self.tx.send(job).is_err() {
            // The dropped sender resolves `finished` with an error.
            self.pending.fetch_sub(1, Ordering::SeqCst);
            warn!("Typewriter task has stopped; output dropped");
        }
        finished
    }

    /// Jobs queued or animating.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }
}

async fn run<S: RevealSink>(
    mut rx: mpsc::UnboundedReceiver<OutputJob>,
    mut sink: S,
    interval: Duration,
    pending: Arc<AtomicUsize>,
) {
    while let Some(job) = rx.recv().await {
        debug!("Typing {} chars", job.text.chars().count());
        sink.begin(job.kind);
        for ch in job.text.chars() {
            sink.reveal(ch);
            tokio::time::sleep(interval).await;
        }
        sink.end();
        pending.fetch_sub(1, Ordering::SeqCst);
        let _ = job.done.send(());
    }
}
