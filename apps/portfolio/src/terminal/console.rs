//! Interactive terminal on stdin/stdout.

use std::io::{self, Stdout, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{style, Color, Print, ResetColor, SetForegroundColor, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Instant;
use tracing::info;

use crate::cv::{CvLauncher, UserAlert};
use crate::matrix::{MatrixRain, VISIBLE};
use crate::models::TerminalContent;

use super::commands::CommandTable;
use super::log::{EntryKind, SharedLog};
use super::session::{Submission, Terminal};
use super::typewriter::{LogSink, RevealSink, Typewriter};

const RAIN_FRAME: Duration = Duration::from_millis(50);
/// A new terminal size must hold this long before the rain is rebuilt.
const RESIZE_SETTLE: Duration = Duration::from_millis(150);

/// Holds back a changed value until it has stopped changing for `delay`.
#[derive(Debug)]
struct Debounced<T> {
    current: T,
    pending: Option<(T, Instant)>,
    delay: Duration,
}

impl<T: Copy + PartialEq> Debounced<T> {
    fn new(current: T, delay: Duration) -> Self {
        Self {
            current,
            pending: None,
            delay,
        }
    }

    /// Records `value` as seen at `now`. Returns it once it has been seen
    /// unchanged for the whole delay.
    fn observe(&mut self, value: T, now: Instant) -> Option<T> {
        if value == self.current {
            self.pending = None;
            return None;
        }
        match self.pending {
            Some((pending, since)) if pending == value => {
                if now.duration_since(since) < self.delay {
                    return None;
                }
                self.current = value;
                self.pending = None;
                Some(value)
            }
            _ => {
                self.pending = Some((value, now));
                None
            }
        }
    }
}

/// Mirrors typed output to stdout while recording it in the log.
pub struct ConsoleSink {
    inner: LogSink,
    stdout: Stdout,
}

impl ConsoleSink {
    pub fn new(log: SharedLog) -> Self {
        Self {
            inner: LogSink::new(log),
            stdout: io::stdout(),
        }
    }
}

fn color_for(kind: EntryKind) -> Color {
    match kind {
        EntryKind::Welcome => Color::Green,
        EntryKind::Error => Color::Red,
        EntryKind::CommandLine | EntryKind::Output => Color::Reset,
    }
}

impl RevealSink for ConsoleSink {
    fn begin(&mut self, kind: EntryKind) {
        self.inner.begin(kind);
        let _ = execute!(self.stdout, SetForegroundColor(color_for(kind)));
    }

    fn reveal(&mut self, ch: char) {
        self.inner.reveal(ch);
        let _ = execute!(self.stdout, Print(ch));
    }

    fn end(&mut self) {
        self.inner.end();
        let _ = execute!(self.stdout, ResetColor, Print("\n"));
    }
}

/// Prints failures to stderr in red.
pub struct ConsoleAlert;

impl UserAlert for ConsoleAlert {
    fn alert(&self, message: &str) {
        eprintln!("{}", style(message).red());
    }
}

/// Plays the rain full-screen for `duration`, then clears the screen.
pub async fn play_rain(duration: Duration) -> Result<()> {
    let (columns, rows) = terminal::size()?;
    let mut rain = MatrixRain::new(u32::from(columns), u32::from(rows), 1);
    let mut stdout = io::stdout();
    let frames = duration.as_millis() / RAIN_FRAME.as_millis();

    execute!(stdout, Hide, Clear(ClearType::All))?;
    let mut size = Debounced::new((columns, rows), RESIZE_SETTLE);
    for _ in 0..frames {
        if let Some((columns, rows)) = size.observe(terminal::size()?, Instant::now()) {
            rain.resize(u32::from(columns), u32::from(rows));
            execute!(stdout, Clear(ClearType::All))?;
        }
        rain.tick(&mut rand::thread_rng());
        draw_rain(&mut stdout, &rain)?;
        tokio::time::sleep(RAIN_FRAME).await;
    }
    execute!(stdout, ResetColor, Clear(ClearType::All), MoveTo(0, 0), Show)?;
    Ok(())
}

fn draw_rain(stdout: &mut Stdout, rain: &MatrixRain) -> io::Result<()> {
    for row in 0..rain.rows() {
        for column in 0..rain.columns() {
            let cell = rain.cell(row, column);
            let glyph = if cell.brightness > VISIBLE { cell.glyph } else { ' ' };
            let green = (cell.brightness * 255.0) as u8;
            queue!(
                stdout,
                MoveTo(column as u16, row as u16),
                SetForegroundColor(Color::Rgb {
                    r: 0,
                    g: green,
                    b: green / 3,
                }),
                Print(glyph)
            )?;
        }
    }
    stdout.flush()
}

/// Runs the REPL until stdin closes.
pub async fn run_console(
    content: &TerminalContent,
    table: Arc<CommandTable>,
    launcher: Arc<dyn CvLauncher>,
    interval: Duration,
) -> Result<()> {
    let log = SharedLog::default();
    let typewriter = Typewriter::spawn(ConsoleSink::new(log.clone()), interval);
    let mut session = Terminal::new(content, table, log, typewriter, launcher);
    let mut stdout = io::stdout();

    let _ = session.start().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        execute!(stdout, Print(style(format!("{} ", session.prompt())).green()))?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match session.submit(&line).await {
            Submission::Queued(done) => {
                let _ = done.await;
            }
            Submission::Cleared => {
                execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
            }
            Submission::Ignored | Submission::Silent => {}
        }
    }

    execute!(stdout, ResetColor, Print("\n"))?;
    info!("Terminal session closed");
    Ok(())
}
