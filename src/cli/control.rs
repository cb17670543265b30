//! Control surface: one command per input line.
//!
//! ```text
//! start | s            pause | p            resume | r
//! toggle | t           reset | x            status
//! work +N | work -N | w+ | w-
//! break +N | break -N | b+ | b-
//! quit | q | exit
//! ```

use std::io::{self, BufRead};
use std::str::FromStr;
use std::thread;

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// A command from the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Start,
    Pause,
    Resume,
    /// Pause when running, resume when paused
    Toggle,
    Reset,
    /// Change the work duration by this many minutes
    AdjustWork(i32),
    /// Change the short break duration by this many minutes
    AdjustBreak(i32),
    /// Redraw the current state
    Status,
    Quit,
}

/// Input that does not name a command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControlParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try start, pause, resume, reset, work +1, break -1, quit)")]
    Unknown(String),

    #[error("invalid minute delta '{0}' (expected something like +1 or -5)")]
    InvalidDelta(String),
}

impl FromStr for ControlCommand {
    type Err = ControlParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim().to_ascii_lowercase();
        let mut parts = input.split_whitespace();
        let Some(head) = parts.next() else {
            return Err(ControlParseError::Empty);
        };
        let arg = parts.next();
        if let Some(extra) = parts.next() {
            return Err(ControlParseError::Unknown(extra.to_string()));
        }

        let command = match (head, arg) {
            ("start" | "s", None) => ControlCommand::Start,
            ("pause" | "p", None) => ControlCommand::Pause,
            ("resume" | "r", None) => ControlCommand::Resume,
            ("toggle" | "t", None) => ControlCommand::Toggle,
            ("reset" | "x", None) => ControlCommand::Reset,
            ("status", None) => ControlCommand::Status,
            ("quit" | "q" | "exit", None) => ControlCommand::Quit,
            ("w+", None) => ControlCommand::AdjustWork(1),
            ("w-", None) => ControlCommand::AdjustWork(-1),
            ("b+", None) => ControlCommand::AdjustBreak(1),
            ("b-", None) => ControlCommand::AdjustBreak(-1),
            ("work" | "w", Some(delta)) => ControlCommand::AdjustWork(parse_delta(delta)?),
            ("break" | "b", Some(delta)) => ControlCommand::AdjustBreak(parse_delta(delta)?),
            _ => return Err(ControlParseError::Unknown(input.clone())),
        };
        Ok(command)
    }
}

fn parse_delta(s: &str) -> Result<i32, ControlParseError> {
    match s {
        "+" => Ok(1),
        "-" => Ok(-1),
        _ => s
            .parse::<i32>()
            .map_err(|_| ControlParseError::InvalidDelta(s.to_string())),
    }
}

/// Forwards stdin lines from a dedicated thread.
///
/// A pending stdin read cannot be cancelled. Keeping it off the runtime's
/// blocking pool lets the process exit on Ctrl-C without waiting for a
/// newline. The receiver yields `None` once stdin reaches end of input.
///
/// # Errors
///
/// Returns an error if the reader thread cannot be spawned.
pub fn spawn_stdin_reader() -> io::Result<mpsc::UnboundedReceiver<String>> {
    let (tx, rx) = mpsc::unbounded_channel();
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || forward_lines(io::stdin().lock(), &tx))?;
    Ok(rx)
}

/// Sends each line of `input` until end of input, a read error, or the
/// receiver going away.
fn forward_lines<R: BufRead>(input: R, tx: &mpsc::UnboundedSender<String>) {
    for line in input.lines() {
        match line {
            Ok(line) => {
                if tx.send(line).is_err() {
                    return;
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to read control input");
                return;
            }
        }
    }
    debug!("Control input reached end of input");
}
