use std::io::{self, Write};

use colored::{ColoredString, Colorize};

use super::DisplayAdapter;
use crate::engine::{TimerEvent, TimerUpdate};
use crate::types::{Frame, IntervalConfig, IntervalKind, TimerStatus};

/// Cells in the progress bar.
const BAR_WIDTH: usize = 20;

/// Clears the current terminal line and returns the cursor to column 0.
const CLEAR_LINE: &str = "\r\x1b[2K";

/// Styled front-end.
///
/// Ticks redraw the current line in place; every other event finishes
/// the line so transitions stay visible in the scrollback.
#[derive(Debug)]
pub struct StyledDisplay<W: Write> {
    out: W,
    line_open: bool,
}

impl<W: Write> StyledDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line_open: false,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn label(frame: &Frame) -> ColoredString {
        match (frame.status, frame.interval) {
            (TimerStatus::Idle, _) | (_, None) => "Ready to Focus".bold(),
            (_, Some(IntervalKind::Work)) => "💼 Work Time".green().bold(),
            (_, Some(IntervalKind::ShortBreak)) => "☕ Short Break".yellow().bold(),
            (_, Some(IntervalKind::LongBreak)) => "🎉 Long Break".red().bold(),
        }
    }

    fn line(frame: &Frame) -> String {
        let mut line = format!(
            "{}  {}  {}",
            Self::label(frame),
            frame.time_text().bold(),
            progress_bar(frame.progress_percent(), BAR_WIDTH)
        );
        let marks = frame.checkmarks();
        if !marks.is_empty() {
            line.push_str("  ");
            line.push_str(&marks);
        }
        if frame.status == TimerStatus::Paused {
            line.push_str(&format!("  {}", "⏸ paused".dimmed()));
        }
        line
    }

    fn close_line(&mut self) -> io::Result<()> {
        if self.line_open {
            write!(self.out, "{}", CLEAR_LINE)?;
            self.line_open = false;
        }
        Ok(())
    }
}

/// Renders `[█████░░░░░]  50%` for a 0-100 percentage.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let percent = percent.clamp(0.0, 100.0);
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "[{}{}] {:>3.0}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        percent
    )
}

impl<W: Write> DisplayAdapter for StyledDisplay<W> {
    fn render(&mut self, update: &TimerUpdate) -> io::Result<()> {
        let line = Self::line(&update.frame);
        match update.event {
            TimerEvent::Tick { .. } => {
                write!(self.out, "{}{}", CLEAR_LINE, line)?;
                self.line_open = true;
            }
            _ => {
                self.close_line()?;
                writeln!(self.out, "{}", line)?;
            }
        }
        self.out.flush()
    }

    fn render_settings(&mut self, config: &IntervalConfig) -> io::Result<()> {
        self.close_line()?;
        writeln!(
            self.out,
            "{} Work: {} min  Break: {} min  {}",
            "⚙".cyan(),
            config.work_minutes.to_string().green(),
            config.short_break_minutes.to_string().yellow(),
            format!("(Long break: {} min)", config.long_break_minutes()).dimmed()
        )?;
        self.out.flush()
    }

    fn show_error(&mut self, message: &str) -> io::Result<()> {
        self.close_line()?;
        writeln!(self.out, "{} {}", "error:".red().bold(), message)?;
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.line_open {
            writeln!(self.out)?;
            self.line_open = false;
        }
        self.out.flush()
    }
}
