use std::io::{self, Write};

use super::DisplayAdapter;
use crate::engine::TimerUpdate;
use crate::types::{Frame, IntervalConfig, TimerStatus};

/// Plain text front-end: `Work  24:59  ✅`.
#[derive(Debug)]
pub struct PlainDisplay<W: Write> {
    out: W,
}

impl<W: Write> PlainDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn label(frame: &Frame) -> &'static str {
        match (frame.status, frame.interval) {
            (TimerStatus::Idle, _) | (_, None) => "Timer",
            (_, Some(kind)) if kind.is_break() => "Break",
            (_, Some(_)) => "Work",
        }
    }

    fn line(frame: &Frame) -> String {
        let mut line = format!("{:<5} {:>6}", Self::label(frame), frame.time_text());
        let marks = frame.checkmarks();
        if !marks.is_empty() {
            line.push_str("  ");
            line.push_str(&marks);
        }
        if frame.status == TimerStatus::Paused {
            line.push_str("  (paused)");
        }
        line
    }
}

impl<W: Write> DisplayAdapter for PlainDisplay<W> {
    fn render(&mut self, update: &TimerUpdate) -> io::Result<()> {
        writeln!(self.out, "{}", Self::line(&update.frame))?;
        self.out.flush()
    }

    fn render_settings(&mut self, config: &IntervalConfig) -> io::Result<()> {
        writeln!(
            self.out,
            "Work: {} min  Break: {} min",
            config.work_minutes, config.short_break_minutes
        )?;
        self.out.flush()
    }

    fn show_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "error: {}", message)?;
        self.out.flush()
    }
}
