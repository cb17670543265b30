//! Display adapters for the timer.
//!
//! Both front-ends implement [`DisplayAdapter`] and differ only in how a
//! [`TimerUpdate`] is drawn:
//! - `plain`: one text line per update
//! - `styled`: colored labels, a progress bar and in-place tick redraws

mod plain;
mod styled;

use std::io;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use plain::PlainDisplay;
pub use styled::{progress_bar, StyledDisplay};

use crate::engine::TimerUpdate;
use crate::types::IntervalConfig;

/// Renders timer state. Implementations never touch timer logic.
pub trait DisplayAdapter {
    /// Draws the state left behind by one engine event.
    fn render(&mut self, update: &TimerUpdate) -> io::Result<()>;

    /// Draws the current interval lengths.
    fn render_settings(&mut self, config: &IntervalConfig) -> io::Result<()>;

    /// Shows a rejected command or unparsable input.
    fn show_error(&mut self, message: &str) -> io::Result<()>;

    /// Leaves the output in a clean state before exit.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<D: DisplayAdapter + ?Sized> DisplayAdapter for Box<D> {
    fn render(&mut self, update: &TimerUpdate) -> io::Result<()> {
        (**self).render(update)
    }

    fn render_settings(&mut self, config: &IntervalConfig) -> io::Result<()> {
        (**self).render_settings(config)
    }

    fn show_error(&mut self, message: &str) -> io::Result<()> {
        (**self).show_error(message)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}

/// Which front-end to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// Plain text lines
    Plain,
    /// Colors, emoji labels and a progress bar
    #[default]
    Styled,
}

impl DisplayStyle {
    /// Creates the matching adapter writing to stdout.
    pub fn stdout_adapter(self) -> Box<dyn DisplayAdapter> {
        match self {
            DisplayStyle::Plain => Box::new(PlainDisplay::new(io::stdout())),
            DisplayStyle::Styled => Box::new(StyledDisplay::new(io::stdout())),
        }
    }
}
