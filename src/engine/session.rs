//! Session counter and interval selection.
//!
//! Every interval start bumps the counter; the new count picks the kind:
//! multiples of 8 are long breaks, other even counts are short breaks and
//! odd counts are work. The first interval is therefore always work.

use crate::types::{IntervalConfig, IntervalKind};

/// Classifies a 1-indexed repetition count.
pub fn classify(count: u32) -> IntervalKind {
    if count % 8 == 0 {
        IntervalKind::LongBreak
    } else if count % 2 == 0 {
        IntervalKind::ShortBreak
    } else {
        IntervalKind::Work
    }
}

/// Counts interval starts since the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionCounter {
    count: u32,
}

impl SessionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Moves to the next interval and returns its kind and length in seconds.
    pub fn advance(&mut self, config: &IntervalConfig) -> (IntervalKind, u32) {
        self.count += 1;
        let kind = classify(self.count);
        (kind, config.seconds_for(kind))
    }

    pub fn completed_work_sessions(&self) -> u32 {
        self.count / 2
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
