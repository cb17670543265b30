//! Countdown engine error types.

use thiserror::Error;

use crate::types::TimerStatus;

/// Errors returned when a command does not apply to the current state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// `start` while an interval is already in progress.
    #[error("timer is already {}", .0.as_str())]
    AlreadyActive(TimerStatus),

    /// `pause` while not counting down.
    #[error("timer is not running")]
    NotRunning,

    /// `resume` while not paused.
    #[error("timer is not paused")]
    NotPaused,

    /// Chaining requested before the current interval expired.
    #[error("current interval has not expired")]
    NotExpired,

    /// Durations can only change while the timer is idle.
    #[error("durations can only be changed while the timer is idle (reset first)")]
    ConfigLocked,

    /// The receiving side of the event channel was dropped.
    #[error("timer event channel closed")]
    ChannelClosed,
}

impl EngineError {
    /// Returns true if the timer can keep going after this error.
    ///
    /// Only a closed event channel is fatal; everything else is a command
    /// that did not apply.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::ChannelClosed)
    }
}
