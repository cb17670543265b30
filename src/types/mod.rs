//! Core data types for the Pomodoro timer.
//!
//! This module defines the data structures used for:
//! - Interval classification (work, short break, long break)
//! - Interval configuration with clamping and validation
//! - Timer state and the snapshots handed to display adapters

use serde::{Deserialize, Serialize};

/// Upper bound for the work interval, in minutes.
pub const MAX_WORK_MINUTES: u32 = 120;

/// Upper bound for the short break interval, in minutes.
pub const MAX_SHORT_BREAK_MINUTES: u32 = 60;

/// The long break lasts this many short breaks.
pub const LONG_BREAK_MULTIPLIER: u32 = 4;

/// Glyph rendered once per completed work session.
pub const CHECKMARK: &str = "✅";

// ============================================================================
// IntervalKind
// ============================================================================

/// The kind of a single timed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalKind {
    /// Focused work
    Work,
    /// Short break between work sessions
    ShortBreak,
    /// Long break after every fourth work session
    LongBreak,
}

impl IntervalKind {
    /// Returns the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalKind::Work => "work",
            IntervalKind::ShortBreak => "short_break",
            IntervalKind::LongBreak => "long_break",
        }
    }

    /// Returns true for either kind of break.
    pub fn is_break(&self) -> bool {
        !matches!(self, IntervalKind::Work)
    }
}

// ============================================================================
// IntervalConfig
// ============================================================================

/// Interval lengths for the work/break cycle.
///
/// The long break is not stored: it is always
/// [`LONG_BREAK_MULTIPLIER`] times the short break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalConfig {
    /// Work duration in minutes (1-120)
    pub work_minutes: u32,
    /// Short break duration in minutes (1-60)
    pub short_break_minutes: u32,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            short_break_minutes: 5,
        }
    }
}

impl IntervalConfig {
    /// Creates a new configuration with the specified work duration.
    pub fn with_work_minutes(mut self, minutes: u32) -> Self {
        self.work_minutes = minutes;
        self
    }

    /// Creates a new configuration with the specified short break duration.
    pub fn with_short_break_minutes(mut self, minutes: u32) -> Self {
        self.short_break_minutes = minutes;
        self
    }

    /// Long break duration in minutes.
    pub fn long_break_minutes(&self) -> u32 {
        self.short_break_minutes.saturating_mul(LONG_BREAK_MULTIPLIER)
    }

    /// Returns the length of the given interval kind in minutes.
    pub fn minutes_for(&self, kind: IntervalKind) -> u32 {
        match kind {
            IntervalKind::Work => self.work_minutes,
            IntervalKind::ShortBreak => self.short_break_minutes,
            IntervalKind::LongBreak => self.long_break_minutes(),
        }
    }

    /// Returns the length of the given interval kind in seconds.
    pub fn seconds_for(&self, kind: IntervalKind) -> u32 {
        self.minutes_for(kind).saturating_mul(60)
    }

    /// Longest interval this configuration can produce, in seconds.
    pub fn max_interval_seconds(&self) -> u32 {
        self.seconds_for(IntervalKind::Work)
            .max(self.seconds_for(IntervalKind::LongBreak))
    }

    /// Shifts the work duration by `delta` minutes, clamped to 1-120.
    ///
    /// Returns the new work duration.
    pub fn adjust_work_minutes(&mut self, delta: i32) -> u32 {
        self.work_minutes = clamp_minutes(self.work_minutes, delta, MAX_WORK_MINUTES);
        self.work_minutes
    }

    /// Shifts the short break duration by `delta` minutes, clamped to 1-60.
    ///
    /// Returns the new short break duration.
    pub fn adjust_short_break_minutes(&mut self, delta: i32) -> u32 {
        self.short_break_minutes =
            clamp_minutes(self.short_break_minutes, delta, MAX_SHORT_BREAK_MINUTES);
        self.short_break_minutes
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.work_minutes < 1 || self.work_minutes > MAX_WORK_MINUTES {
            return Err(format!(
                "work duration must be between 1 and {} minutes",
                MAX_WORK_MINUTES
            ));
        }
        if self.short_break_minutes < 1 || self.short_break_minutes > MAX_SHORT_BREAK_MINUTES {
            return Err(format!(
                "break duration must be between 1 and {} minutes",
                MAX_SHORT_BREAK_MINUTES
            ));
        }
        Ok(())
    }
}

fn clamp_minutes(current: u32, delta: i32, max: u32) -> u32 {
    (i64::from(current) + i64::from(delta)).clamp(1, i64::from(max)) as u32
}

// ============================================================================
// TimerStatus
// ============================================================================

/// Countdown engine state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerStatus {
    /// No interval started, or reset
    #[default]
    Idle,
    /// Counting down
    Running,
    /// Countdown suspended, remaining time preserved
    Paused,
    /// Interval reached zero, next interval not yet started
    Expired,
}

impl TimerStatus {
    /// Returns the string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerStatus::Idle => "idle",
            TimerStatus::Running => "running",
            TimerStatus::Paused => "paused",
            TimerStatus::Expired => "expired",
        }
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// The single piece of mutable timer state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Current engine status
    pub status: TimerStatus,
    /// Number of intervals started since the last reset
    pub repetition_count: u32,
    /// Seconds left in the current interval
    pub remaining_seconds: u32,
    /// Kind of the current interval, if any
    pub interval: Option<IntervalKind>,
    /// Full length of the current interval in seconds
    pub interval_seconds: u32,
}

impl TimerState {
    /// Creates a new idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the countdown is active.
    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    /// Returns true if the countdown is paused.
    pub fn is_paused(&self) -> bool {
        self.status == TimerStatus::Paused
    }

    /// Number of work sessions completed so far.
    pub fn completed_work_sessions(&self) -> u32 {
        self.repetition_count / 2
    }

    /// Takes a display snapshot of this state.
    pub fn frame(&self) -> Frame {
        Frame {
            status: self.status,
            interval: self.interval,
            remaining_seconds: self.remaining_seconds,
            interval_seconds: self.interval_seconds,
            completed_work_sessions: self.completed_work_sessions(),
        }
    }
}

// ============================================================================
// Frame
// ============================================================================

/// Snapshot of the timer handed to display adapters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub status: TimerStatus,
    pub interval: Option<IntervalKind>,
    pub remaining_seconds: u32,
    pub interval_seconds: u32,
    pub completed_work_sessions: u32,
}

impl Frame {
    /// Remaining time as `M:SS`.
    pub fn time_text(&self) -> String {
        format_time(self.remaining_seconds)
    }

    /// Elapsed share of the current interval, 0-100.
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.interval_seconds, self.remaining_seconds)
    }

    /// One checkmark per completed work session.
    pub fn checkmarks(&self) -> String {
        checkmarks(self.completed_work_sessions)
    }
}

/// Formats seconds as `M:SS` with zero-padded seconds.
pub fn format_time(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Computes `(duration - remaining) / duration * 100`.
///
/// Returns 0 when no interval is active.
pub fn progress_percent(duration_seconds: u32, remaining_seconds: u32) -> f64 {
    if duration_seconds == 0 {
        return 0.0;
    }
    let elapsed = duration_seconds.saturating_sub(remaining_seconds);
    f64::from(elapsed) / f64::from(duration_seconds) * 100.0
}

/// Renders `count` checkmark glyphs.
pub fn checkmarks(count: u32) -> String {
    CHECKMARK.repeat(count as usize)
}

// ============================================================================
// Tests
// ============================================================================
