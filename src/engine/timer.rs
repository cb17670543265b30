//! Countdown engine for the Pomodoro timer.
//!
//! This module provides the core timer functionality:
//! - State transitions (Idle → Running ⇄ Paused, Running → Expired → Running)
//! - One-second countdown steps
//! - Duration adjustments while idle
//! - Event firing for display updates and notifications
//!
//! The engine never schedules anything itself. The runner owns the ticker
//! and calls [`TimerEngine::tick`] once per elapsed second, then
//! [`TimerEngine::chain_next`] when a tick reports expiry.

use tokio::sync::mpsc;
use tracing::{debug, info};

use super::error::EngineError;
use super::session::SessionCounter;
use crate::types::{Frame, IntervalConfig, IntervalKind, TimerState, TimerStatus};

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events for display updates and notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// A new interval began
    IntervalStarted {
        kind: IntervalKind,
        /// Repetition count of this interval (1-indexed)
        session: u32,
        duration_seconds: u32,
        /// True when started by expiry of the previous interval
        chained: bool,
    },
    /// One second elapsed
    Tick { remaining_seconds: u32 },
    /// The current interval reached zero
    IntervalExpired {
        kind: IntervalKind,
        completed_work_sessions: u32,
    },
    /// Countdown paused
    Paused { remaining_seconds: u32 },
    /// Countdown resumed
    Resumed { remaining_seconds: u32 },
    /// Timer reset to idle
    Reset,
    /// Interval lengths changed
    DurationsChanged { config: IntervalConfig },
    /// Current state requested, nothing changed
    Snapshot,
}

/// An event together with the state it left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerUpdate {
    pub event: TimerEvent,
    pub frame: Frame,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting down; the next tick should be scheduled
    Continue,
    /// The interval reached zero; call [`TimerEngine::chain_next`]
    Expired,
    /// The engine was not running; nothing changed
    Ignored,
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Timer engine that owns the countdown state and emits events.
pub struct TimerEngine {
    config: IntervalConfig,
    sessions: SessionCounter,
    state: TimerState,
    event_tx: mpsc::UnboundedSender<TimerUpdate>,
}

impl TimerEngine {
    /// Creates a new idle engine with the given configuration and event channel.
    pub fn new(config: IntervalConfig, event_tx: mpsc::UnboundedSender<TimerUpdate>) -> Self {
        Self {
            config,
            sessions: SessionCounter::new(),
            state: TimerState::new(),
            event_tx,
        }
    }

    /// Starts the first interval of a new cycle.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AlreadyActive`] unless the engine is idle.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.state.status != TimerStatus::Idle {
            return Err(EngineError::AlreadyActive(self.state.status));
        }

        info!("Starting timer");
        self.begin_next_interval(false)
    }

    /// Applies one elapsed second.
    pub fn tick(&mut self) -> Result<TickOutcome, EngineError> {
        if !self.state.is_running() {
            debug!(status = self.state.status.as_str(), "Ignoring tick");
            return Ok(TickOutcome::Ignored);
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        self.emit(TimerEvent::Tick {
            remaining_seconds: self.state.remaining_seconds,
        })?;

        if self.state.remaining_seconds > 0 {
            return Ok(TickOutcome::Continue);
        }

        self.state.status = TimerStatus::Expired;
        // Expiry is only reachable from a started interval.
        let kind = self.state.interval.unwrap_or(IntervalKind::Work);
        debug!(kind = kind.as_str(), "Interval expired");
        self.emit(TimerEvent::IntervalExpired {
            kind,
            completed_work_sessions: self.sessions.completed_work_sessions(),
        })?;

        Ok(TickOutcome::Expired)
    }

    /// Starts the interval following an expired one.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotExpired`] unless the current interval expired.
    pub fn chain_next(&mut self) -> Result<(), EngineError> {
        if self.state.status != TimerStatus::Expired {
            return Err(EngineError::NotExpired);
        }

        self.begin_next_interval(true)
    }

    /// Pauses the countdown, keeping the remaining time.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotRunning`] if the timer is not running.
    pub fn pause(&mut self) -> Result<(), EngineError> {
        if !self.state.is_running() {
            return Err(EngineError::NotRunning);
        }

        info!(remaining = self.state.remaining_seconds, "Pausing timer");
        self.state.status = TimerStatus::Paused;
        self.emit(TimerEvent::Paused {
            remaining_seconds: self.state.remaining_seconds,
        })
    }

    /// Resumes a paused countdown from the preserved remaining time.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotPaused`] if the timer is not paused.
    pub fn resume(&mut self) -> Result<(), EngineError> {
        if !self.state.is_paused() {
            return Err(EngineError::NotPaused);
        }

        info!(remaining = self.state.remaining_seconds, "Resuming timer");
        self.state.status = TimerStatus::Running;
        self.emit(TimerEvent::Resumed {
            remaining_seconds: self.state.remaining_seconds,
        })
    }

    /// Returns to idle from any state, clearing the session count.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        info!("Resetting timer");
        self.sessions.reset();
        self.state = TimerState::new();
        self.emit(TimerEvent::Reset)
    }

    /// Shifts the work duration by `delta` minutes (never below 1).
    ///
    /// Returns the new work duration in minutes.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigLocked`] unless the engine is idle.
    pub fn adjust_work_duration(&mut self, delta: i32) -> Result<u32, EngineError> {
        self.ensure_idle()?;
        let minutes = self.config.adjust_work_minutes(delta);
        debug!(minutes, "Work duration adjusted");
        self.emit(TimerEvent::DurationsChanged {
            config: self.config,
        })?;
        Ok(minutes)
    }

    /// Shifts the short break duration by `delta` minutes (never below 1).
    ///
    /// The long break follows as four times the short break.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigLocked`] unless the engine is idle.
    pub fn adjust_break_duration(&mut self, delta: i32) -> Result<u32, EngineError> {
        self.ensure_idle()?;
        let minutes = self.config.adjust_short_break_minutes(delta);
        debug!(minutes, "Break duration adjusted");
        self.emit(TimerEvent::DurationsChanged {
            config: self.config,
        })?;
        Ok(minutes)
    }

    /// Emits the current state without changing it.
    pub fn snapshot(&self) -> Result<(), EngineError> {
        self.emit(TimerEvent::Snapshot)
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Returns the interval configuration.
    pub fn config(&self) -> &IntervalConfig {
        &self.config
    }

    /// Takes a display snapshot of the current state.
    pub fn frame(&self) -> Frame {
        self.state.frame()
    }

    fn ensure_idle(&self) -> Result<(), EngineError> {
        if self.state.status == TimerStatus::Idle {
            Ok(())
        } else {
            Err(EngineError::ConfigLocked)
        }
    }

    fn begin_next_interval(&mut self, chained: bool) -> Result<(), EngineError> {
        let (kind, duration_seconds) = self.sessions.advance(&self.config);
        debug_assert!(duration_seconds <= self.config.max_interval_seconds());

        self.state.status = TimerStatus::Running;
        self.state.repetition_count = self.sessions.count();
        self.state.interval = Some(kind);
        self.state.interval_seconds = duration_seconds;
        self.state.remaining_seconds = duration_seconds;

        debug!(
            kind = kind.as_str(),
            session = self.state.repetition_count,
            duration_seconds,
            "Interval started"
        );

        self.emit(TimerEvent::IntervalStarted {
            kind,
            session: self.state.repetition_count,
            duration_seconds,
            chained,
        })
    }

    fn emit(&self, event: TimerEvent) -> Result<(), EngineError> {
        self.event_tx
            .send(TimerUpdate {
                event,
                frame: self.state.frame(),
            })
            .map_err(|_| EngineError::ChannelClosed)
    }
}

// ============================================================================
// Tests
// ============================================================================
