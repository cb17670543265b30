//! Pomodoro Timer Library
//!
//! This library provides the core functionality for the tomato timer.
//! It includes:
//! - Session counting and interval selection
//! - The countdown engine and its one-second ticker
//! - Plain and styled terminal front-ends behind one display trait
//! - Best-effort desktop notifications
//! - Configuration loading and the interactive runner

pub mod app;
pub mod cli;
pub mod config;
pub mod engine;
pub mod notification;
pub mod types;

// Re-export commonly used types for convenience
pub use app::{App, Flow};
pub use cli::{ControlCommand, DisplayAdapter, DisplayStyle, PlainDisplay, StyledDisplay};
pub use config::{AppConfig, ConfigError};
pub use engine::{
    classify, EngineError, SessionCounter, TickOutcome, Ticker, TimerEngine, TimerEvent,
    TimerUpdate,
};
pub use notification::{
    DesktopNotifier, DisabledNotifier, NotificationContent, NotificationError, Notifier,
    SystemNotifier,
};

#[cfg(any(test, feature = "test-utils"))]
pub use notification::MockNotifier;
pub use types::{Frame, IntervalConfig, IntervalKind, TimerState, TimerStatus};
