//! Timer engine for the Pomodoro timer.
//!
//! - `session`: session counter and interval classification
//! - `timer`: countdown state machine and its events
//! - `ticker`: the single pending one-second deadline
//! - `error`: command errors

pub mod error;
pub mod session;
pub mod ticker;
pub mod timer;

pub use error::EngineError;
pub use session::{classify, SessionCounter};
pub use ticker::{wait_for, Ticker, TICK_PERIOD};
pub use timer::{TickOutcome, TimerEngine, TimerEvent, TimerUpdate};
