//! CLI module for the tomato timer.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `control`: parsing of interactive control commands
//! - `display`: the plain and styled front-ends

pub mod commands;
pub mod control;
pub mod display;

pub use commands::{Cli, Commands, RunArgs};
pub use control::{ControlCommand, ControlParseError};
pub use display::{DisplayAdapter, DisplayStyle, PlainDisplay, StyledDisplay};
