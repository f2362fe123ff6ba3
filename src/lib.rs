//! Launchpad - a terminal launcher for a catalog of shell commands
//!
//! This library provides the command registry, the pane navigation and
//! keybinding state machine, the credential prompt, and synchronous command
//! execution into a scrolling output log.

pub mod error;
pub mod exec;
pub mod registry;
pub mod ui;

pub use error::{Error, Result};
