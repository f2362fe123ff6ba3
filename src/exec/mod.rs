//! # Exec Module
//!
//! Running catalog commands and collecting their output.
//!
//! | Piece | Role |
//! |-------|------|
//! | [`CommandRunner`] | Capability: run a command string synchronously |
//! | [`ShellRunner`] | Production runner, `/bin/sh -c <command>` by default |
//! | [`Executor`] | Echoes the command, runs it, appends output to the log |
//! | [`OutputLog`] | Append-only line buffer backing the output pane |
//!
//! Execution is blocking: the event loop waits for the spawned command to
//! finish. There is no timeout and no cancellation.

pub mod executor;
pub mod output_log;
pub mod runner;

pub use executor::{Execution, Executor};
pub use output_log::{LineKind, LogLine, OutputLog};
pub use runner::{CommandRunner, ExecError, RunOutput, ShellRunner};
