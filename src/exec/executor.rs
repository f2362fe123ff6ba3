//! # Executor
//!
//! Runs one catalog command and writes the result into an [`OutputLog`].
//!
//! Every invocation produces a block of the form
//!
//! ```text
//! [14:02:11] $ ls -la
//! <stdout, one log line per output line>
//! ────────────────────────────────────────
//! ```
//!
//! If the runner fails, the echo line stays, an error line takes the place
//! of the output, and the separator still closes the block. Lines already in
//! the log are never touched, and the executor can be used again right away.

use super::output_log::{LineKind, OutputLog};
use super::runner::{CommandRunner, ExecError};
use chrono::Local;
use std::time::{Duration, Instant};

/// Marker that distinguishes echoed commands from their output.
pub const ECHO_MARKER: &str = "$ ";

/// Text of the line closing each command's block.
pub const SEPARATOR: &str = "────────────────────────────────────────";

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Index of the echo line that opens this run's block.
    pub first_line: usize,
    /// Number of captured output lines appended (stdout and stderr).
    pub output_lines: usize,
    pub exit_code: Option<i32>,
    pub elapsed: Duration,
}

pub struct Executor {
    runner: Box<dyn CommandRunner>,
}

impl Executor {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Run `command` to completion and append its block to `log`.
    pub fn execute(&self, log: &mut OutputLog, command: &str) -> Result<Execution, ExecError> {
        let first_line = log.len();
        log.push(
            LineKind::Echo,
            format!(
                "[{}] {}{}",
                Local::now().format("%H:%M:%S"),
                ECHO_MARKER,
                command
            ),
        );

        let started = Instant::now();
        let output = match self.runner.run(command) {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(command, error = %e, "command failed to run");
                log.push(LineKind::Error, format!("error: {}", e));
                log.push(LineKind::Separator, SEPARATOR);
                return Err(e);
            }
        };
        let elapsed = started.elapsed();

        let mut output_lines = 0;
        for line in output.stdout.lines() {
            log.push(LineKind::Output, line);
            output_lines += 1;
        }
        for line in output.stderr.lines() {
            log.push(LineKind::Error, line);
            output_lines += 1;
        }
        log.push(LineKind::Separator, SEPARATOR);

        tracing::info!(
            command,
            exit_code = ?output.exit_code,
            success = output.success(),
            lines = output_lines,
            elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            "command finished"
        );

        Ok(Execution {
            first_line,
            output_lines,
            exit_code: output.exit_code,
            elapsed,
        })
    }
}
