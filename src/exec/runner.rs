//! # Command Runner
//!
//! The process-execution capability used by the [`Executor`](super::Executor).
//!
//! [`ShellRunner`] hands the literal command text to a shell, the same way the
//! command would run if typed at a prompt, so pipes and redirections in the
//! catalog work. Stdin is detached: the TUI owns the terminal, and a command
//! that tries to prompt would otherwise hang waiting on raw-mode input.

use std::io;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Errors from starting a command or collecting its output.
///
/// A command that runs and exits non-zero is *not* an error.
#[derive(Error, Debug)]
pub enum ExecError {
    /// The shell could not be started.
    #[error("failed to spawn '{shell}': {source}")]
    Spawn {
        shell: String,
        #[source]
        source: io::Error,
    },

    /// The command started but its output could not be collected.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Captured result of one command run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    pub stdout: String,
    /// Only populated when the runner is configured to capture it.
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Run a command string synchronously and return what it printed.
pub trait CommandRunner {
    fn run(&self, command: &str) -> Result<RunOutput, ExecError>;
}

/// Runs commands through a system shell.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
    flag: String,
    capture_stderr: bool,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new("/bin/sh", "-c")
    }
}

impl ShellRunner {
    pub fn new(shell: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            flag: flag.into(),
            capture_stderr: false,
        }
    }

    /// Also collect stderr into [`RunOutput::stderr`].
    pub fn with_stderr(mut self, capture: bool) -> Self {
        self.capture_stderr = capture;
        self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<RunOutput, ExecError> {
        let stderr = if self.capture_stderr {
            Stdio::piped()
        } else {
            Stdio::null()
        };

        let child = Command::new(&self.shell)
            .arg(&self.flag)
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(stderr)
            .spawn()
            .map_err(|source| ExecError::Spawn {
                shell: self.shell.clone(),
                source,
            })?;

        let output = child.wait_with_output()?;

        Ok(RunOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_runner_captures_stdout() {
        let output = ShellRunner::default()
            .run("echo hello; echo world")
            .expect("run");
        assert_eq!(output.stdout, "hello\nworld\n");
        assert!(output.success());
    }

    #[test]
    fn test_shell_runner_non_zero_exit_is_not_an_error() {
        let output = ShellRunner::default().run("exit 3").expect("run");
        assert_eq!(output.exit_code, Some(3));
        assert!(!output.success());
    }

    #[test]
    fn test_shell_runner_ignores_stderr_by_default() {
        let output = ShellRunner::default().run("echo oops >&2").expect("run");
        assert!(output.stdout.is_empty());
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn test_shell_runner_captures_stderr_when_enabled() {
        let output = ShellRunner::default()
            .with_stderr(true)
            .run("echo oops >&2")
            .expect("run");
        assert_eq!(output.stderr, "oops\n");
    }

    #[test]
    fn test_shell_runner_missing_shell() {
        let runner = ShellRunner::new("/nonexistent/shell", "-c");
        let err = runner.run("ls").unwrap_err();
        assert!(matches!(err, ExecError::Spawn { .. }));
        assert!(err.to_string().contains("/nonexistent/shell"));
    }
}
