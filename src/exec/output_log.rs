//! # Output Log
//!
//! The line buffer behind the output pane, with its own cursor and scroll
//! origin. Lines are only ever appended; [`OutputLog::clear`] is the single
//! way to remove them.

/// What produced a line; the renderer styles each kind differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The command being run, echoed before its output.
    Echo,
    /// A line of captured stdout.
    Output,
    /// A line of captured stderr, or an execution failure.
    Error,
    /// Visual break after each command.
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub kind: LineKind,
    pub text: String,
}

impl LogLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OutputLog {
    lines: Vec<LogLine>,
    cursor: usize,
    origin: usize,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(LogLine::new(kind, text));
    }

    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// First visible line.
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Drop every line and reset cursor and origin to `(0, 0)`.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.cursor = 0;
        self.origin = 0;
    }

    /// Move the viewport by `delta` lines, clamped to the buffer.
    pub fn scroll(&mut self, delta: isize) {
        let last = self.lines.len().saturating_sub(1);
        let target = self.origin.saturating_add_signed(delta).min(last);
        self.origin = target;
        self.cursor = target;
    }

    /// Scroll so that `index` is the first visible line.
    pub fn reveal(&mut self, index: usize) {
        let target = index.min(self.lines.len().saturating_sub(1));
        self.origin = target;
        self.cursor = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_with(n: usize) -> OutputLog {
        let mut log = OutputLog::new();
        for i in 0..n {
            log.push(LineKind::Output, format!("line {}", i));
        }
        log
    }

    #[test]
    fn test_scroll_clamps_at_both_ends() {
        let mut log = log_with(5);
        log.scroll(-1);
        assert_eq!((log.cursor(), log.origin()), (0, 0));

        log.scroll(3);
        assert_eq!(log.origin(), 3);
        log.scroll(10);
        assert_eq!(log.origin(), 4);
        log.scroll(1);
        assert_eq!(log.origin(), 4);
    }

    #[test]
    fn test_scroll_on_empty_log_stays_at_zero() {
        let mut log = OutputLog::new();
        log.scroll(1);
        log.scroll(-1);
        assert_eq!((log.cursor(), log.origin()), (0, 0));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut log = log_with(20);
        log.scroll(7);
        log.clear();
        assert!(log.is_empty());
        assert_eq!((log.cursor(), log.origin()), (0, 0));
    }

    #[test]
    fn test_reveal_clamps_to_last_line() {
        let mut log = log_with(3);
        log.reveal(1);
        assert_eq!(log.origin(), 1);
        log.reveal(99);
        assert_eq!(log.origin(), 2);
    }
}
