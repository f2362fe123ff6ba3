//! Error types for the launcher core.
//!
//! Everything in [`Error`] is a broken invariant set up at construction time
//! (a malformed catalog, a conflicting keybinding, a request for a view that is
//! not mounted). These abort startup or the offending operation. Failures of
//! the commands themselves live in [`crate::exec::ExecError`] and never leave
//! the executor as anything worse than a rendered error line.

use crate::ui::nav::View;
use crate::ui::keymap::{KeyPress, Scope};
use thiserror::Error;

/// Fatal-class errors raised by the registry, the navigator and the keymap.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A group name was looked up that the registry does not contain.
    #[error("unknown command group '{0}'")]
    UnknownGroup(String),

    /// The same group name was registered twice.
    #[error("duplicate command group '{0}'")]
    DuplicateGroup(String),

    /// A group exists but is missing from the display order.
    #[error("command group '{0}' is not listed in the group order")]
    UnorderedGroup(String),

    /// The catalog has no groups at all.
    #[error("command registry has no groups")]
    EmptyRegistry,

    /// Focus was requested for a view that is not currently mounted.
    #[error("unknown view '{0}'")]
    UnknownView(View),

    /// Two actions were bound to the same key in the same scope.
    #[error("key {key} is already bound in scope {scope}")]
    KeybindingConflict { scope: Scope, key: KeyPress },
}

/// Result type alias for launcher core operations.
pub type Result<T> = std::result::Result<T, Error>;
