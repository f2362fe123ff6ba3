//! # Keymap
//!
//! A single `(scope, key) → action` table consulted by one dispatch point.
//!
//! Bindings are either global or scoped to one view. A scoped binding only
//! applies while its view has focus and shadows a global binding for the same
//! key. While the password modal is up, nothing but the modal's own bindings
//! is consulted: printable characters become [`Action::Input`] and every other
//! key is swallowed.

use crate::error::{Error, Result};
use crate::ui::nav::View;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use std::fmt;

/// Something a key can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusLeft,
    FocusRight,
    FocusOptions,
    CursorUp,
    CursorDown,
    Execute,
    OpenCredentialModal,
    ToggleOutput,
    GoBack,
    ScrollOutputUp,
    ScrollOutputDown,
    PageOutputUp,
    PageOutputDown,
    ClearOutput,
    CommitModal,
    CancelModal,
    DeleteChar,
    /// A character typed into the modal.
    Input(char),
}

impl Action {
    /// Actions that belong to the credential modal.
    pub fn is_modal(self) -> bool {
        matches!(
            self,
            Action::CommitModal | Action::CancelModal | Action::DeleteChar | Action::Input(_)
        )
    }
}

/// Where a binding applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Global,
    View(View),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => f.write_str("global"),
            Scope::View(view) => write!(f, "{}", view),
        }
    }
}

/// A key with its modifiers, normalised so that `Q` and `Shift+Q` match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let modifiers = match code {
            // Shift is already encoded in the character itself
            KeyCode::Char(_) => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        };
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}

impl From<KeyEvent> for KeyPress {
    fn from(event: KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("Alt+")?;
        }
        match self.code {
            KeyCode::Char(c) => write!(f, "{}", c),
            other => write!(f, "{:?}", other),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: HashMap<(Scope, KeyPress), Action>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding. Rebinding an existing `(scope, key)` is an error.
    pub fn bind(&mut self, scope: Scope, key: KeyPress, action: Action) -> Result<()> {
        if self.bindings.contains_key(&(scope, key)) {
            return Err(Error::KeybindingConflict { scope, key });
        }
        self.bindings.insert((scope, key), action);
        Ok(())
    }

    /// The action bound to exactly this scope and key.
    pub fn get(&self, scope: Scope, key: KeyPress) -> Option<Action> {
        self.bindings.get(&(scope, key)).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Find the action for `key` given the focused view and modal state.
    pub fn resolve(&self, focused: View, modal_active: bool, key: KeyPress) -> Option<Action> {
        if modal_active {
            if let Some(action) = self.get(Scope::View(View::PasswordModal), key) {
                return Some(action);
            }
            return match key.code {
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    Some(Action::Input(c))
                }
                _ => None,
            };
        }

        self.get(Scope::View(focused), key)
            .or_else(|| self.get(Scope::Global, key))
    }

    /// The launcher's standard bindings.
    pub fn default_bindings() -> Result<Self> {
        use Action::*;
        use KeyCode::*;

        let output = Scope::View(View::Output);
        let modal = Scope::View(View::PasswordModal);
        let table = [
            (Scope::Global, KeyPress::ctrl('c'), Quit),
            (Scope::Global, KeyPress::plain(Char('q')), Quit),
            (Scope::Global, KeyPress::plain(Char('h')), FocusLeft),
            (Scope::Global, KeyPress::plain(Left), FocusLeft),
            (Scope::Global, KeyPress::plain(Char('l')), FocusRight),
            (Scope::Global, KeyPress::plain(Right), FocusRight),
            (Scope::Global, KeyPress::plain(Char('k')), CursorUp),
            (Scope::Global, KeyPress::plain(Up), CursorUp),
            (Scope::Global, KeyPress::plain(Char('j')), CursorDown),
            (Scope::Global, KeyPress::plain(Down), CursorDown),
            (Scope::Global, KeyPress::plain(Char('p')), OpenCredentialModal),
            (Scope::Global, KeyPress::plain(Tab), ToggleOutput),
            (Scope::Global, KeyPress::plain(Char('b')), GoBack),
            (Scope::Global, KeyPress::plain(Backspace), GoBack),
            (Scope::Global, KeyPress::plain(PageUp), PageOutputUp),
            (Scope::Global, KeyPress::plain(PageDown), PageOutputDown),
            (Scope::View(View::Categories), KeyPress::plain(Enter), FocusOptions),
            (Scope::View(View::Options), KeyPress::plain(Enter), Execute),
            (output, KeyPress::plain(Char('k')), ScrollOutputUp),
            (output, KeyPress::plain(Up), ScrollOutputUp),
            (output, KeyPress::plain(Char('j')), ScrollOutputDown),
            (output, KeyPress::plain(Down), ScrollOutputDown),
            (output, KeyPress::plain(Char('c')), ClearOutput),
            (modal, KeyPress::plain(Enter), CommitModal),
            (modal, KeyPress::plain(Esc), CancelModal),
            (modal, KeyPress::plain(Backspace), DeleteChar),
        ];

        let mut keymap = Self::new();
        for (scope, key, action) in table {
            keymap.bind(scope, key, action)?;
        }
        Ok(keymap)
    }
}
