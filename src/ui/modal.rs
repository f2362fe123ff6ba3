//! # Credential Modal
//!
//! A password prompt drawn over the panes. While it is visible it owns focus
//! and the keymap consults nothing but its bindings. Committing stores the
//! typed text as a [`Secret`]; committing or cancelling tears the view down
//! and puts focus back where it was before the prompt opened.

use crate::ui::nav::{Navigator, View};
use std::fmt;

/// Captured credential. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ModalState {
    Hidden,
    Visible {
        buffer: String,
        restore_focus: View,
        restore_previous: Option<View>,
    },
}

#[derive(Debug)]
pub struct CredentialModal {
    state: ModalState,
    captured: Option<Secret>,
}

impl Default for CredentialModal {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialModal {
    pub fn new() -> Self {
        Self {
            state: ModalState::Hidden,
            captured: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, ModalState::Visible { .. })
    }

    pub fn captured_secret(&self) -> Option<&Secret> {
        self.captured.as_ref()
    }

    /// The typed text with every character replaced by `*`.
    pub fn masked(&self) -> String {
        match &self.state {
            ModalState::Visible { buffer, .. } => "*".repeat(buffer.chars().count()),
            ModalState::Hidden => String::new(),
        }
    }

    /// Mount the prompt and give it focus. Does nothing if already visible.
    pub fn show(&mut self, nav: &mut Navigator) {
        if self.is_visible() {
            return;
        }
        let restore_focus = nav.focused();
        let restore_previous = nav.previous();

        nav.mount_modal();
        if nav.switch_focus(View::PasswordModal).is_err() {
            nav.unmount_modal();
            return;
        }

        self.state = ModalState::Visible {
            buffer: String::new(),
            restore_focus,
            restore_previous,
        };
        tracing::debug!(restore = %restore_focus, "credential modal shown");
    }

    pub fn push_char(&mut self, c: char) {
        if let ModalState::Visible { buffer, .. } = &mut self.state {
            buffer.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let ModalState::Visible { buffer, .. } = &mut self.state {
            buffer.pop();
        }
    }

    /// Store the typed text and close the prompt.
    pub fn commit(&mut self, nav: &mut Navigator) {
        if let Some(buffer) = self.teardown(nav) {
            tracing::info!("credential captured");
            self.captured = Some(Secret(buffer));
        }
    }

    /// Close the prompt and discard what was typed. An earlier captured
    /// secret is kept.
    pub fn cancel(&mut self, nav: &mut Navigator) {
        if self.teardown(nav).is_some() {
            tracing::debug!("credential modal cancelled");
        }
    }

    fn teardown(&mut self, nav: &mut Navigator) -> Option<String> {
        match std::mem::replace(&mut self.state, ModalState::Hidden) {
            ModalState::Visible {
                buffer,
                restore_focus,
                restore_previous,
            } => {
                nav.unmount_modal();
                nav.restore(restore_focus, restore_previous);
                Some(buffer)
            }
            ModalState::Hidden => None,
        }
    }
}
