//! # Navigation
//!
//! Focus and selection state for the launcher panes.
//!
//! The [`Navigator`] is the only writer of which view has focus, where each
//! list cursor sits and which command group is selected. The options pane has
//! no content of its own: [`Navigator::options`] resolves the selected group
//! on every call, so moving the category cursor and the options shown can
//! never disagree.

use crate::error::{Error, Result};
use crate::registry::{Command, Registry};
use std::fmt;

/// A focusable pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Categories,
    Output,
    Options,
    PasswordModal,
}

impl View {
    /// Panes in left-to-right screen order. The modal is not part of it.
    pub const PANES: [View; 3] = [View::Categories, View::Output, View::Options];

    pub fn name(self) -> &'static str {
        match self {
            View::Categories => "categories",
            View::Output => "output",
            View::Options => "options",
            View::PasswordModal => "password",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct Navigator {
    registry: Registry,
    focused: View,
    previous: Option<View>,
    selected_group: String,
    category_cursor: usize,
    option_cursor: usize,
    modal_mounted: bool,
}

impl Navigator {
    /// Focus starts on the categories pane with the first group selected.
    pub fn new(registry: Registry) -> Result<Self> {
        let selected_group = registry
            .group_order()
            .first()
            .cloned()
            .ok_or(Error::EmptyRegistry)?;
        // Fail now rather than on first render
        registry.resolve(&selected_group)?;

        Ok(Self {
            registry,
            focused: View::Categories,
            previous: None,
            selected_group,
            category_cursor: 0,
            option_cursor: 0,
            modal_mounted: false,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn focused(&self) -> View {
        self.focused
    }

    pub fn previous(&self) -> Option<View> {
        self.previous
    }

    pub fn selected_group(&self) -> &str {
        &self.selected_group
    }

    /// Cursor index for a list-bearing view. The output pane keeps its own
    /// cursor in the output log.
    pub fn cursor(&self, view: View) -> usize {
        match view {
            View::Categories => self.category_cursor,
            View::Options => self.option_cursor,
            View::Output | View::PasswordModal => 0,
        }
    }

    /// Commands of the selected group, in menu order.
    pub fn options(&self) -> &[Command] {
        // Selection only ever comes from group_order, which the registry
        // validated against its map.
        self.registry
            .resolve(&self.selected_group)
            .unwrap_or_default()
    }

    pub fn selected_command(&self) -> Option<&Command> {
        self.options().get(self.option_cursor)
    }

    pub fn is_mounted(&self, view: View) -> bool {
        match view {
            View::PasswordModal => self.modal_mounted,
            View::Categories | View::Output | View::Options => true,
        }
    }

    pub(crate) fn mount_modal(&mut self) {
        self.modal_mounted = true;
    }

    pub(crate) fn unmount_modal(&mut self) {
        self.modal_mounted = false;
    }

    /// Focus `target`, remembering the current view as the previous one.
    pub fn switch_focus(&mut self, target: View) -> Result<()> {
        if !self.is_mounted(target) {
            return Err(Error::UnknownView(target));
        }
        if target == self.focused {
            return Ok(());
        }
        tracing::debug!(from = %self.focused, to = %target, "focus");
        self.previous = Some(self.focused);
        self.focused = target;
        Ok(())
    }

    /// Go back to the previously focused view, if there is one.
    pub fn switch_to_previous(&mut self) {
        let Some(target) = self.previous else {
            return;
        };
        if !self.is_mounted(target) {
            self.previous = None;
            return;
        }
        tracing::debug!(from = %self.focused, to = %target, "focus back");
        self.previous = Some(self.focused);
        self.focused = target;
    }

    /// Put focus and history back exactly as they were, without recording
    /// the view being left. Used when the modal is torn down.
    pub(crate) fn restore(&mut self, focused: View, previous: Option<View>) {
        tracing::debug!(from = %self.focused, to = %focused, "focus restored");
        self.focused = focused;
        self.previous = previous;
    }

    /// Focus `b` when `a` is focused, otherwise `a`. Absent views are ignored.
    pub fn toggle_between(&mut self, a: View, b: View) {
        let target = if self.focused == a { b } else { a };
        if self.is_mounted(target) {
            // Cannot fail: mount state was just checked
            let _ = self.switch_focus(target);
        }
    }

    pub fn focus_left(&mut self) {
        self.focus_neighbour(-1);
    }

    pub fn focus_right(&mut self) {
        self.focus_neighbour(1);
    }

    fn focus_neighbour(&mut self, delta: isize) {
        let Some(pos) = View::PANES.iter().position(|v| *v == self.focused) else {
            return;
        };
        let next = pos
            .saturating_add_signed(delta)
            .min(View::PANES.len() - 1);
        let _ = self.switch_focus(View::PANES[next]);
    }

    /// Move the cursor of `view` by `delta`, clamped to its list.
    ///
    /// Moving on the categories pane also selects the highlighted group and
    /// puts the options cursor back on the group's first command.
    pub fn move_cursor(&mut self, view: View, delta: isize) {
        match view {
            View::Categories => {
                let len = self.registry.len();
                let next = clamp_index(self.category_cursor, delta, len);
                if next == self.category_cursor {
                    return;
                }
                self.category_cursor = next;
                if let Some(name) = self.registry.group_order().get(next) {
                    self.selected_group = name.clone();
                }
                self.option_cursor = 0;
                tracing::debug!(group = %self.selected_group, "group selected");
            }
            View::Options => {
                let len = self.options().len();
                self.option_cursor = clamp_index(self.option_cursor, delta, len);
            }
            View::Output | View::PasswordModal => {}
        }
    }
}

fn clamp_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}
