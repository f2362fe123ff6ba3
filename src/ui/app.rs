use crate::error::Result;
use crate::exec::{Executor, OutputLog};
use crate::registry::Registry;
use crate::ui::keymap::{Action, KeyPress, Keymap};
use crate::ui::modal::{CredentialModal, Secret};
use crate::ui::nav::{Navigator, View};

/// Lines moved by a PageUp/PageDown when no page size is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Everything the event loop mutates, in one place.
///
/// Handlers take `&mut App`; nothing else holds launcher state.
pub struct App {
    pub nav: Navigator,
    pub modal: CredentialModal,
    pub output: OutputLog,
    pub keymap: Keymap,
    pub should_quit: bool,
    pub page_size: usize,
    executor: Executor,
}

impl App {
    pub fn new(registry: Registry, executor: Executor, keymap: Keymap) -> Result<Self> {
        Ok(Self {
            nav: Navigator::new(registry)?,
            modal: CredentialModal::new(),
            output: OutputLog::new(),
            keymap,
            should_quit: false,
            page_size: DEFAULT_PAGE_SIZE,
            executor,
        })
    }

    pub fn focus(&self) -> View {
        self.nav.focused()
    }

    pub fn captured_secret(&self) -> Option<&Secret> {
        self.modal.captured_secret()
    }

    /// Route a key through the keymap and run the bound action.
    ///
    /// Unbound keys are ignored. An `Err` means a broken invariant, not a
    /// failed command.
    pub fn handle_key(&mut self, key: impl Into<KeyPress>) -> Result<()> {
        let key = key.into();
        match self
            .keymap
            .resolve(self.nav.focused(), self.modal.is_visible(), key)
        {
            Some(action) => self.dispatch(action),
            None => Ok(()),
        }
    }

    /// Run one action. While the credential modal is visible, only the
    /// modal's own actions take effect; everything else is dropped.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        if self.modal.is_visible() && !action.is_modal() {
            tracing::debug!(?action, "dropped while modal is visible");
            return Ok(());
        }
        match action {
            Action::Quit => self.should_quit = true,
            Action::FocusLeft => self.nav.focus_left(),
            Action::FocusRight => self.nav.focus_right(),
            Action::FocusOptions => self.nav.switch_focus(View::Options)?,
            Action::CursorUp => self.move_cursor(-1),
            Action::CursorDown => self.move_cursor(1),
            Action::Execute => self.execute_selected(),
            Action::OpenCredentialModal => self.modal.show(&mut self.nav),
            Action::ToggleOutput => self.nav.toggle_between(View::Output, View::Categories),
            Action::GoBack => self.nav.switch_to_previous(),
            Action::ScrollOutputUp => self.output.scroll(-1),
            Action::ScrollOutputDown => self.output.scroll(1),
            Action::PageOutputUp => self.output.scroll(-page_delta(self.page_size)),
            Action::PageOutputDown => self.output.scroll(page_delta(self.page_size)),
            Action::ClearOutput => self.output.clear(),
            Action::CommitModal => self.modal.commit(&mut self.nav),
            Action::CancelModal => self.modal.cancel(&mut self.nav),
            Action::DeleteChar => self.modal.pop_char(),
            Action::Input(c) => self.modal.push_char(c),
        }
        Ok(())
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.nav.focused() {
            View::Output => self.output.scroll(delta),
            view => self.nav.move_cursor(view, delta),
        }
    }

    /// Run the command under the options cursor. Failures end up in the
    /// output pane; they never stop the loop.
    pub fn execute_selected(&mut self) {
        let Some(command) = self.nav.selected_command().cloned() else {
            return;
        };
        self.run(&command.text);
    }

    /// Run arbitrary command text through the executor.
    pub fn run(&mut self, command: &str) {
        match self.executor.execute(&mut self.output, command) {
            Ok(execution) => self.output.reveal(execution.first_line),
            Err(e) => tracing::warn!(command, error = %e, "execution failed"),
        }
    }
}

fn page_delta(page_size: usize) -> isize {
    isize::try_from(page_size.max(1)).unwrap_or(isize::MAX)
}
