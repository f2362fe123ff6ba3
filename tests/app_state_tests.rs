//! Application state tests
//!
//! Tests for navigation state: category selection driving the options pane,
//! cursor clamping, focus history and the output log.

use launchpad::exec::{CommandRunner, ExecError, Executor, LineKind, RunOutput};
use launchpad::registry::{Command, Group, Registry};
use launchpad::ui::keymap::{Action, Keymap};
use launchpad::ui::nav::View;
use launchpad::ui::App;
use std::cell::RefCell;
use std::rc::Rc;

/// Runner that records what it was asked to run and prints a fixed listing
struct Recording {
    calls: Rc<RefCell<Vec<String>>>,
}

impl CommandRunner for Recording {
    fn run(&self, command: &str) -> Result<RunOutput, ExecError> {
        self.calls.borrow_mut().push(command.to_string());
        Ok(RunOutput {
            stdout: "Cargo.toml\nREADME.md\nsrc\n".to_string(),
            stderr: String::new(),
            exit_code: Some(0),
        })
    }
}

fn registry() -> Registry {
    Registry::new(vec![
        Group::new(
            "general",
            vec![Command::new("List files", "ls"), Command::new("pwd", "pwd")],
        ),
        Group::new(
            "git",
            vec![
                Command::new("Status", "git status"),
                Command::new("Log", "git log --oneline"),
                Command::new("Branches", "git branch"),
            ],
        ),
    ])
    .expect("registry")
}

/// Helper to create a test app with a recording runner
fn create_test_app() -> (App, Rc<RefCell<Vec<String>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let runner = Recording {
        calls: Rc::clone(&calls),
    };
    let app = App::new(
        registry(),
        Executor::new(Box::new(runner)),
        Keymap::default_bindings().expect("keymap"),
    )
    .expect("app");
    (app, calls)
}

fn option_labels(app: &App) -> Vec<String> {
    app.nav.options().iter().map(|c| c.label.clone()).collect()
}

#[test]
fn test_initial_selection_is_first_group() {
    let (app, _) = create_test_app();
    assert_eq!(app.nav.selected_group(), "general");
    assert_eq!(app.focus(), View::Categories);
    assert_eq!(option_labels(&app), ["List files", "pwd"]);
}

#[test]
fn test_options_follow_every_category() {
    let (mut app, _) = create_test_app();
    let order: Vec<String> = app.nav.registry().group_order().to_vec();

    for (i, name) in order.iter().enumerate() {
        assert_eq!(app.nav.cursor(View::Categories), i);
        assert_eq!(app.nav.selected_group(), name.as_str());
        let expected: Vec<String> = app
            .nav
            .registry()
            .resolve(name)
            .expect("resolve")
            .iter()
            .map(|c| c.label.clone())
            .collect();
        assert_eq!(option_labels(&app), expected);
        app.nav.move_cursor(View::Categories, 1);
    }
}

#[test]
fn test_moving_down_selects_git() {
    let (mut app, _) = create_test_app();
    app.dispatch(Action::CursorDown).expect("dispatch");
    assert_eq!(app.nav.selected_group(), "git");
    assert_eq!(option_labels(&app), ["Status", "Log", "Branches"]);
}

#[test]
fn test_cursor_clamps_and_is_idempotent_at_bounds() {
    let (mut app, _) = create_test_app();

    for _ in 0..5 {
        app.nav.move_cursor(View::Categories, -1);
        assert_eq!(app.nav.cursor(View::Categories), 0);
    }
    for _ in 0..5 {
        app.nav.move_cursor(View::Categories, 1);
        assert_eq!(app.nav.cursor(View::Categories), 1);
    }
    assert_eq!(app.nav.selected_group(), "git");

    for _ in 0..10 {
        app.nav.move_cursor(View::Options, 1);
    }
    assert_eq!(app.nav.cursor(View::Options), 2);
    for _ in 0..10 {
        app.nav.move_cursor(View::Options, -1);
    }
    assert_eq!(app.nav.cursor(View::Options), 0);
}

#[test]
fn test_execute_first_general_option_runs_ls() {
    let (mut app, calls) = create_test_app();
    app.nav.switch_focus(View::Options).expect("focus");
    app.dispatch(Action::Execute).expect("dispatch");

    assert_eq!(*calls.borrow(), ["ls"]);

    let lines = app.output.lines();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0].kind, LineKind::Echo);
    assert!(lines[0].text.contains("ls"));
    assert_eq!(lines[1].text, "Cargo.toml");
    assert_eq!(lines[2].text, "README.md");
    assert_eq!(lines[3].text, "src");
    assert_eq!(lines[4].kind, LineKind::Separator);
}

#[test]
fn test_execute_keeps_prior_entries() {
    let (mut app, _) = create_test_app();
    app.run("first");
    let before = app.output.lines().to_vec();

    app.run("second");
    assert_eq!(&app.output.lines()[..before.len()], before.as_slice());
    assert_eq!(app.output.len(), before.len() * 2);
}

#[test]
fn test_execute_follows_selected_group() {
    let (mut app, calls) = create_test_app();
    app.dispatch(Action::CursorDown).expect("dispatch");
    app.nav.switch_focus(View::Options).expect("focus");
    app.dispatch(Action::CursorDown).expect("dispatch");
    app.dispatch(Action::Execute).expect("dispatch");

    assert_eq!(*calls.borrow(), ["git log --oneline"]);
}

#[test]
fn test_clear_output_resets_log() {
    let (mut app, _) = create_test_app();
    for _ in 0..4 {
        app.run("ls");
    }
    app.output.scroll(3);
    app.dispatch(Action::ClearOutput).expect("dispatch");

    assert!(app.output.is_empty());
    assert_eq!((app.output.cursor(), app.output.origin()), (0, 0));
    assert_eq!(app.nav.selected_group(), "general");
    assert_eq!(app.focus(), View::Categories);
}

#[test]
fn test_toggle_output_focus() {
    let (mut app, _) = create_test_app();
    app.dispatch(Action::ToggleOutput).expect("dispatch");
    assert_eq!(app.focus(), View::Output);
    app.dispatch(Action::ToggleOutput).expect("dispatch");
    assert_eq!(app.focus(), View::Categories);

    app.nav.switch_focus(View::Options).expect("focus");
    app.dispatch(Action::ToggleOutput).expect("dispatch");
    assert_eq!(app.focus(), View::Output);
}

#[test]
fn test_go_back_returns_to_previous_view() {
    let (mut app, _) = create_test_app();
    app.dispatch(Action::GoBack).expect("dispatch");
    assert_eq!(app.focus(), View::Categories);

    app.nav.switch_focus(View::Options).expect("focus");
    app.dispatch(Action::GoBack).expect("dispatch");
    assert_eq!(app.focus(), View::Categories);
    assert_eq!(app.nav.previous(), Some(View::Options));
}
