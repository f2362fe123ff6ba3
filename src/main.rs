//! # Launchpad CLI Entry Point
//!
//! This is the main entry point for the Launchpad TUI application.
//!
//! ## Overview
//!
//! Launchpad shows a compiled-in catalog of shell commands grouped into
//! categories. Pick a category on the left, a command on the right, and its
//! output lands in the middle pane.
//!
//! ## Usage
//!
//! ```bash
//! # Start the launcher
//! launchpad
//!
//! # Use a different shell for this session
//! launchpad --shell /bin/bash
//!
//! # Print the catalog and exit
//! launchpad --list
//! ```
//!
//! ## Key Bindings
//!
//! ### Everywhere
//! - `q` / `Ctrl+c` - Quit
//! - `h` `l` / `Left` `Right` - Move focus between panes
//! - `j` `k` / `Down` `Up` - Move the cursor in the focused pane
//! - `Tab` - Jump between the output pane and the categories
//! - `b` / `Backspace` - Back to the previously focused pane
//! - `p` - Open the password prompt
//! - `PageUp` / `PageDown` - Page through the output
//!
//! ### Options pane
//! - `Enter` - Run the highlighted command
//!
//! ### Output pane
//! - `j` / `k` - Scroll by line
//! - `c` - Clear the output
//!
//! ### Password prompt
//! - `Enter` - Save, `Esc` - Cancel, `Backspace` - Delete a character
//!
//! Commands run synchronously: the interface is unresponsive until the
//! running command exits.

use launchpad::exec::{Executor, ShellRunner};
use launchpad::registry::Registry;
use launchpad::ui::{self, config::Config, keymap::Keymap, App};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Launchpad - run catalogued shell commands from a terminal menu
#[derive(Parser, Debug)]
#[command(name = "launchpad")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A terminal launcher for a catalog of shell commands", long_about = None)]
struct Args {
    /// Path to the config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Shell used to run commands, overriding the config file
    #[arg(short, long, value_name = "PROGRAM")]
    shell: Option<String>,

    /// Where to write the log (defaults to the platform data directory)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the command catalog and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_application(args);

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

fn run_application(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(shell) = args.shell {
        config.shell = shell;
    }

    let registry = Registry::builtin().context("Built-in command catalog is invalid")?;

    if args.list {
        print_catalog(&registry);
        return Ok(());
    }

    let log_path = match args.log_file {
        Some(path) => Some(path),
        None => Config::log_path().ok(),
    };
    if let Some(path) = log_path {
        if let Err(e) = init_logging(&path, &config.log_level) {
            eprintln!("Warning: Could not initialize logging: {:#}", e);
        }
    }

    let runner = ShellRunner::new(config.shell.clone(), config.shell_flag.clone())
        .with_stderr(config.capture_stderr);
    let keymap = Keymap::default_bindings().context("Failed to register keybindings")?;
    let mut app = App::new(registry, Executor::new(Box::new(runner)), keymap)
        .context("Failed to initialize navigation")?;
    app.page_size = config.page_size;

    tracing::info!(shell = %config.shell, "launchpad started");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader);

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    tracing::info!("launchpad exited");
    Ok(())
}

/// Send `tracing` output to a file; the terminal belongs to the TUI.
fn init_logging(path: &Path, default_level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_env("LAUNCHPAD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Failed to install log subscriber")?;

    Ok(())
}

fn print_catalog(registry: &Registry) {
    for group in registry.groups() {
        println!("{}", group.name);
        for command in &group.commands {
            println!("  {:<20} {}", command.label, command.text);
        }
    }
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        if !step(app, event_reader)? {
            break;
        }
    }

    Ok(())
}

/// Handle at most one event. Returns `false` once the app should exit.
fn step(app: &mut App, event_reader: &mut dyn EventReader) -> Result<bool> {
    let Some(event) = event_reader.read_event(Duration::from_millis(250))? else {
        return Ok(true);
    };

    if let Event::Key(key) = event {
        // Windows reports releases as well
        if key.kind == KeyEventKind::Press {
            app.handle_key(key).context("Key handler failed")?;
        }
    }

    Ok(!app.should_quit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use launchpad::exec::{CommandRunner, ExecError, RunOutput};
    use std::collections::VecDeque;
    use tempfile::TempDir;

    /// Mock event reader for testing that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            Ok(self.events.pop_front())
        }
    }

    struct Silent;

    impl CommandRunner for Silent {
        fn run(&self, _command: &str) -> std::result::Result<RunOutput, ExecError> {
            Ok(RunOutput::default())
        }
    }

    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn test_app() -> App {
        App::new(
            Registry::builtin().expect("registry"),
            Executor::new(Box::new(Silent)),
            Keymap::default_bindings().expect("keymap"),
        )
        .expect("app")
    }

    #[test]
    fn test_mock_event_reader() {
        let mut reader = MockEventReader::new(vec![key_event(KeyCode::Char('a'))]);
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).expect("read"),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('a'),
                ..
            }))
        ));
        assert!(reader
            .read_event(Duration::from_millis(10))
            .expect("read")
            .is_none());
    }

    #[test]
    fn test_crossterm_event_reader_type() {
        let _reader: Box<dyn EventReader> = Box::new(CrosstermEventReader);
    }

    #[test]
    fn test_step_stops_on_quit() {
        let mut app = test_app();
        let mut reader = MockEventReader::new(vec![
            key_event(KeyCode::Char('j')),
            key_event(KeyCode::Char('q')),
        ]);

        assert!(step(&mut app, &mut reader).expect("step"));
        assert_eq!(app.nav.selected_group(), "git");
        assert!(!step(&mut app, &mut reader).expect("step"));
    }

    #[test]
    fn test_step_without_event_keeps_running() {
        let mut app = test_app();
        let mut reader = MockEventReader::new(Vec::new());
        assert!(step(&mut app, &mut reader).expect("step"));
    }

    #[test]
    fn test_step_ignores_key_release() {
        let mut app = test_app();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        release.kind = KeyEventKind::Release;
        let mut reader = MockEventReader::new(vec![Event::Key(release)]);

        assert!(step(&mut app, &mut reader).expect("step"));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_run_application_lists_catalog() {
        let temp_dir = TempDir::new().expect("temp dir");
        let args = Args {
            config: Some(temp_dir.path().join("config.json")),
            shell: None,
            log_file: None,
            list: true,
        };
        assert!(run_application(args).is_ok());
    }

    #[test]
    fn test_run_application_rejects_bad_config() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"unknown": 1}"#).expect("write");

        let args = Args {
            config: Some(path),
            shell: None,
            log_file: None,
            list: true,
        };
        let err = run_application(args).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_init_logging_creates_file() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("logs").join("launchpad.log");
        // A global subscriber may already be installed by another test; the
        // file must exist either way.
        let _ = init_logging(&path, "debug");
        assert!(path.exists());
    }
}
