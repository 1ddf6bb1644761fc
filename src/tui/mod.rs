//! Terminal User Interface module for medqa.
//!
//! Provides a single-screen TUI with a question input, a submit control, and
//! an output region, using ratatui for rendering and crossterm for terminal
//! management.

use std::io;
use std::panic;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self as crossterm_event, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::api::AskClientTrait;
use crate::query::WORKER_THREAD_NAME;

mod app;
pub mod event;
mod ui;

pub use app::App;

/// How long to wait for a key before checking on the outstanding request.
const TICK: Duration = Duration::from_millis(100);

/// Terminal type the event loop draws into.
type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Switches stdout into raw mode on the alternate screen and wraps it.
///
/// If the alternate screen cannot be entered, raw mode is switched back off
/// before returning so the shell is left usable.
///
/// # Errors
///
/// Returns an error if any terminal mode change fails.
fn init_terminal() -> Result<Tui> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("failed to enter alternate screen");
    }
    Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")
}

/// Puts the terminal back the way the shell had it.
///
/// `run_event_loop` calls this whether the loop ended normally or with an
/// error. Each step is attempted even if an earlier one fails; the first
/// failure is reported.
///
/// # Errors
///
/// Returns the first step that failed.
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    let raw = disable_raw_mode().context("failed to disable raw mode");
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen");
    let cursor = terminal.show_cursor().context("failed to show cursor");
    raw.and(screen).and(cursor)
}

/// Best-effort restore for the panic hook, which has no [`Tui`] handle.
fn restore_terminal_panic() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Whether a panic on the named thread should be left to the controller.
///
/// The controller turns a panicked request worker into a failed query, so
/// the screen stays up and the panic is only logged.
fn panic_is_recovered(thread_name: Option<&str>) -> bool {
    thread_name == Some(WORKER_THREAD_NAME)
}

/// Installs a panic hook that restores the terminal before the previous hook
/// prints the panic.
fn init_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        if panic_is_recovered(std::thread::current().name()) {
            tracing::error!(%panic_info, "request worker panicked");
            return;
        }
        restore_terminal_panic();
        original_hook(panic_info);
    }));
}

/// Runs the main event loop for the TUI.
///
/// # Errors
///
/// Returns an error if event polling, rendering, or terminal operations fail.
/// Terminal state is always restored, even on error.
pub fn run_event_loop(app: &mut App) -> Result<()> {
    let mut terminal = init_terminal()?;

    let result = run_event_loop_internal(app, &mut terminal);

    if let Err(e) = restore_terminal(&mut terminal) {
        eprintln!("Error restoring terminal: {e}");
    }

    result
}

/// Redraws, waits up to one tick for a key, then applies any finished request.
fn run_event_loop_internal(app: &mut App, terminal: &mut Tui) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            ui::draw(frame, app);
        })?;

        if crossterm_event::poll(TICK)?
            && let Event::Key(key) = crossterm_event::read()?
            && key.kind == KeyEventKind::Press
            && event::handle_key_event(app, key)
        {
            break;
        }

        app.tick();
    }

    Ok(())
}

/// Entry point for the TUI application.
///
/// # Errors
///
/// Returns an error if terminal initialization or the event loop fails.
pub fn run(client: Arc<dyn AskClientTrait>, question: Option<String>) -> Result<()> {
    init_panic_hook();

    let mut app = match question {
        Some(question) => App::with_question(client, question),
        None => App::new(client),
    };

    info!("starting terminal UI");
    run_event_loop(&mut app).context("TUI event loop failed")?;
    info!("terminal UI closed");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::thread;

    use super::*;
    use crate::query::{Phase, QueryController};
    use crate::test_utils::{StubClient, scenario_a_answer};

    #[test]
    fn only_the_request_worker_panic_is_recovered() {
        assert!(panic_is_recovered(Some(WORKER_THREAD_NAME)));
        assert!(!panic_is_recovered(Some("main")));
        assert!(!panic_is_recovered(None));
    }

    #[test]
    fn controller_runs_requests_on_the_recoverable_thread() {
        let seen = Arc::new(Mutex::new(None));
        let record = Arc::clone(&seen);
        let client = StubClient::new(move |_| {
            *record.lock().unwrap() = thread::current().name().map(str::to_string);
            Ok(scenario_a_answer())
        });
        let mut controller = QueryController::new(Arc::new(client));
        controller.submit();
        controller.wait();

        assert_eq!(controller.state().phase(), Phase::Succeeded);
        let name = seen.lock().unwrap().clone();
        assert!(panic_is_recovered(name.as_deref()));
    }
}
