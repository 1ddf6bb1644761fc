//! Keyboard event handling for the TUI.
//!
//! Maps crossterm keyboard events to application state changes. There is a
//! single text input, so every printable key edits the question.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

/// Lines scrolled by PageUp / PageDown.
const PAGE_SCROLL: u16 = 10;

/// Handles a keyboard event and updates the app state accordingly.
///
/// Returns `true` if the application should quit, `false` otherwise.
///
/// # Event Handling
///
/// - `Esc` / `Ctrl+C`: Quit application
/// - `Enter`: Submit the question (ignored while a request is in flight)
/// - `Backspace`: Delete the last character
/// - `Ctrl+U`: Clear the question
/// - `Up` / `Down`, `PageUp` / `PageDown`: Scroll the output
/// - Any other printable character is appended to the question
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Esc {
        return true;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('u') => app.clear_question(),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Backspace => app.pop_question_char(),
        KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            app.push_question_char(c);
        }
        KeyCode::Up => app.scroll_output_up(1),
        KeyCode::Down => app.scroll_output_down(1),
        KeyCode::PageUp => app.scroll_output_up(PAGE_SCROLL),
        KeyCode::PageDown => app.scroll_output_down(PAGE_SCROLL),
        _ => {}
    }

    false
}
