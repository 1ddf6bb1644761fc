use std::sync::Arc;

use crate::api::AskClientTrait;
use crate::query::{QueryController, QueryState};
use crate::render::{self, View};

/// Application state for the TUI.
///
/// Wraps the query controller and adds the purely visual bits (output scroll).
pub struct App {
    controller: QueryController,
    /// Scroll offset of the output region
    output_scroll: u16,
}

impl App {
    /// Creates a new App with the default question.
    pub fn new(client: Arc<dyn AskClientTrait>) -> Self {
        Self::from_controller(QueryController::new(client))
    }

    /// Creates a new App with the given initial question.
    pub fn with_question(client: Arc<dyn AskClientTrait>, question: impl Into<String>) -> Self {
        Self::from_controller(QueryController::with_state(
            client,
            QueryState::new(question),
        ))
    }

    fn from_controller(controller: QueryController) -> Self {
        Self {
            controller,
            output_scroll: 0,
        }
    }

    /// Returns the current query state.
    pub fn state(&self) -> &QueryState {
        self.controller.state()
    }

    /// Projects the current state for drawing.
    pub fn view(&self) -> View {
        render::project(self.controller.state())
    }

    /// Returns the question input buffer.
    pub fn question(&self) -> &str {
        self.controller.state().question_text()
    }

    /// Appends a character to the question.
    pub fn push_question_char(&mut self, c: char) {
        let mut text = self.question().to_string();
        text.push(c);
        self.controller.set_question_text(text);
    }

    /// Removes the last character from the question.
    pub fn pop_question_char(&mut self) {
        let mut text = self.question().to_string();
        text.pop();
        self.controller.set_question_text(text);
    }

    /// Empties the question input.
    pub fn clear_question(&mut self) {
        self.controller.set_question_text(String::new());
    }

    /// Submits the current question. Returns whether a request was started.
    pub fn submit(&mut self) -> bool {
        let started = self.controller.submit();
        if started {
            self.output_scroll = 0;
        }
        started
    }

    /// Applies a finished request, if any. Called once per event-loop tick.
    ///
    /// Returns `true` if the state changed.
    pub fn tick(&mut self) -> bool {
        self.controller.poll()
    }

    /// Blocks until the outstanding request (if any) finishes.
    pub fn wait_for_answer(&mut self) -> bool {
        self.controller.wait()
    }

    /// Returns the current output scroll offset.
    pub fn output_scroll(&self) -> u16 {
        self.output_scroll
    }

    /// Scrolls the output down by the specified amount.
    pub fn scroll_output_down(&mut self, amount: u16) {
        self.output_scroll = self.output_scroll.saturating_add(amount);
    }

    /// Scrolls the output up by the specified amount.
    pub fn scroll_output_up(&mut self, amount: u16) {
        self.output_scroll = self.output_scroll.saturating_sub(amount);
    }
}
