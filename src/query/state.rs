//! Interaction state for a single question/answer exchange.

use crate::api::AnswerResult;

/// Question shown in the input when the UI starts.
pub const DEFAULT_QUESTION: &str = "Can this drug cause dizziness?";

/// Stage of the query lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has been submitted yet
    Idle,
    /// A request is outstanding
    InFlight,
    /// The last request produced an answer
    Succeeded,
    /// The last request failed
    Failed,
}

/// Phase together with whatever the phase carries.
///
/// Keeping the result and the error inside the variants means the two can
/// never be present at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Stage {
    Idle,
    InFlight,
    Succeeded(AnswerResult),
    Failed(String),
}

/// State owned by the query controller and read by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    question_text: String,
    stage: Stage,
}

impl QueryState {
    /// Creates an idle state with the given question text.
    pub fn new(question_text: impl Into<String>) -> Self {
        Self {
            question_text: question_text.into(),
            stage: Stage::Idle,
        }
    }

    /// Returns the question exactly as the user typed it.
    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    /// Returns the question with surrounding whitespace removed.
    pub fn trimmed_question(&self) -> &str {
        self.question_text.trim()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        match self.stage {
            Stage::Idle => Phase::Idle,
            Stage::InFlight => Phase::InFlight,
            Stage::Succeeded(_) => Phase::Succeeded,
            Stage::Failed(_) => Phase::Failed,
        }
    }

    /// Returns the answer of the last request, only while `Succeeded`.
    pub fn result(&self) -> Option<&AnswerResult> {
        match &self.stage {
            Stage::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// Returns the error of the last request, only while `Failed`.
    pub fn error_message(&self) -> Option<&str> {
        match &self.stage {
            Stage::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether a submit would currently be accepted.
    pub fn can_submit(&self) -> bool {
        self.phase() != Phase::InFlight && !self.trimmed_question().is_empty()
    }

    pub(super) fn set_question_text(&mut self, text: String) {
        self.question_text = text;
    }

    /// Drops any previous result or error and enters `InFlight`.
    pub(super) fn begin_request(&mut self) {
        self.stage = Stage::InFlight;
    }

    pub(super) fn succeed(&mut self, result: AnswerResult) {
        self.stage = Stage::Succeeded(result);
    }

    pub(super) fn fail(&mut self, message: String) {
        self.stage = Stage::Failed(message);
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_QUESTION)
    }
}
