//! Pure projection of [`QueryState`] into a presentation tree.

use crate::api::{AnswerResult, Citation};
use crate::query::{Phase, QueryState};

/// Label of the submit control while idle.
pub const SUBMIT_LABEL: &str = "Ask";
/// Label of the submit control while a request is outstanding.
pub const SUBMIT_BUSY_LABEL: &str = "Asking...";
/// Prefix that marks the output as an error.
pub const ERROR_PREFIX: &str = "Error:";
/// Shown instead of an empty citation list.
pub const NO_CITATIONS: &str = "No citations";

/// Everything a front end needs to draw the query screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub question: String,
    pub submit: SubmitControl,
    pub output: Output,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: &'static str,
}

/// Content of the output region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Idle or waiting: nothing to show
    Empty,
    /// Last request failed
    Error(String),
    /// Last request succeeded
    Answer(AnswerView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerView {
    pub mode: String,
    pub answer: String,
    pub citations: Citations,
    /// Verbatim excerpt; `None` means the section is not drawn at all.
    /// An empty excerpt from the service counts as absent.
    pub context_preview: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Citations {
    /// One display line per citation, in presentation order
    Lines(Vec<String>),
    /// The service returned no citations
    Empty,
}

/// Projects the state into a view. Calling it twice on the same state yields
/// equal views.
pub fn project(state: &QueryState) -> View {
    let in_flight = state.phase() == Phase::InFlight;

    let output = match (state.phase(), state.error_message(), state.result()) {
        (Phase::Failed, Some(message), _) => Output::Error(message.to_string()),
        (Phase::Succeeded, _, Some(result)) => Output::Answer(project_answer(result)),
        _ => Output::Empty,
    };

    View {
        question: state.question_text().to_string(),
        submit: SubmitControl {
            enabled: state.can_submit(),
            label: if in_flight {
                SUBMIT_BUSY_LABEL
            } else {
                SUBMIT_LABEL
            },
        },
        output,
    }
}

fn project_answer(result: &AnswerResult) -> AnswerView {
    let citations = if result.citations().is_empty() {
        Citations::Empty
    } else {
        Citations::Lines(result.citations().iter().map(citation_line).collect())
    };

    AnswerView {
        mode: result.mode().to_string(),
        answer: result.answer().to_string(),
        citations,
        context_preview: result
            .retrieved_context_preview()
            .filter(|preview| !preview.is_empty())
            .map(str::to_string),
    }
}

/// Formats a citation as `doc_id: <doc>, chunk_id: <chunk>`.
pub fn citation_line(citation: &Citation) -> String {
    format!(
        "doc_id: {}, chunk_id: {}",
        citation.doc_id(),
        citation.chunk_id()
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::query::QueryController;
    use crate::test_utils::{StubClient, scenario_a_answer};

    fn settled(client: StubClient, question: &str) -> QueryState {
        let mut controller = QueryController::new(Arc::new(client));
        controller.set_question_text(question);
        controller.submit();
        controller.wait();
        controller.state().clone()
    }

    #[test]
    fn scenario_a_renders_mode_answer_citation_and_preview() {
        let state = settled(
            StubClient::answering(scenario_a_answer()),
            "Can this drug cause dizziness?",
        );

        let Output::Answer(answer) = project(&state).output else {
            panic!("expected an answer block");
        };
        assert_eq!(answer.mode, "rag");
        assert_eq!(answer.answer, "Yes, dizziness is a reported side effect.");
        assert_eq!(
            answer.citations,
            Citations::Lines(vec!["doc_id: DOC1, chunk_id: C3".to_string()])
        );
        assert_eq!(
            answer.context_preview.as_deref(),
            Some("...dizziness may occur...")
        );
    }

    #[test]
    fn scenario_b_empty_citations_render_indicator() {
        let state = settled(
            StubClient::answering(AnswerResult::new("rag", "No idea.", Vec::new(), None)),
            "q",
        );

        let Output::Answer(answer) = project(&state).output else {
            panic!("expected an answer block");
        };
        assert_eq!(answer.citations, Citations::Empty);
        assert_eq!(answer.context_preview, None);
    }

    #[test]
    fn empty_preview_is_treated_as_absent() {
        let result = AnswerResult::new(
            "rag",
            "a",
            vec![Citation::new("DOC1", "C3")],
            Some(String::new()),
        );
        let state = settled(StubClient::answering(result), "q");

        let Output::Answer(answer) = project(&state).output else {
            panic!("expected an answer block");
        };
        assert_eq!(answer.context_preview, None);
    }

    #[test]
    fn whitespace_preview_is_kept_verbatim() {
        let result = AnswerResult::new("rag", "a", Vec::new(), Some("  \n".to_string()));
        let state = settled(StubClient::answering(result), "q");

        let Output::Answer(answer) = project(&state).output else {
            panic!("expected an answer block");
        };
        assert_eq!(answer.context_preview.as_deref(), Some("  \n"));
    }

    #[test]
    fn scenario_c_error_only() {
        let state = settled(StubClient::rejecting(500, "internal error"), "q");

        let view = project(&state);
        let Output::Error(message) = &view.output else {
            panic!("expected an error block");
        };
        assert!(message.contains("500"));
        assert!(message.contains("internal error"));
    }

    #[test]
    fn idle_renders_no_output_and_enabled_submit() {
        let view = project(&QueryState::default());

        assert_eq!(view.output, Output::Empty);
        assert!(view.submit.enabled);
        assert_eq!(view.submit.label, SUBMIT_LABEL);
        assert_eq!(view.question, "Can this drug cause dizziness?");
    }

    #[test]
    fn in_flight_disables_submit_and_hides_output() {
        let (client, release) = StubClient::answering(scenario_a_answer()).gated();
        let mut controller = QueryController::new(Arc::new(client));
        controller.submit();

        let view = project(controller.state());
        assert_eq!(view.output, Output::Empty);
        assert!(!view.submit.enabled);
        assert_eq!(view.submit.label, SUBMIT_BUSY_LABEL);

        release.send(()).unwrap();
        controller.wait();
        let view = project(controller.state());
        assert!(view.submit.enabled);
        assert_eq!(view.submit.label, SUBMIT_LABEL);
    }

    #[test]
    fn blank_question_disables_submit() {
        let view = project(&QueryState::new("   "));
        assert!(!view.submit.enabled);
        assert_eq!(view.submit.label, SUBMIT_LABEL);
    }

    #[test]
    fn projection_is_idempotent() {
        let state = settled(StubClient::answering(scenario_a_answer()), "q");
        assert_eq!(project(&state), project(&state));

        let state = settled(StubClient::rejecting(502, "bad gateway"), "q");
        assert_eq!(project(&state), project(&state));
    }

    #[test]
    fn citation_lines_follow_sequence_order() {
        let result = AnswerResult::new(
            "rag",
            "a",
            vec![Citation::new("Z", "9"), Citation::new("A", "1")],
            None,
        );
        let state = settled(StubClient::answering(result), "q");

        let Output::Answer(answer) = project(&state).output else {
            panic!("expected an answer block");
        };
        assert_eq!(
            answer.citations,
            Citations::Lines(vec![
                "doc_id: Z, chunk_id: 9".to_string(),
                "doc_id: A, chunk_id: 1".to_string(),
            ])
        );
    }
}
