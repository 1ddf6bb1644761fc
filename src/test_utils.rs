//! Shared test helpers.

use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::api::{AnswerResult, ApiError, AskClientTrait, Citation};

type Responder = Box<dyn Fn(&str) -> Result<AnswerResult, ApiError> + Send + Sync>;

/// In-process stand-in for the question-answering service.
///
/// Records every question it receives. A gated stub blocks inside `ask`
/// until the test releases it, which keeps the controller in flight.
pub struct StubClient {
    responder: Responder,
    questions: Mutex<Vec<String>>,
    gate: Option<Mutex<Receiver<()>>>,
}

impl StubClient {
    pub fn new(
        responder: impl Fn(&str) -> Result<AnswerResult, ApiError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            responder: Box::new(responder),
            questions: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn answering(result: AnswerResult) -> Self {
        Self::new(move |_| Ok(result.clone()))
    }

    pub fn rejecting(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::new(move |_| {
            Err(ApiError::Http {
                status,
                body: body.clone(),
            })
        })
    }

    /// Makes `ask` wait for one message on the returned sender.
    pub fn gated(mut self) -> (Self, Sender<()>) {
        let (tx, rx) = mpsc::channel();
        self.gate = Some(Mutex::new(rx));
        (self, tx)
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.questions.lock().unwrap().len()
    }
}

impl AskClientTrait for StubClient {
    fn ask(&self, question: &str) -> Result<AnswerResult, ApiError> {
        self.questions.lock().unwrap().push(question.to_string());
        if let Some(gate) = &self.gate {
            let _ = gate.lock().unwrap().recv();
        }
        (self.responder)(question)
    }
}

/// A transport-level reqwest error, produced without touching the network.
pub fn network_error() -> reqwest::Error {
    reqwest::blocking::Client::new()
        .get("not-a-valid-url")
        .build()
        .unwrap_err()
}

pub fn scenario_a_answer() -> AnswerResult {
    AnswerResult::new(
        "rag",
        "Yes, dizziness is a reported side effect.",
        vec![Citation::new("DOC1", "C3")],
        Some("...dizziness may occur...".to_string()),
    )
}
