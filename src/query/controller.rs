//! Drives one question through its request lifecycle.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use tracing::{debug, error, info, warn};

use crate::api::{AnswerResult, ApiError, AskClientTrait};

use super::state::{Phase, QueryState};

/// Message surfaced when a failure carries no description of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Name given to the thread that runs each request.
pub const WORKER_THREAD_NAME: &str = "medqa-ask";

type Outcome = Result<AnswerResult, ApiError>;

/// Sole writer of [`QueryState`].
///
/// `submit` hands the request to a worker thread and returns immediately;
/// the owner calls [`poll`](Self::poll) (or [`wait`](Self::wait)) to apply
/// the outcome on its own thread. At most one request is outstanding, and a
/// second submit while one is pending is rejected rather than queued.
pub struct QueryController {
    state: QueryState,
    client: Arc<dyn AskClientTrait>,
    pending: Option<Receiver<Outcome>>,
}

impl QueryController {
    /// Creates a controller in the `Idle` phase with the default question.
    pub fn new(client: Arc<dyn AskClientTrait>) -> Self {
        Self::with_state(client, QueryState::default())
    }

    /// Creates a controller starting from the given state.
    pub fn with_state(client: Arc<dyn AskClientTrait>, state: QueryState) -> Self {
        Self {
            state,
            client,
            pending: None,
        }
    }

    /// Returns the current state for rendering.
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Replaces the question text. Never touches the phase.
    pub fn set_question_text(&mut self, text: impl Into<String>) {
        self.state.set_question_text(text.into());
    }

    /// Starts a request for the current (trimmed) question.
    ///
    /// Returns `false` without changing anything when a request is already
    /// in flight or the question is blank.
    pub fn submit(&mut self) -> bool {
        if self.state.phase() == Phase::InFlight {
            debug!("submit declined: request already in flight");
            return false;
        }
        let question = self.state.trimmed_question().to_string();
        if question.is_empty() {
            debug!("submit declined: question is blank");
            return false;
        }

        self.state.begin_request();
        info!(question_len = question.len(), "submitting question");

        let (tx, rx) = mpsc::channel();
        let client = Arc::clone(&self.client);
        let spawned = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                let outcome = client.ask(&question);
                // Receiver is gone only if the controller was dropped.
                let _ = tx.send(outcome);
            });

        match spawned {
            Ok(_) => self.pending = Some(rx),
            Err(e) => {
                error!(error = %e, "failed to start request worker");
                self.finish(Err(describe(&e.to_string())));
            }
        }
        true
    }

    /// Applies the outcome of the outstanding request if it has arrived.
    ///
    /// Returns `true` if the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome.map_err(|e| describe(&e.to_string())),
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(worker_vanished()),
        };
        self.pending = None;
        self.finish(outcome);
        true
    }

    /// Blocks until the outstanding request completes and applies it.
    ///
    /// Returns `false` if nothing was pending.
    pub fn wait(&mut self) -> bool {
        let Some(rx) = self.pending.take() else {
            return false;
        };

        let outcome = match rx.recv() {
            Ok(outcome) => outcome.map_err(|e| describe(&e.to_string())),
            Err(_) => Err(worker_vanished()),
        };
        self.finish(outcome);
        true
    }

    fn finish(&mut self, outcome: Result<AnswerResult, String>) {
        match outcome {
            Ok(result) => {
                info!(
                    mode = result.mode(),
                    citations = result.citations().len(),
                    "question answered"
                );
                self.state.succeed(result);
            }
            Err(message) => {
                warn!(%message, "question failed");
                self.state.fail(message);
            }
        }
    }
}

/// Error text for a failure, falling back to [`UNKNOWN_ERROR`].
fn describe(message: &str) -> String {
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message.to_string()
    }
}

fn worker_vanished() -> String {
    error!("request worker exited without reporting an outcome");
    UNKNOWN_ERROR.to_string()
}
