//! Query lifecycle: the interaction state and the controller that mutates it.
//!
//! The controller is the only writer of [`QueryState`]; renderers read it
//! through [`QueryController::state`].

mod controller;
mod state;

pub use controller::{QueryController, UNKNOWN_ERROR, WORKER_THREAD_NAME};
pub use state::{DEFAULT_QUESTION, Phase, QueryState};
