/// Question-answering service client module.
///
/// This module provides a blocking HTTP client for the remote `/ask` service,
/// its error type, and the answer/citation value types it returns.
mod client;
mod types;

pub use client::{
    API_BASE_ENV, ApiError, AskClient, AskClientBuilder, AskClientTrait, DEFAULT_API_BASE,
};
pub use types::{AnswerResult, AskRequest, Citation, HealthResponse};
