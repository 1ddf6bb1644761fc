/// Question-answering service HTTP client implementation.
///
/// This module provides `AskClient` for making synchronous HTTP requests to the
/// service, along with its error type and builder.
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use super::types::{AnswerResult, AskRequest, HealthResponse};

/// Environment variable consulted when no base URL is given to the builder.
pub const API_BASE_ENV: &str = "MEDQA_API_BASE";

/// Base URL used when neither the builder nor the environment provide one.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Errors that can occur when talking to the question-answering service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-related errors (connection failures, DNS resolution, body reads)
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Request or response timeout errors
    #[error("Request timed out")]
    Timeout(#[source] reqwest::Error),

    /// Non-success HTTP status, with the raw response body
    #[error("API error {status}: {body}")]
    Http { status: u16, body: String },

    /// Response body was not the expected JSON shape
    #[error("Invalid response from service: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Invalid URL configuration error
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error)
        } else {
            Self::Network(error)
        }
    }
}

/// Builder for constructing `AskClient` instances.
///
/// # Examples
///
/// ```
/// use medqa::api::AskClientBuilder;
///
/// let client = AskClientBuilder::new()
///     .base_url("http://localhost:8000")
///     .build()
///     .expect("Failed to create client");
/// assert_eq!(client.base_url(), "http://localhost:8000");
/// ```
#[derive(Debug, Default)]
pub struct AskClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl AskClientBuilder {
    /// Creates a new `AskClientBuilder` with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL of the service (e.g., "http://127.0.0.1:8000").
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Overrides the transport's total request timeout.
    ///
    /// When unset, reqwest's own default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the `AskClient` with the configured settings.
    ///
    /// # Environment Variables
    ///
    /// If `base_url()` was not called, this method checks `MEDQA_API_BASE`.
    /// If that is not set either, it defaults to `http://127.0.0.1:8000`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the base URL does not parse, or
    /// `ApiError::Network` if the underlying HTTP client cannot be created.
    pub fn build(self) -> Result<AskClient, ApiError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => std::env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        };

        reqwest::Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let mut builder =
            reqwest::blocking::Client::builder().connect_timeout(Duration::from_secs(5));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::Network)?;

        Ok(AskClient { client, base_url })
    }
}

/// Synchronous HTTP client for the question-answering service.
///
/// Should be constructed using `AskClientBuilder`.
pub struct AskClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

/// Trait for the single outbound operation the query controller performs.
///
/// Enables driving the controller with stubs in unit tests.
pub trait AskClientTrait: Send + Sync {
    /// Sends one question to the service and returns its parsed answer.
    fn ask(&self, question: &str) -> Result<AnswerResult, ApiError>;
}

impl AskClient {
    /// Returns the base URL configured for this client.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins a path onto the base URL without doubling slashes.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Calls the service health endpoint and returns its status message.
    pub fn health(&self) -> Result<String, ApiError> {
        let url = self.endpoint("");
        debug!(%url, "checking service health");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(ApiError::from_transport)?;
        let status = response.status();
        let body = response.text().map_err(ApiError::from_transport)?;

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let health: HealthResponse =
            serde_json::from_str(&body).map_err(ApiError::Serialization)?;
        Ok(health.message)
    }

    fn ask_internal(&self, question: &str) -> Result<AnswerResult, ApiError> {
        let url = self.endpoint("ask");
        debug!(%url, question_len = question.len(), "sending question");

        let response = self
            .client
            .post(&url)
            .json(&AskRequest { question })
            .send()
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        let body = response.text().map_err(ApiError::from_transport)?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "service rejected question");
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(ApiError::Serialization)
    }
}

impl AskClientTrait for AskClient {
    fn ask(&self, question: &str) -> Result<AnswerResult, ApiError> {
        self.ask_internal(question)
    }
}
