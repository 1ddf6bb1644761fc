//! Wire and value types for the question-answering service.

use serde::{Deserialize, Deserializer, Serialize};

/// Request body for `POST /ask`.
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}

/// A pointer to the source passage that supports part of an answer.
///
/// Both identifiers are opaque display strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Citation {
    doc_id: String,
    chunk_id: String,
}

impl Citation {
    /// Creates a new citation.
    pub fn new(doc_id: impl Into<String>, chunk_id: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            chunk_id: chunk_id.into(),
        }
    }

    /// Returns the source document identifier.
    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    /// Returns the passage identifier within the document.
    pub fn chunk_id(&self) -> &str {
        &self.chunk_id
    }
}

/// Answer returned by the service for a single question.
///
/// Citation order is presentation order. The service may omit `citations`
/// or send `null`; both are read as an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnswerResult {
    mode: String,
    answer: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    citations: Vec<Citation>,
    #[serde(default)]
    retrieved_context_preview: Option<String>,
}

impl AnswerResult {
    /// Creates a new answer result.
    pub fn new(
        mode: impl Into<String>,
        answer: impl Into<String>,
        citations: Vec<Citation>,
        retrieved_context_preview: Option<String>,
    ) -> Self {
        Self {
            mode: mode.into(),
            answer: answer.into(),
            citations,
            retrieved_context_preview,
        }
    }

    /// Returns the label describing how the answer was produced (e.g. "rag", "mock").
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Returns the natural-language answer text.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns the citations in presentation order.
    pub fn citations(&self) -> &[Citation] {
        &self.citations
    }

    /// Returns the raw retrieved context excerpt, if the service sent one.
    pub fn retrieved_context_preview(&self) -> Option<&str> {
        self.retrieved_context_preview.as_deref()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Citation>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Citation>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of the service's `GET /` health endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}
