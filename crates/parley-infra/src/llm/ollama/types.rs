//! Ollama HTTP API types.
//!
//! These are Ollama-specific request/response structures used for HTTP
//! communication with `/api/chat` and `/api/tags`. They are NOT the generic
//! types from parley-types -- those are backend-agnostic.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct OllamaChatRequest {
    pub model: String,
    pub messages: Vec<OllamaMessage>,
    pub stream: bool,
    /// Serialized as `null` when absent; the backend accepts both.
    pub system: Option<String>,
}

/// A single message in an Ollama conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaMessage {
    pub role: String,
    pub content: String,
}

/// One line of the `/api/chat` response body.
///
/// Ollama emits one such object per line; the last line of interest has
/// `done: true`. Timing and token count fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaChatChunk {
    pub message: OllamaMessage,
    #[serde(default)]
    pub done: bool,
}

/// Response body for `GET /api/tags`.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaTagsResponse {
    #[serde(default)]
    pub models: Vec<OllamaModel>,
}

/// A locally available model as reported by `/api/tags`.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaModel {
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
}
