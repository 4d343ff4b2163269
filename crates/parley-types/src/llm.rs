//! Inference backend request/response types for Parley.
//!
//! These types model the data shapes exchanged with an inference gateway:
//! the outgoing message list, the decoded reply, and gateway errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a message sent to the inference backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(MessageRole::System),
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message in the context sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Text assembled from a backend response body.
///
/// `completed` is false when the body ended before a `done: true` marker
/// was seen. The text is still usable in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedReply {
    pub text: String,
    pub completed: bool,
}

/// Errors from inference gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Backend was reachable but answered with a non-success status.
    #[error("backend returned HTTP {status}: {body}")]
    Backend { status: u16, body: String },

    /// Backend could not be reached, or the connection attempt timed out.
    #[error("backend unreachable: {0}")]
    Connectivity(String),

    /// An established connection stopped producing data in time.
    #[error("backend timed out: {0}")]
    Timeout(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::System, MessageRole::User, MessageRole::Assistant] {
            let s = role.to_string();
            let parsed: MessageRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_message_role_rejects_unknown() {
        let err = "tool".parse::<MessageRole>().unwrap_err();
        assert!(err.contains("tool"));
    }

    #[test]
    fn test_message_serializes_lowercase_role() {
        let json = serde_json::to_value(Message::assistant("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "assistant", "content": "hi"}));
    }

    #[test]
    fn test_backend_error_display_folds_status_and_body() {
        let err = LlmError::Backend {
            status: 500,
            body: "model not loaded".to_string(),
        };
        assert_eq!(err.to_string(), "backend returned HTTP 500: model not loaded");
    }
}
