use std::time::Duration;

use thiserror::Error;

use crate::llm::LlmError;

/// Errors from a conversation exchange.
///
/// None of these leave a trace in the conversation log: a failed exchange
/// records neither the user message nor a reply.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("exchange exceeded its {}s deadline", .0.as_secs())]
    Timeout(Duration),
}

impl ChatError {
    /// Whether the failure is a timeout, either the exchange deadline or a
    /// backend read timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ChatError::Timeout(_) | ChatError::Llm(LlmError::Timeout(_)))
    }
}

/// Errors from validating a loaded configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("context window must be at least 1 turn")]
    EmptyContextWindow,

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,

    #[error("sliding window retention must keep whole exchanges (an even number of turns, at least 2)")]
    UnpairedRetentionWindow,

    #[error("invalid backend url '{0}'")]
    InvalidBaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_error_display() {
        let err = ChatError::Timeout(Duration::from_secs(300));
        assert_eq!(err.to_string(), "exchange exceeded its 300s deadline");
    }

    #[test]
    fn test_llm_error_passes_through_display() {
        let err: ChatError = LlmError::Connectivity("connection refused".to_string()).into();
        assert_eq!(err.to_string(), "backend unreachable: connection refused");
    }

    #[test]
    fn test_is_timeout_covers_both_kinds() {
        assert!(ChatError::Timeout(Duration::from_secs(1)).is_timeout());
        assert!(ChatError::Llm(LlmError::Timeout("read".into())).is_timeout());
        assert!(!ChatError::Validation("x".into()).is_timeout());
    }
}
