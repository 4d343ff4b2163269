//! Application error type mapping to HTTP status codes.
//!
//! Every failure is rendered as `{"error": "<message>"}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use parley_types::error::ChatError;
use parley_types::llm::LlmError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or incomplete request.
    Validation(String),
    /// Conversation or backend failure.
    Chat(ChatError),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::Validation(msg) => AppError::Validation(msg),
            other => AppError::Chat(other),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::Validation(e.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Chat(ChatError::Validation(_)) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Chat(ChatError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Chat(ChatError::Llm(llm)) => match llm {
                LlmError::Backend { .. } | LlmError::Deserialization(_) => StatusCode::BAD_GATEWAY,
                LlmError::Connectivity(_) => StatusCode::SERVICE_UNAVAILABLE,
                LlmError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            },
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Chat(e) => e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %self.message(), "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self.message(), "Request rejected");
        }

        let body = json!({ "error": self.message() });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
