//! Chat exchange endpoint.
//!
//! POST /api/chat
//!
//! Runs one user/assistant exchange through the shared [`ChatService`]
//! and returns the complete reply. The whole exchange is bounded by the
//! service deadline; on any failure the conversation log is left as it was.
//!
//! [`ChatService`]: parley_core::chat::service::ChatService

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user message to send.
    pub message: String,
    /// Model to use; falls back to the configured default when absent or blank.
    #[serde(default)]
    pub model: Option<String>,
}

/// Response body for a completed exchange.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub model: String,
}

/// POST /api/chat - Send a message and wait for the full reply.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(body) = body?;

    let model = body
        .model
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| state.default_model().to_string());

    let response = state
        .chat_service
        .send_message(&body.message, &model)
        .await?;

    Ok(Json(ChatResponse { response, model }))
}
