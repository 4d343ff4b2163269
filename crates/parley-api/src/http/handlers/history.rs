//! Conversation history endpoints.
//!
//! GET    /api/history - Every retained turn, oldest first.
//! DELETE /api/history - Forget the conversation.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use parley_types::chat::Turn;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub turns: Vec<Turn>,
    pub size: usize,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub cleared: usize,
}

/// GET /api/history
pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let turns = state.chat_service.history().await;
    let size = turns.len();
    Json(HistoryResponse { turns, size })
}

/// DELETE /api/history
pub async fn clear_history(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.chat_service.clear().await;
    Json(ClearResponse { cleared })
}
