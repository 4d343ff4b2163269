//! Model discovery endpoint.
//!
//! GET /api/models - Names of the models the backend has available.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::http::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}

/// GET /api/models
pub async fn list_models(State(state): State<AppState>) -> Result<Json<ModelsResponse>, AppError> {
    let models = state.chat_service.list_models().await?;
    Ok(Json(ModelsResponse { models }))
}
