use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::models::{ChatRequest, ChatResponse};
use crate::services::respond;
use crate::startup::AppState;

#[tracing::instrument(skip(state, request), fields(country = %request.country))]
pub async fn chatbot(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let response = respond(&request, &state.helplines)?;
    Ok(Json(response))
}
