//! Coaching chat routes

use crate::error::{ApiJson, ApiResult};
use crate::services::CoachService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use nutriai_shared::types::{ChatHistoryResponse, ChatRequest, ChatResponse};
use nutriai_shared::user_id_or_default;

/// POST /api/chat - Reply to a message and record the exchange
pub async fn chat(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let user_id = user_id_or_default(req.user_id);
    let exchange = CoachService::reply(state.store(), &user_id, req.message).await?;

    Ok(Json(ChatResponse {
        success: true,
        response: exchange.ai_response,
        timestamp: exchange.timestamp,
    }))
}

/// GET /api/chat-history/:user_id - All recorded exchanges for a user
pub async fn chat_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ChatHistoryResponse>> {
    let history = CoachService::history(state.store(), &user_id).await?;

    Ok(Json(ChatHistoryResponse {
        success: true,
        history,
    }))
}
