//! Food and workout logging routes

use crate::error::{ApiJson, ApiResult};
use crate::services::LogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use nutriai_shared::types::{
    FoodLogsResponse, LogEntryResponse, LogFoodRequest, LogWorkoutRequest, WorkoutLogsResponse,
};
use nutriai_shared::{user_id_or_default, FoodLogEntry, WorkoutEntry};

/// POST /api/log-food - Append a food entry
pub async fn log_food(
    State(state): State<AppState>,
    ApiJson(mut req): ApiJson<LogFoodRequest>,
) -> ApiResult<Json<LogEntryResponse<FoodLogEntry>>> {
    let user_id = user_id_or_default(req.user_id.take());
    let entry = LogService::log_food(state.store(), &state.ids, &user_id, req).await?;

    Ok(Json(LogEntryResponse {
        success: true,
        entry,
    }))
}

/// POST /api/log-workout - Append a workout entry
pub async fn log_workout(
    State(state): State<AppState>,
    ApiJson(mut req): ApiJson<LogWorkoutRequest>,
) -> ApiResult<Json<LogEntryResponse<WorkoutEntry>>> {
    let user_id = user_id_or_default(req.user_id.take());
    let entry = LogService::log_workout(state.store(), &state.ids, &user_id, req).await?;

    Ok(Json(LogEntryResponse {
        success: true,
        entry,
    }))
}

/// GET /api/food-logs/:user_id - Today's food entries with totals
pub async fn food_logs(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<FoodLogsResponse>> {
    let today = LogService::food_logs_today(state.store(), &user_id).await?;

    Ok(Json(FoodLogsResponse {
        success: true,
        logs: today.logs,
        totals: today.totals,
    }))
}

/// GET /api/workout-logs/:user_id - Today's workouts with totals
pub async fn workout_logs(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<WorkoutLogsResponse>> {
    let today = LogService::workouts_today(state.store(), &user_id).await?;

    Ok(Json(WorkoutLogsResponse {
        success: true,
        logs: today.logs,
        totals: today.totals,
    }))
}
