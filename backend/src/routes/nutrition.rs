//! Nutrition calculation route

use crate::error::{ApiJson, ApiResult};
use crate::services::NutritionService;
use axum::Json;
use nutriai_shared::types::{CalculateBmrRequest, CalculateBmrResponse};

/// POST /api/calculate-bmr - BMR, TDEE, calorie target and macros
pub async fn calculate_bmr(
    ApiJson(req): ApiJson<CalculateBmrRequest>,
) -> ApiResult<Json<CalculateBmrResponse>> {
    let result = NutritionService::calculate(&req)?;

    Ok(Json(CalculateBmrResponse {
        success: true,
        result,
    }))
}
