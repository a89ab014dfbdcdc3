//! Daily rotating content routes

use axum::Json;
use chrono::Local;
use nutriai_shared::catalog;
use nutriai_shared::types::{DailyFoodResponse, DailyMotivationResponse};

/// GET /api/daily-food - Food of the day
pub async fn daily_food() -> Json<DailyFoodResponse> {
    Json(DailyFoodResponse {
        success: true,
        food: catalog::daily_food(Local::now().date_naive()),
    })
}

/// GET /api/daily-motivation - Quote of the day
pub async fn daily_motivation() -> Json<DailyMotivationResponse> {
    Json(DailyMotivationResponse {
        success: true,
        quote: catalog::daily_motivation(Local::now().date_naive()).to_string(),
    })
}
