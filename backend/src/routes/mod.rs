//! Route definitions for the NutriAI API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod analysis;
mod chat;
mod daily;
mod health;
mod logs;
mod nutrition;

/// Room for multipart framing on top of the largest accepted file
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let uploads = &state.config().uploads;
    let body_limit = uploads.max_file_bytes + MULTIPART_OVERHEAD_BYTES;
    let public_path = uploads.public_path.clone();
    let upload_dir = uploads.dir.clone();

    Router::new()
        .route("/health/live", get(health::liveness_check))
        .nest("/api", api_routes())
        .nest_service(&public_path, ServeDir::new(upload_dir))
        // Apply middleware layers
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/calculate-bmr", post(nutrition::calculate_bmr))
        .route("/analyze-food", post(analysis::analyze_food))
        .route("/chat", post(chat::chat))
        .route("/chat-history/:user_id", get(chat::chat_history))
        .route("/log-food", post(logs::log_food))
        .route("/log-workout", post(logs::log_workout))
        .route("/food-logs/:user_id", get(logs::food_logs))
        .route("/workout-logs/:user_id", get(logs::workout_logs))
        .route("/daily-food", get(daily::daily_food))
        .route("/daily-motivation", get(daily::daily_motivation))
}
