//! Integration tests for daily rotating content

mod common;

use axum::http::StatusCode;
use chrono::Local;
use common::json;
use nutriai_shared::catalog;

#[tokio::test]
async fn test_daily_food_matches_today() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api/daily-food").await;

    assert_eq!(status, StatusCode::OK);
    let body = json(&body);
    assert_eq!(body["success"], true);
    let expected = catalog::daily_food(Local::now().date_naive());
    assert_eq!(body["food"]["name"], expected.name);
    assert!(body["food"]["calories"].is_u64());
}

#[tokio::test]
async fn test_daily_motivation_is_stable_within_a_day() {
    let app = common::TestApp::new();

    let (status, first) = app.get("/api/daily-motivation").await;
    let (_, second) = app.get("/api/daily-motivation").await;

    assert_eq!(status, StatusCode::OK);
    let quote = json(&first)["quote"].as_str().unwrap().to_string();
    assert!(catalog::MOTIVATION_QUOTES.contains(&quote.as_str()));
    assert_eq!(json(&second)["quote"], quote);
}
