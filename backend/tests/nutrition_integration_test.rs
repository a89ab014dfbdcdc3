//! Integration tests for the nutrition calculator endpoint

mod common;

use axum::http::StatusCode;
use common::json;
use rstest::rstest;

#[tokio::test]
async fn test_calculate_bmr_reference_profile() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post(
            "/api/calculate-bmr",
            r#"{"age":30,"gender":"male","height":180,"weight":80,"activity":1.55,"goal":"maintain"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let body = json(&body);
    assert_eq!(body["success"], true);
    assert_eq!(body["bmr"], 1780);
    assert_eq!(body["tdee"], 2759);
    assert_eq!(body["targetCalories"], 2759);
    assert_eq!(body["macros"]["protein"], 207);
    assert_eq!(body["macros"]["carbs"], 276);
    assert_eq!(body["macros"]["fat"], 92);
    assert!(body["recommendations"]
        .as_str()
        .unwrap()
        .contains("approximately 2759 calories per day"));
}

#[tokio::test]
async fn test_calculate_bmr_accepts_form_strings() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post(
            "/api/calculate-bmr",
            r#"{"age":"30","gender":"female","height":"165","weight":"60","activity":"1.2","goal":"lose"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let body = json(&body);
    // 600 + 1031.25 - 150 - 161 = 1320.25
    assert_eq!(body["bmr"], 1320);
    assert_eq!(body["tdee"], 1584);
    assert_eq!(body["targetCalories"], 1084);
}

#[rstest]
#[case::lose("lose", 2259)]
#[case::maintain("maintain", 2759)]
#[case::gain("gain", 3259)]
#[case::unknown_goal("bulk", 2759)]
#[tokio::test]
async fn test_calculate_bmr_goal_adjustment(#[case] goal: &str, #[case] expected: i64) {
    let app = common::TestApp::new();
    let body = format!(
        r#"{{"age":30,"gender":"male","height":180,"weight":80,"activity":1.55,"goal":"{}"}}"#,
        goal
    );

    let (status, body) = app.post("/api/calculate-bmr", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["targetCalories"], expected);
}

#[rstest]
#[case::missing_age(r#"{"gender":"male","height":180,"weight":80,"activity":1.55,"goal":"gain"}"#)]
#[case::zero_weight(r#"{"age":30,"gender":"male","height":180,"weight":0,"activity":1.55,"goal":"gain"}"#)]
#[case::empty_gender(r#"{"age":30,"gender":"","height":180,"weight":80,"activity":1.55,"goal":"gain"}"#)]
#[case::empty_body("{}")]
#[tokio::test]
async fn test_calculate_bmr_missing_fields(#[case] payload: &str) {
    let app = common::TestApp::new();

    let (status, body) = app.post("/api/calculate-bmr", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["error"], "Missing required fields");
}

#[tokio::test]
async fn test_calculate_bmr_rejects_non_numeric_height() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post(
            "/api/calculate-bmr",
            r#"{"age":30,"gender":"male","height":"tall","weight":80,"activity":1.55,"goal":"gain"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json(&body)["error"].as_str().unwrap().contains("height"));
}

#[tokio::test]
async fn test_calculate_bmr_malformed_json() {
    let app = common::TestApp::new();

    let (status, body) = app.post("/api/calculate-bmr", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json(&body)["error"].is_string());
}
