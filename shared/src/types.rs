//! API request and response types
//!
//! Field names follow the JSON contract of the HTTP API (camelCase where
//! the wire format uses it). Every success body carries `success: true`.

use crate::catalog::{DailyFood, FoodRecord};
use crate::models::{
    ChatExchange, FoodLogEntry, NutritionTotals, WorkoutEntry, WorkoutTotals,
};
use crate::nutrition::NutritionResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A numeric form value sent either as a JSON number or as a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Nutrition Calculation
// ============================================================================

/// BMR calculation request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculateBmrRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<NumericInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Height in cm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<NumericInput>,
    /// Weight in kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<NumericInput>,
    /// Activity multiplier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<NumericInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

/// BMR calculation response, result fields at top level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateBmrResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: NutritionResult,
}

// ============================================================================
// Food Analysis
// ============================================================================

/// Image analysis response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeFoodResponse {
    pub success: bool,
    pub food: FoodRecord,
    pub image_url: String,
}

// ============================================================================
// Chat
// ============================================================================

/// Chat message request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Chat reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

/// Stored chat exchanges for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    pub success: bool,
    pub history: Vec<ChatExchange>,
}

// ============================================================================
// Food and Workout Logging
// ============================================================================

/// Food log request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFoodRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<NumericInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<NumericInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<NumericInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<NumericInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal: Option<String>,
}

/// Workout log request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogWorkoutRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<String>,
    /// Duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<NumericInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<NumericInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
}

/// Newly stored log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntryResponse<T> {
    pub success: bool,
    pub entry: T,
}

/// Today's food logs with totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodLogsResponse {
    pub success: bool,
    pub logs: Vec<FoodLogEntry>,
    pub totals: NutritionTotals,
}

/// Today's workouts with totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLogsResponse {
    pub success: bool,
    pub logs: Vec<WorkoutEntry>,
    pub totals: WorkoutTotals,
}

// ============================================================================
// Daily Content
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyFoodResponse {
    pub success: bool,
    pub food: DailyFood,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMotivationResponse {
    pub success: bool,
    pub quote: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::Macros;

    #[test]
    fn test_bmr_request_accepts_numbers_and_strings() {
        let req: CalculateBmrRequest = serde_json::from_str(
            r#"{"age": 30, "gender": "male", "height": "180", "weight": 80.5, "activity": "1.55", "goal": "lose"}"#,
        )
        .unwrap();
        assert_eq!(req.age, Some(NumericInput::Number(30.0)));
        assert_eq!(req.height, Some(NumericInput::Text("180".to_string())));
        assert_eq!(req.activity, Some(NumericInput::Text("1.55".to_string())));
    }

    #[test]
    fn test_bmr_response_flattens_result() {
        let response = CalculateBmrResponse {
            success: true,
            result: NutritionResult {
                bmr: 1780,
                tdee: 2759,
                target_calories: 2759,
                macros: Macros {
                    protein_g: 207,
                    carbs_g: 276,
                    fat_g: 92,
                },
                recommendation_text: "text".to_string(),
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["bmr"], 1780);
        assert_eq!(json["targetCalories"], 2759);
        assert_eq!(json["macros"]["fat"], 92);
        assert_eq!(json["recommendations"], "text");
    }

    #[test]
    fn test_log_workout_request_camel_case() {
        let req: LogWorkoutRequest = serde_json::from_str(
            r#"{"userId": "u1", "exercise": "Cycling", "duration": 45, "caloriesBurned": 400, "intensity": "high"}"#,
        )
        .unwrap();
        assert_eq!(req.user_id.as_deref(), Some("u1"));
        assert_eq!(req.calories_burned, Some(NumericInput::Number(400.0)));
    }

    #[test]
    fn test_log_food_request_accepts_form_strings() {
        let req: LogFoodRequest =
            serde_json::from_str(r#"{"food": "Quinoa", "calories": "216", "protein": 8}"#).unwrap();
        assert_eq!(req.calories, Some(NumericInput::from("216")));
        assert_eq!(req.protein, Some(NumericInput::Number(8.0)));
    }
}
