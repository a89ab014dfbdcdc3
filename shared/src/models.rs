//! Log entry models for the NutriAI application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Process-unique, time-derived log entry id
pub type LogId = i64;

/// User id used when a request does not name one
pub const DEFAULT_USER_ID: &str = "anonymous";

/// Resolve an optional user id, falling back to [`DEFAULT_USER_ID`]
pub fn user_id_or_default(user_id: Option<String>) -> String {
    user_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| DEFAULT_USER_ID.to_string())
}

/// A logged food intake
///
/// Numeric fields are optional; a missing value counts as zero in totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
    pub id: LogId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// A logged workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    pub id: LogId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<String>,
    /// Duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// One question/answer pair with the coach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchange {
    pub user_message: String,
    pub ai_response: String,
    pub timestamp: DateTime<Utc>,
}

/// Summed macros over a set of food entries
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionTotals {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a FoodLogEntry>) -> Self {
        entries.into_iter().fold(Self::default(), |acc, entry| Self {
            calories: acc.calories + entry.calories.unwrap_or(0.0),
            protein: acc.protein + entry.protein.unwrap_or(0.0),
            carbs: acc.carbs + entry.carbs.unwrap_or(0.0),
            fat: acc.fat + entry.fat.unwrap_or(0.0),
        })
    }
}

/// Summed duration and burn over a set of workouts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutTotals {
    pub duration: f64,
    pub calories_burned: f64,
}

impl WorkoutTotals {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a WorkoutEntry>) -> Self {
        entries.into_iter().fold(Self::default(), |acc, entry| Self {
            duration: acc.duration + entry.duration.unwrap_or(0.0),
            calories_burned: acc.calories_burned + entry.calories_burned.unwrap_or(0.0),
        })
    }
}
