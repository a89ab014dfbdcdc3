//! Log service - food and workout logging with daily totals

use crate::error::ApiError;
use crate::repositories::{local_day, LogIdGenerator, LogStore};
use chrono::Utc;
use nutriai_shared::types::{LogFoodRequest, LogWorkoutRequest};
use nutriai_shared::validation::optional_number;
use nutriai_shared::{FoodLogEntry, NutritionTotals, WorkoutEntry, WorkoutTotals};
use tracing::info;

/// Today's food entries and their summed macros
#[derive(Debug, Clone)]
pub struct DailyFoodLog {
    pub logs: Vec<FoodLogEntry>,
    pub totals: NutritionTotals,
}

/// Today's workouts and their summed duration/burn
#[derive(Debug, Clone)]
pub struct DailyWorkoutLog {
    pub logs: Vec<WorkoutEntry>,
    pub totals: WorkoutTotals,
}

/// Log service
pub struct LogService;

impl LogService {
    /// Stamp a food entry with an id and timestamp and append it
    ///
    /// Quantities may arrive as numbers or numeric strings.
    pub async fn log_food(
        store: &dyn LogStore,
        ids: &LogIdGenerator,
        user_id: &str,
        req: LogFoodRequest,
    ) -> Result<FoodLogEntry, ApiError> {
        let entry = FoodLogEntry {
            id: ids.next_id(),
            food: req.food,
            calories: optional_number("calories", &req.calories)?,
            protein: optional_number("protein", &req.protein)?,
            carbs: optional_number("carbs", &req.carbs)?,
            fat: optional_number("fat", &req.fat)?,
            meal: req.meal,
            timestamp: Utc::now(),
        };
        store.append_food(user_id, entry.clone()).await?;

        info!(user_id = %user_id, entry_id = entry.id, "Logged food");
        Ok(entry)
    }

    /// Stamp a workout with an id and timestamp and append it
    pub async fn log_workout(
        store: &dyn LogStore,
        ids: &LogIdGenerator,
        user_id: &str,
        req: LogWorkoutRequest,
    ) -> Result<WorkoutEntry, ApiError> {
        let entry = WorkoutEntry {
            id: ids.next_id(),
            exercise: req.exercise,
            duration: optional_number("duration", &req.duration)?,
            calories_burned: optional_number("caloriesBurned", &req.calories_burned)?,
            intensity: req.intensity,
            timestamp: Utc::now(),
        };
        store.append_workout(user_id, entry.clone()).await?;

        info!(user_id = %user_id, entry_id = entry.id, "Logged workout");
        Ok(entry)
    }

    /// Food entries logged today (server-local calendar day)
    pub async fn food_logs_today(store: &dyn LogStore, user_id: &str) -> Result<DailyFoodLog, ApiError> {
        let logs = store.food_logs_on(user_id, local_day(Utc::now())).await?;
        let totals = NutritionTotals::from_entries(&logs);
        Ok(DailyFoodLog { logs, totals })
    }

    /// Workouts logged today (server-local calendar day)
    pub async fn workouts_today(
        store: &dyn LogStore,
        user_id: &str,
    ) -> Result<DailyWorkoutLog, ApiError> {
        let logs = store.workouts_on(user_id, local_day(Utc::now())).await?;
        let totals = WorkoutTotals::from_entries(&logs);
        Ok(DailyWorkoutLog { logs, totals })
    }
}
