//! Locally cached progress series

use crate::storage::{KeyValueStore, LocalCache};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default window for [`ProgressTracker::weight_progress`]
pub const DEFAULT_WEIGHT_DAYS: i64 = 30;

/// Default window for [`ProgressTracker::calorie_progress`]
pub const DEFAULT_CALORIE_DAYS: i64 = 7;

/// Storage key of a user's progress data
pub fn progress_key(user_id: &str) -> String {
    format!("progress_{}", user_id)
}

/// A dated measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub value: f64,
    pub date: DateTime<Utc>,
}

/// A dated workout; the workout's own fields are kept as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

trait Dated {
    fn date(&self) -> DateTime<Utc>;
}

impl Dated for DataPoint {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl Dated for WorkoutRecord {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressData {
    #[serde(default)]
    pub weight: Vec<DataPoint>,
    #[serde(default)]
    pub calories: Vec<DataPoint>,
    #[serde(default)]
    pub workouts: Vec<WorkoutRecord>,
    #[serde(default)]
    pub measurements: Vec<Value>,
}

/// Per-user progress kept in local storage
pub struct ProgressTracker<S> {
    cache: LocalCache<S>,
    user_id: String,
    data: ProgressData,
}

impl<S: KeyValueStore> ProgressTracker<S> {
    pub fn new(store: S, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let cache = LocalCache::new(store);
        let data = cache.load(&progress_key(&user_id)).unwrap_or_default();
        Self {
            cache,
            user_id,
            data,
        }
    }

    pub fn data(&self) -> &ProgressData {
        &self.data
    }

    pub fn save(&self) {
        self.cache.save(&progress_key(&self.user_id), &self.data);
    }

    /// Record a weight, dated now unless `date` is given
    pub fn add_weight(&mut self, weight: f64, date: Option<DateTime<Utc>>) {
        self.data.weight.push(DataPoint {
            value: weight,
            date: date.unwrap_or_else(Utc::now),
        });
        self.save();
    }

    pub fn add_calories(&mut self, calories: f64, date: Option<DateTime<Utc>>) {
        self.data.calories.push(DataPoint {
            value: calories,
            date: date.unwrap_or_else(Utc::now),
        });
        self.save();
    }

    /// A `date` field inside `workout` is replaced by the recorded date
    pub fn add_workout(&mut self, mut workout: Map<String, Value>, date: Option<DateTime<Utc>>) {
        workout.remove("date");
        self.data.workouts.push(WorkoutRecord {
            date: date.unwrap_or_else(Utc::now),
            details: workout,
        });
        self.save();
    }

    /// Weights from the last `days` days, oldest first
    pub fn weight_progress(&self, days: i64) -> Vec<DataPoint> {
        recent(&self.data.weight, days)
    }

    /// Calorie entries from the last `days` days, oldest first
    pub fn calorie_progress(&self, days: i64) -> Vec<DataPoint> {
        recent(&self.data.calories, days)
    }

    pub fn workout_progress(&self, days: i64) -> Vec<WorkoutRecord> {
        recent(&self.data.workouts, days)
    }
}

fn recent<T: Dated + Clone>(series: &[T], days: i64) -> Vec<T> {
    let cutoff = Utc::now() - Duration::days(days);
    let mut items: Vec<T> = series
        .iter()
        .filter(|item| item.date() >= cutoff)
        .cloned()
        .collect();
    items.sort_by_key(|item| item.date());
    items
}
