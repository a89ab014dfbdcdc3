//! NutriAI browser module
//!
//! A typed client for the NutriAI HTTP API, an offline cache for the
//! user's profile and progress, and WebAssembly bindings that run the
//! nutrition calculator and coach locally.

pub mod api;
pub mod profile;
pub mod progress;
pub mod storage;

pub use api::{ClientError, NutriApiClient};
pub use profile::{UserProfile, UserProfileCache};
pub use progress::ProgressTracker;
pub use storage::{KeyValueStore, LocalCache, MemoryStore, StorageError};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;

use nutriai_shared::types::CalculateBmrRequest;
use nutriai_shared::{coach, compute_nutrition, validation, NutritionError};
use thiserror::Error;
use wasm_bindgen::prelude::*;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Nutrition(#[from] NutritionError),
}

/// Nutrition targets for a profile given as the calculator form JSON
///
/// Returns the result as JSON, or the same error message the API sends.
#[wasm_bindgen]
pub fn calculate_nutrition(profile_json: &str) -> Result<String, JsError> {
    nutrition_json(profile_json).map_err(JsError::from)
}

fn nutrition_json(profile_json: &str) -> Result<String, PreviewError> {
    let request: CalculateBmrRequest = serde_json::from_str(profile_json)?;
    let profile = validation::profile_from_request(&request)?;
    let result = compute_nutrition(&profile)?;
    Ok(serde_json::to_string(&result)?)
}

/// Coach reply to a chat message
#[wasm_bindgen]
pub fn coach_reply(message: &str) -> String {
    coach::respond(message).to_string()
}
