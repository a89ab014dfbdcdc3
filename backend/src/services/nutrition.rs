//! Nutrition service - BMR, TDEE and macro targets

use crate::error::ApiError;
use nutriai_shared::types::CalculateBmrRequest;
use nutriai_shared::validation::profile_from_request;
use nutriai_shared::{compute_nutrition, NutritionResult};
use tracing::debug;

/// Nutrition service
pub struct NutritionService;

impl NutritionService {
    /// Validate a request and compute the nutrition targets
    pub fn calculate(req: &CalculateBmrRequest) -> Result<NutritionResult, ApiError> {
        let profile = profile_from_request(req)?;
        let result = compute_nutrition(&profile)?;

        debug!(
            goal = ?profile.goal,
            bmr = result.bmr,
            target_calories = result.target_calories,
            "Computed nutrition targets"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_reference_profile() {
        let req: CalculateBmrRequest = serde_json::from_value(serde_json::json!({
            "age": 30, "gender": "male", "height": 180, "weight": 80,
            "activity": "1.55", "goal": "lose"
        }))
        .unwrap();

        let result = NutritionService::calculate(&req).unwrap();
        assert_eq!(result.bmr, 1780);
        assert_eq!(result.target_calories, 2259);
    }

    #[test]
    fn test_missing_fields_is_validation_error() {
        let err = NutritionService::calculate(&CalculateBmrRequest::default()).unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref msg) if msg == "Missing required fields"));
    }
}
