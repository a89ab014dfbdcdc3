//! Nutrition formula engine
//!
//! Maps a user profile to BMR, TDEE, a goal-adjusted calorie target and a
//! fixed macro split. Everything here is a pure function of its inputs.
//!
//! # Formulas
//!
//! - BMR: Mifflin-St Jeor
//! - TDEE: BMR × activity factor
//! - Target: TDEE ± 500 kcal depending on goal
//! - Macros: 30% protein / 40% carbs / 30% fat of the target, converted to
//!   grams at 4 / 4 / 9 kcal per gram
//!
//! Each macro is rounded on its own, so `protein*4 + carbs*4 + fat*9` can
//! drift a few kcal away from `target_calories`. That drift is kept as is.

use crate::errors::NutritionError;
use serde::{Deserialize, Serialize};

/// Calorie adjustment applied for the lose/gain goals
pub const GOAL_ADJUSTMENT_KCAL: f64 = 500.0;

/// Share of target calories assigned to protein
pub const PROTEIN_SHARE: f64 = 0.30;
/// Share of target calories assigned to carbohydrates
pub const CARBS_SHARE: f64 = 0.40;
/// Share of target calories assigned to fat
pub const FAT_SHARE: f64 = 0.30;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ============================================================================
// Profile Types
// ============================================================================

/// Gender used to pick the Mifflin-St Jeor constant
///
/// Only `male` selects the male constant; every other value uses the
/// non-male one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Other,
}

impl Gender {
    pub fn parse(value: &str) -> Self {
        if value == "male" {
            Gender::Male
        } else {
            Gender::Other
        }
    }
}

/// Weight goal driving the calorie target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    /// Parse a goal string; anything unrecognized means maintain
    pub fn parse(value: &str) -> Self {
        match value {
            "lose" => Goal::Lose,
            "gain" => Goal::Gain,
            _ => Goal::Maintain,
        }
    }

    /// Calorie offset from TDEE for this goal
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            Goal::Lose => -GOAL_ADJUSTMENT_KCAL,
            Goal::Maintain => 0.0,
            Goal::Gain => GOAL_ADJUSTMENT_KCAL,
        }
    }

    fn advice(&self) -> &'static str {
        match self {
            Goal::Lose => "For healthy weight loss, aim to lose 0.5-1 kg per week by maintaining this calorie deficit and combining it with regular exercise. Focus on protein-rich foods to preserve muscle mass. Incorporate both cardio and strength training for best results.",
            Goal::Gain => "To gain weight healthily, ensure you're getting enough protein (aim for 1.6-2.2g per kg of body weight) and combine this calorie surplus with strength training for optimal muscle growth. Be patient - healthy muscle gain takes time!",
            Goal::Maintain => "To maintain your weight, focus on eating balanced meals with plenty of vegetables, lean proteins, and whole grains. Stay consistent with your daily calorie target and maintain regular physical activity.",
        }
    }
}

/// Profile data needed for the calculation
///
/// Built per request and never stored server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub age_years: i32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// TDEE multiplier, e.g. 1.2 (sedentary) to 1.9 (very active)
    pub activity_factor: f64,
    pub goal: Goal,
}

// ============================================================================
// Results
// ============================================================================

/// Daily macro targets in whole grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    #[serde(rename = "protein")]
    pub protein_g: i64,
    #[serde(rename = "carbs")]
    pub carbs_g: i64,
    #[serde(rename = "fat")]
    pub fat_g: i64,
}

impl Macros {
    /// Energy represented by these macros
    pub fn total_kcal(&self) -> i64 {
        self.protein_g * KCAL_PER_G_PROTEIN as i64
            + self.carbs_g * KCAL_PER_G_CARBS as i64
            + self.fat_g * KCAL_PER_G_FAT as i64
    }
}

/// Calculation result, every number rounded to the nearest integer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionResult {
    pub bmr: i64,
    pub tdee: i64,
    pub target_calories: i64,
    pub macros: Macros,
    #[serde(rename = "recommendations")]
    pub recommendation_text: String,
}

// ============================================================================
// Calculations
// ============================================================================

/// Round to the nearest integer, halves toward positive infinity
///
/// `f64::round` sends -2.5 to -3; the nutrition figures round -2.5 to -2.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Others: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: i32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Other => base - 161.0,
    }
}

/// Macro grams for a calorie target, each rounded independently
pub fn calculate_macros(target_calories: f64) -> Macros {
    Macros {
        protein_g: round_half_up(target_calories * PROTEIN_SHARE / KCAL_PER_G_PROTEIN),
        carbs_g: round_half_up(target_calories * CARBS_SHARE / KCAL_PER_G_CARBS),
        fat_g: round_half_up(target_calories * FAT_SHARE / KCAL_PER_G_FAT),
    }
}

/// Recommendation text for a goal with the rounded target interpolated
pub fn recommendation_text(goal: Goal, target_calories: i64) -> String {
    format!(
        "Based on your profile, you should consume approximately {} calories per day. {}",
        target_calories,
        goal.advice()
    )
}

/// Compute BMR, TDEE, calorie target and macros for a profile
///
/// Implausible inputs (very low age or weight) are passed through and may
/// yield negative numbers; only non-finite values are rejected.
pub fn compute_nutrition(profile: &Profile) -> Result<NutritionResult, NutritionError> {
    for (field, value) in [
        ("height", profile.height_cm),
        ("weight", profile.weight_kg),
        ("activity", profile.activity_factor),
    ] {
        if !value.is_finite() {
            return Err(NutritionError::invalid(field, "must be a valid number"));
        }
    }

    let bmr = calculate_bmr_mifflin(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
    );
    let tdee = bmr * profile.activity_factor;
    let target = tdee + profile.goal.calorie_adjustment();
    let target_calories = round_half_up(target);

    Ok(NutritionResult {
        bmr: round_half_up(bmr),
        tdee: round_half_up(tdee),
        target_calories,
        macros: calculate_macros(target),
        recommendation_text: recommendation_text(profile.goal, target_calories),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn reference_profile(goal: Goal) -> Profile {
        Profile {
            age_years: 30,
            gender: Gender::Male,
            height_cm: 180.0,
            weight_kg: 80.0,
            activity_factor: 1.55,
            goal,
        }
    }

    #[test]
    fn test_reference_profile_maintain() {
        let result = compute_nutrition(&reference_profile(Goal::Maintain)).unwrap();

        assert_eq!(result.bmr, 1780);
        assert_eq!(result.tdee, 2759);
        assert_eq!(result.target_calories, 2759);
        assert_eq!(result.macros.protein_g, 207);
        assert_eq!(result.macros.carbs_g, 276);
        assert_eq!(result.macros.fat_g, 92);
    }

    #[rstest]
    #[case(Goal::Lose, 2259)]
    #[case(Goal::Maintain, 2759)]
    #[case(Goal::Gain, 3259)]
    fn test_target_follows_goal(#[case] goal: Goal, #[case] expected: i64) {
        let result = compute_nutrition(&reference_profile(goal)).unwrap();
        assert_eq!(result.target_calories, expected);
    }

    #[test]
    fn test_non_male_constant() {
        // 30yo, 60kg, 165cm -> 600 + 1031.25 - 150 - 161
        let bmr = calculate_bmr_mifflin(60.0, 165.0, 30, Gender::Other);
        assert!((bmr - 1320.25).abs() < 1e-9);
    }

    #[test]
    fn test_recommendation_text_per_goal() {
        let lose = compute_nutrition(&reference_profile(Goal::Lose)).unwrap();
        assert!(lose
            .recommendation_text
            .starts_with("Based on your profile, you should consume approximately 2259 calories per day. "));
        assert!(lose.recommendation_text.contains("healthy weight loss"));

        let gain = compute_nutrition(&reference_profile(Goal::Gain)).unwrap();
        assert!(gain.recommendation_text.contains("gain weight healthily"));

        let maintain = compute_nutrition(&reference_profile(Goal::Maintain)).unwrap();
        assert!(maintain.recommendation_text.contains("maintain your weight"));
    }

    #[test]
    fn test_implausible_inputs_pass_through() {
        let profile = Profile {
            age_years: 120,
            gender: Gender::Other,
            height_cm: 1.0,
            weight_kg: 1.0,
            activity_factor: 1.2,
            goal: Goal::Lose,
        };
        let result = compute_nutrition(&profile).unwrap();
        assert!(result.bmr < 0);
        assert!(result.target_calories < 0);
    }

    #[test]
    fn test_non_finite_activity_rejected() {
        let mut profile = reference_profile(Goal::Maintain);
        profile.activity_factor = f64::NAN;
        assert!(matches!(
            compute_nutrition(&profile),
            Err(NutritionError::InvalidField { field: "activity", .. })
        ));
    }

    #[rstest]
    #[case(2.5, 3)]
    #[case(-2.5, -2)]
    #[case(2.4999, 2)]
    #[case(-0.4, 0)]
    fn test_round_half_up(#[case] value: f64, #[case] expected: i64) {
        assert_eq!(round_half_up(value), expected);
    }

    #[test]
    fn test_goal_and_gender_parsing() {
        assert_eq!(Goal::parse("lose"), Goal::Lose);
        assert_eq!(Goal::parse("gain"), Goal::Gain);
        assert_eq!(Goal::parse("maintain"), Goal::Maintain);
        assert_eq!(Goal::parse("bulk"), Goal::Maintain);
        assert_eq!(Gender::parse("male"), Gender::Male);
        assert_eq!(Gender::parse("female"), Gender::Other);
        assert_eq!(Gender::parse("Male"), Gender::Other);
    }

    #[test]
    fn test_result_serializes_with_api_field_names() {
        let result = compute_nutrition(&reference_profile(Goal::Maintain)).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["targetCalories"], 2759);
        assert_eq!(json["macros"]["protein"], 207);
        assert!(json["recommendations"].is_string());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: target = round(bmr * activity) ± 500 according to goal
        #[test]
        fn prop_target_offsets_tdee(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18i32..80,
            activity in 1.2f64..1.9
        ) {
            let mut profile = reference_profile(Goal::Maintain);
            profile.weight_kg = weight;
            profile.height_cm = height;
            profile.age_years = age;
            profile.activity_factor = activity;

            let maintain = compute_nutrition(&profile).unwrap();
            profile.goal = Goal::Lose;
            let lose = compute_nutrition(&profile).unwrap();
            profile.goal = Goal::Gain;
            let gain = compute_nutrition(&profile).unwrap();

            prop_assert_eq!(maintain.target_calories, maintain.tdee);
            prop_assert_eq!(lose.target_calories, maintain.tdee - 500);
            prop_assert_eq!(gain.target_calories, maintain.tdee + 500);
        }

        /// Property: macro energy stays within rounding tolerance of the target
        #[test]
        fn prop_macro_energy_close_to_target(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18i32..80,
            activity in 1.2f64..1.9,
            goal in prop_oneof![Just(Goal::Lose), Just(Goal::Maintain), Just(Goal::Gain)]
        ) {
            let profile = Profile {
                age_years: age,
                gender: Gender::Other,
                height_cm: height,
                weight_kg: weight,
                activity_factor: activity,
                goal,
            };
            let result = compute_nutrition(&profile).unwrap();
            let drift = (result.macros.total_kcal() - result.target_calories).abs();
            prop_assert!(drift <= 9, "macro kcal drift {} too large", drift);
        }

        /// Property: male BMR is exactly 166 kcal above the non-male BMR
        #[test]
        fn prop_male_bmr_offset(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18i32..80
        ) {
            let male = calculate_bmr_mifflin(weight, height, age, Gender::Male);
            let other = calculate_bmr_mifflin(weight, height, age, Gender::Other);
            prop_assert!((male - other - 166.0).abs() < 1e-9);
        }
    }
}
