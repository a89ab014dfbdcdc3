//! Input validation functions
//!
//! Turns loosely-typed request bodies into domain values. A field that is
//! absent, an empty string or the number zero counts as missing.

use crate::errors::NutritionError;
use crate::nutrition::{Gender, Goal, Profile};
use crate::types::{CalculateBmrRequest, NumericInput};

/// Whether a numeric input carries a value at all
fn numeric_present(value: &Option<NumericInput>) -> bool {
    match value {
        None => false,
        Some(NumericInput::Number(n)) => *n != 0.0,
        Some(NumericInput::Text(s)) => !s.trim().is_empty(),
    }
}

fn text_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

/// Parse a numeric input into a finite number
pub fn parse_number(field: &'static str, value: &NumericInput) -> Result<f64, NutritionError> {
    let number = match value {
        NumericInput::Number(n) => *n,
        NumericInput::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| NutritionError::invalid(field, "must be a number"))?,
    };
    if !number.is_finite() {
        return Err(NutritionError::invalid(field, "must be a valid number"));
    }
    Ok(number)
}

/// Parse an optional log quantity; absent or blank text is `None`
///
/// Unlike profile fields, zero is a real value here.
pub fn optional_number(
    field: &'static str,
    value: &Option<NumericInput>,
) -> Result<Option<f64>, NutritionError> {
    match value {
        None => Ok(None),
        Some(NumericInput::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(input) => parse_number(field, input).map(Some),
    }
}

/// Validate age: a whole number of years
pub fn validate_age(value: f64) -> Result<i32, String> {
    if value.fract() != 0.0 {
        return Err("Age must be a whole number".to_string());
    }
    if value < i32::MIN as f64 || value > i32::MAX as f64 {
        return Err("Age is out of range".to_string());
    }
    Ok(value as i32)
}

/// Build a [`Profile`] from a BMR request
///
/// Reports every missing field at once; malformed values are reported one
/// at a time in field order.
pub fn profile_from_request(req: &CalculateBmrRequest) -> Result<Profile, NutritionError> {
    let mut missing = Vec::new();
    if !numeric_present(&req.age) {
        missing.push("age");
    }
    if !text_present(&req.gender) {
        missing.push("gender");
    }
    if !numeric_present(&req.height) {
        missing.push("height");
    }
    if !numeric_present(&req.weight) {
        missing.push("weight");
    }
    if !numeric_present(&req.activity) {
        missing.push("activity");
    }
    if !text_present(&req.goal) {
        missing.push("goal");
    }
    if !missing.is_empty() {
        return Err(NutritionError::MissingFields(missing));
    }

    // Presence was checked above
    let (Some(age), Some(gender), Some(height), Some(weight), Some(activity), Some(goal)) = (
        &req.age,
        &req.gender,
        &req.height,
        &req.weight,
        &req.activity,
        &req.goal,
    ) else {
        return Err(NutritionError::Validation("Missing required fields".to_string()));
    };

    let age_years = validate_age(parse_number("age", age)?)
        .map_err(|reason| NutritionError::invalid("age", reason))?;

    Ok(Profile {
        age_years,
        gender: Gender::parse(gender),
        height_cm: parse_number("height", height)?,
        weight_kg: parse_number("weight", weight)?,
        activity_factor: parse_number("activity", activity)?,
        goal: Goal::parse(goal),
    })
}
