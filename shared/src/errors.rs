//! Error types for the NutriAI domain

use thiserror::Error;

/// Errors raised by the pure nutrition code
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NutritionError {
    /// One or more required profile fields were absent
    #[error("Missing required fields")]
    MissingFields(Vec<&'static str>),

    /// A field was present but could not be interpreted
    #[error("Invalid value for field '{field}': {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl NutritionError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        NutritionError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
