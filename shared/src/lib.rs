//! NutriAI Shared Library
//!
//! This crate contains the pure domain code used by both the backend and
//! the browser module: the nutrition formulas, the static knowledge tables,
//! the coaching responder, log models, validation and API types.

pub mod catalog;
pub mod coach;
pub mod errors;
pub mod models;
pub mod nutrition;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use catalog::{DailyFood, FoodRecord};
pub use errors::*;
pub use models::*;
pub use nutrition::{compute_nutrition, Gender, Goal, Macros, NutritionResult, Profile};
pub use types::*;
