//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the log store, the image store and the food classifier.

pub mod analysis;
pub mod coach;
pub mod logging;
pub mod nutrition;
pub mod uploads;

pub use analysis::{FoodClassifier, PlaceholderClassifier};
pub use coach::CoachService;
pub use logging::LogService;
pub use nutrition::NutritionService;
pub use uploads::{ImageStore, LocalImageStore};
