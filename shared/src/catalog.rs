//! Static knowledge tables
//!
//! Fixed food catalog, the rotating "food of the day" list and the rotating
//! motivational quotes. All tables are authored once and never change at
//! runtime.

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Nutrition facts for one catalog food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub name: String,
    pub calories: f64,
    #[serde(rename = "protein")]
    pub protein_g: f64,
    #[serde(rename = "carbs")]
    pub carbs_g: f64,
    #[serde(rename = "fat")]
    pub fat_g: f64,
    #[serde(rename = "fiber")]
    pub fiber_g: f64,
    pub vitamins: String,
    pub minerals: String,
    pub benefits: String,
    pub tips: String,
}

/// Static row backing a [`FoodRecord`]
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub vitamins: &'static str,
    pub minerals: &'static str,
    pub benefits: &'static str,
    pub tips: &'static str,
}

impl CatalogEntry {
    pub fn to_record(&self) -> FoodRecord {
        FoodRecord {
            name: self.name.to_string(),
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
            fiber_g: self.fiber_g,
            vitamins: self.vitamins.to_string(),
            minerals: self.minerals.to_string(),
            benefits: self.benefits.to_string(),
            tips: self.tips.to_string(),
        }
    }
}

/// The food catalog, keyed by canonical food name
pub const FOOD_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        key: "salad",
        name: "Mixed Green Salad",
        calories: 150.0,
        protein_g: 8.0,
        carbs_g: 12.0,
        fat_g: 9.0,
        fiber_g: 5.0,
        vitamins: "A, C, K",
        minerals: "Iron, Calcium",
        benefits: "Rich in antioxidants, supports digestive health, low calorie density makes it great for weight management",
        tips: "Add lean protein like grilled chicken or chickpeas for a complete meal. Use olive oil-based dressing for healthy fats.",
    },
    CatalogEntry {
        key: "chicken",
        name: "Grilled Chicken Breast",
        calories: 165.0,
        protein_g: 31.0,
        carbs_g: 0.0,
        fat_g: 3.6,
        fiber_g: 0.0,
        vitamins: "B3, B6",
        minerals: "Phosphorus, Selenium",
        benefits: "Excellent source of lean protein, supports muscle growth and repair, low in calories",
        tips: "Pair with complex carbs and vegetables for a balanced meal. Marinate for added flavor without extra calories.",
    },
    CatalogEntry {
        key: "rice",
        name: "Brown Rice",
        calories: 216.0,
        protein_g: 5.0,
        carbs_g: 45.0,
        fat_g: 1.8,
        fiber_g: 3.5,
        vitamins: "B1, B3, B6",
        minerals: "Magnesium, Manganese",
        benefits: "Provides sustained energy, rich in fiber for digestive health, contains beneficial antioxidants",
        tips: "Cook in batches for meal prep. Combine with protein and vegetables for complete nutrition.",
    },
    CatalogEntry {
        key: "avocado",
        name: "Avocado",
        calories: 160.0,
        protein_g: 2.0,
        carbs_g: 9.0,
        fat_g: 15.0,
        fiber_g: 7.0,
        vitamins: "K, E, C, B5, B6",
        minerals: "Potassium, Magnesium",
        benefits: "Heart-healthy monounsaturated fats, may help lower cholesterol, supports nutrient absorption",
        tips: "Perfect for breakfast with eggs or as a healthy fat source in any meal. Store with pit to prevent browning.",
    },
    CatalogEntry {
        key: "salmon",
        name: "Grilled Salmon",
        calories: 206.0,
        protein_g: 22.0,
        carbs_g: 0.0,
        fat_g: 13.0,
        fiber_g: 0.0,
        vitamins: "D, B12, B6",
        minerals: "Selenium, Potassium",
        benefits: "Rich in omega-3 fatty acids, supports brain and heart health, reduces inflammation",
        tips: "Aim for 2-3 servings per week. Pair with leafy greens and whole grains for optimal nutrition.",
    },
    CatalogEntry {
        key: "oatmeal",
        name: "Oatmeal",
        calories: 154.0,
        protein_g: 6.0,
        carbs_g: 27.0,
        fat_g: 3.0,
        fiber_g: 4.0,
        vitamins: "B1, B5",
        minerals: "Manganese, Phosphorus, Magnesium",
        benefits: "Lowers cholesterol, provides sustained energy, supports digestive health",
        tips: "Top with berries, nuts, and a drizzle of honey for a complete breakfast. Add protein powder for extra protein.",
    },
    CatalogEntry {
        key: "eggs",
        name: "Scrambled Eggs",
        calories: 140.0,
        protein_g: 12.0,
        carbs_g: 1.0,
        fat_g: 10.0,
        fiber_g: 0.0,
        vitamins: "A, D, B12",
        minerals: "Selenium, Choline",
        benefits: "Complete protein source with all essential amino acids, supports eye health and brain function",
        tips: "Cook with minimal oil. Pair with whole grain toast and vegetables for a balanced breakfast.",
    },
    CatalogEntry {
        key: "banana",
        name: "Banana",
        calories: 105.0,
        protein_g: 1.3,
        carbs_g: 27.0,
        fat_g: 0.4,
        fiber_g: 3.0,
        vitamins: "B6, C",
        minerals: "Potassium, Magnesium",
        benefits: "Quick energy source, supports heart health, helps regulate blood pressure",
        tips: "Perfect pre or post-workout snack. Freeze for smoothies or nice cream.",
    },
    CatalogEntry {
        key: "broccoli",
        name: "Steamed Broccoli",
        calories: 55.0,
        protein_g: 4.0,
        carbs_g: 11.0,
        fat_g: 0.6,
        fiber_g: 5.0,
        vitamins: "C, K, A",
        minerals: "Folate, Potassium",
        benefits: "Cancer-fighting compounds, supports immune system, excellent for bone health",
        tips: "Lightly steam to preserve nutrients. Season with garlic and lemon for enhanced flavor.",
    },
    CatalogEntry {
        key: "yogurt",
        name: "Greek Yogurt",
        calories: 100.0,
        protein_g: 17.0,
        carbs_g: 6.0,
        fat_g: 0.4,
        fiber_g: 0.0,
        vitamins: "B12, B2",
        minerals: "Calcium, Phosphorus",
        benefits: "High in probiotics for gut health, excellent protein source, supports bone health",
        tips: "Choose plain varieties to avoid added sugars. Top with berries and nuts for a nutritious snack.",
    },
];

/// Look up a catalog food by its canonical key
pub fn find_food(key: &str) -> Option<FoodRecord> {
    FOOD_CATALOG
        .iter()
        .find(|entry| entry.key == key)
        .map(CatalogEntry::to_record)
}

/// Pick a catalog food uniformly at random
///
/// This is a placeholder for image recognition: it does not look at any
/// image. A real classifier belongs behind the backend's classifier trait.
pub fn pick_random_food<R: Rng + ?Sized>(rng: &mut R) -> FoodRecord {
    FOOD_CATALOG
        .choose(rng)
        .map(CatalogEntry::to_record)
        // FOOD_CATALOG is a non-empty constant
        .unwrap_or_else(|| FOOD_CATALOG[0].to_record())
}

// ============================================================================
// Daily Rotation
// ============================================================================

/// Featured "food of the day"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyFood {
    pub name: String,
    pub emoji: String,
    pub description: String,
    pub calories: u32,
    pub fat: String,
    pub fiber: String,
    pub protein: String,
}

struct DailyFoodRow {
    name: &'static str,
    emoji: &'static str,
    description: &'static str,
    calories: u32,
    fat: &'static str,
    fiber: &'static str,
    protein: &'static str,
}

const DAILY_FOODS: &[DailyFoodRow] = &[
    DailyFoodRow {
        name: "Avocado",
        emoji: "🥑",
        description: "Rich in healthy fats, fiber, and various vitamins. Avocados are nutrient-dense fruits that provide heart-healthy monounsaturated fats and can help improve cholesterol levels.",
        calories: 160,
        fat: "15g",
        fiber: "7g",
        protein: "2g",
    },
    DailyFoodRow {
        name: "Blueberries",
        emoji: "🫐",
        description: "Packed with antioxidants, particularly anthocyanins. Excellent for brain health and may help reduce DNA damage.",
        calories: 84,
        fat: "0.5g",
        fiber: "4g",
        protein: "1g",
    },
    DailyFoodRow {
        name: "Salmon",
        emoji: "🐟",
        description: "Excellent source of omega-3 fatty acids, high-quality protein, and vitamin D. Supports heart health and brain function.",
        calories: 206,
        fat: "13g",
        fiber: "0g",
        protein: "22g",
    },
];

/// Motivational quotes, rotated by day of month
pub const MOTIVATION_QUOTES: &[&str] = &[
    "Your body is a reflection of your lifestyle. Make it count! 💪",
    "Small daily improvements lead to stunning results over time. 🌟",
    "The only bad workout is the one that didn't happen. Keep moving! 🏃",
    "Eat well, move daily, hydrate often, sleep well, and be kind to yourself. 💚",
    "Progress, not perfection. Every healthy choice matters! 🎯",
    "Your health is an investment, not an expense. Invest wisely! 💎",
    "Consistency beats intensity. Show up every day! 📈",
    "Food is fuel. Choose premium for peak performance! 🚀",
];

/// Index into a rotating list: day of month modulo list length
pub fn daily_index(date: NaiveDate, len: usize) -> usize {
    date.day() as usize % len
}

/// Food of the day for a calendar date
pub fn daily_food(date: NaiveDate) -> DailyFood {
    let row = &DAILY_FOODS[daily_index(date, DAILY_FOODS.len())];
    DailyFood {
        name: row.name.to_string(),
        emoji: row.emoji.to_string(),
        description: row.description.to_string(),
        calories: row.calories,
        fat: row.fat.to_string(),
        fiber: row.fiber.to_string(),
        protein: row.protein.to_string(),
    }
}

/// Motivational quote for a calendar date
pub fn daily_motivation(date: NaiveDate) -> &'static str {
    MOTIVATION_QUOTES[daily_index(date, MOTIVATION_QUOTES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_catalog_has_ten_unique_keys() {
        let keys: HashSet<_> = FOOD_CATALOG.iter().map(|e| e.key).collect();
        assert_eq!(FOOD_CATALOG.len(), 10);
        assert_eq!(keys.len(), 10);
    }

    #[test]
    fn test_find_food() {
        let chicken = find_food("chicken").unwrap();
        assert_eq!(chicken.name, "Grilled Chicken Breast");
        assert_eq!(chicken.protein_g, 31.0);
        assert!(find_food("pizza").is_none());
    }

    #[test]
    fn test_food_record_json_shape() {
        let json = serde_json::to_value(find_food("rice").unwrap()).unwrap();
        assert_eq!(json["name"], "Brown Rice");
        assert_eq!(json["carbs"], 45.0);
        assert_eq!(json["fiber"], 3.5);
        assert!(json.get("carbs_g").is_none());
    }

    #[test]
    fn test_random_pick_eventually_covers_catalog() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..2_000 {
            seen.insert(pick_random_food(&mut rng).name);
        }
        assert_eq!(seen.len(), FOOD_CATALOG.len());
    }

    #[test]
    fn test_daily_rotation_uses_day_of_month() {
        // 19 % 3 == 1, 19 % 8 == 3
        assert_eq!(daily_food(date(2026, 10, 19)).name, "Blueberries");
        assert_eq!(
            daily_motivation(date(2026, 10, 19)),
            "Eat well, move daily, hydrate often, sleep well, and be kind to yourself. 💚"
        );
        // 3 % 3 == 0
        assert_eq!(daily_food(date(2026, 3, 3)).name, "Avocado");
    }

    #[test]
    fn test_daily_rotation_is_stable_for_a_date() {
        let d = date(2025, 1, 17);
        assert_eq!(daily_food(d), daily_food(d));
        assert_eq!(daily_motivation(d), daily_motivation(d));
    }

    #[test]
    fn test_same_day_of_month_same_pick() {
        assert_eq!(daily_food(date(2025, 1, 5)), daily_food(date(2025, 7, 5)));
    }
}
