//! Keyword-matched coaching replies
//!
//! An ordered list of topics, each a set of substring keywords and a canned
//! reply. The first topic in declaration order with any keyword contained in
//! the lower-cased message wins; if none match, the help text is returned.
//! Order is significant: `"muscle"` appears under protein first, so the
//! muscle topic only answers for its other keywords.

/// A coaching topic
#[derive(Debug, Clone, Copy)]
pub struct Topic {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl Topic {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

pub const TOPICS: &[Topic] = &[
    Topic {
        name: "protein",
        keywords: &["protein", "amino acid", "muscle"],
        response: "🥚 Protein is crucial for muscle growth, repair, and overall body function. Adults should aim for 0.8-1.0g per kg of body weight, or 1.6-2.2g per kg if you're very active or building muscle. Best sources include: lean meats (chicken, turkey), fish (especially salmon), eggs, Greek yogurt, legumes (lentils, chickpeas), tofu, and quinoa. Try to distribute protein throughout the day - aim for 20-30g per meal for optimal muscle protein synthesis. Don't forget that plant proteins can be just as effective when properly combined!",
    },
    Topic {
        name: "weight_loss",
        keywords: &["weight loss", "lose weight", "fat loss", "slim"],
        response: "🎯 Sustainable weight loss comes from creating a moderate calorie deficit while maintaining proper nutrition. Here's your action plan: 1) Calculate your TDEE and eat 300-500 calories below it, 2) Prioritize protein (1.6-2g per kg) to preserve muscle mass, 3) Include strength training 3-4x per week, 4) Stay hydrated (2-3L water daily), 5) Get 7-9 hours of quality sleep, 6) Track your food intake for awareness, 7) Aim for 0.5-1kg loss per week. Remember: crash diets don't work long-term. Focus on building healthy habits you can maintain forever!",
    },
    Topic {
        name: "carbs",
        keywords: &["carb", "carbohydrate", "sugar", "glucose"],
        response: "🍚 Carbohydrates are your body's preferred energy source - they're not the enemy! Focus on complex carbs that provide sustained energy: whole grains (brown rice, quinoa, oats), sweet potatoes, fruits, vegetables, and legumes. These are rich in fiber, vitamins, and minerals. Simple carbs (white bread, sugary drinks) cause blood sugar spikes and crashes. Timing matters: consume carbs around your workouts for energy and recovery. Active individuals need 3-5g per kg bodyweight. If you're less active, 2-3g per kg is sufficient. Quality over quantity!",
    },
    Topic {
        name: "hydration",
        keywords: &["water", "hydrat", "drink", "fluid"],
        response: "💧 Hydration is fundamental to every body function! Aim for 2-3 liters daily, more if you exercise or live in hot climates. Benefits include: improved digestion, clearer skin, better energy levels, enhanced exercise performance, proper temperature regulation, and better appetite control. Signs of dehydration: dark urine, fatigue, headaches, dry mouth. Pro tips: drink a glass upon waking, keep a water bottle nearby, drink before each meal, set hourly reminders, eat water-rich foods (cucumbers, watermelon). During exercise, drink 500-750ml per hour of activity. Electrolytes matter too - add a pinch of salt or use electrolyte tablets for long workouts!",
    },
    Topic {
        name: "muscle",
        keywords: &["muscle", "gain", "bulk", "mass"],
        response: "💪 Building muscle requires four key elements: 1) **Nutrition**: Eat in a calorie surplus (250-500 cal above TDEE), consume 1.6-2.2g protein per kg bodyweight, don't fear carbs - they fuel your workouts. 2) **Training**: Lift weights 3-5x per week with progressive overload (gradually increase weight/reps), focus on compound movements (squats, deadlifts, bench press), train each muscle group 2x per week. 3) **Recovery**: Sleep 7-9 hours nightly (this is when muscles grow!), take 1-2 rest days weekly, manage stress. 4) **Consistency**: Results take months, not weeks. Track your lifts, be patient, stay consistent. Muscle growth is a marathon, not a sprint!",
    },
    Topic {
        name: "meal_plan",
        keywords: &["meal plan", "diet plan", "what to eat", "meal prep"],
        response: "🍽️ Here's a balanced daily meal plan template: **Breakfast** (7-8am): Oatmeal with berries, nuts, and protein powder OR eggs with whole grain toast and avocado. **Snack** (10am): Greek yogurt with fruit OR handful of almonds. **Lunch** (12-1pm): Grilled chicken/fish with quinoa and roasted vegetables OR large salad with lean protein and olive oil dressing. **Snack** (3-4pm): Apple with peanut butter OR protein shake. **Dinner** (6-7pm): Salmon with sweet potato and steamed broccoli OR lean beef stir-fry with brown rice. **Evening** (optional): Cottage cheese with berries if hungry. Meal prep Sunday strategy: cook 3-4 protein sources, prepare 3-4 carb sources, wash and chop vegetables, portion into containers. This ensures healthy choices all week!",
    },
    Topic {
        name: "supplements",
        keywords: &["supplement", "vitamin", "pill", "creatine", "protein powder"],
        response: "💊 Supplements support your diet but never replace whole foods. Essential supplements to consider: 1) **Protein Powder**: Convenient protein source (whey for quick absorption, casein for slow release, plant-based for vegans). 2) **Creatine Monohydrate**: 5g daily, proven to increase strength and muscle mass. 3) **Vitamin D**: 2000-4000 IU daily if you have limited sun exposure. 4) **Omega-3**: 1-2g daily if you don't eat fatty fish regularly. 5) **Multivitamin**: Insurance policy for micronutrient gaps. 6) **Magnesium**: 200-400mg for sleep and recovery. NOT essential but helpful: Pre-workout (caffeine + beta-alanine), BCAAs (if you train fasted). Always choose third-party tested brands. Consult a doctor before starting any supplement regimen!",
    },
    Topic {
        name: "fasting",
        keywords: &["fast", "intermittent fasting", "if", "skip meal"],
        response: "⏰ Intermittent fasting is an eating pattern, not a diet. Popular methods: 16:8 (fast 16 hours, eat within 8-hour window), 18:6, 5:2 (eat normally 5 days, reduce calories 2 days). Benefits: may improve insulin sensitivity, enhance fat burning, simplify eating schedule, reduce calorie intake naturally. Important: IF doesn't override calories - you still need to eat appropriate amounts. Not for everyone: avoid if pregnant, have eating disorder history, or have certain medical conditions. Start gradually: begin with 12-hour fast and extend. Stay hydrated during fasting. Break fasts with balanced meals, not junk food. IF works for some, not all - find what's sustainable for YOU!",
    },
    Topic {
        name: "cardio",
        keywords: &["cardio", "running", "aerobic", "endurance"],
        response: "🏃 Cardio is excellent for heart health, calorie burning, and endurance! Types: 1) **LISS** (Low-Intensity Steady State): 30-60 min at 60-70% max heart rate, great for recovery and fat burning. 2) **HIIT** (High-Intensity Interval Training): Short bursts of max effort with rest periods, burns more calories in less time, boosts metabolism. 3) **MISS** (Moderate-Intensity): 20-40 min at 70-80% max heart rate, balanced approach. Frequency: 2-5x weekly depending on goals. For fat loss: combine with strength training. For muscle building: don't overdo it - 2-3 sessions weekly. Best options: running, cycling, swimming, rowing, jump rope, dancing. Find activities you enjoy for long-term adherence!",
    },
    Topic {
        name: "sleep",
        keywords: &["sleep", "rest", "recover", "tired"],
        response: "😴 Sleep is when your body repairs and grows - it's NOT optional! Aim for 7-9 hours nightly. Benefits: muscle recovery, hormonal balance (testosterone, growth hormone), better performance, reduced injury risk, improved mental health, enhanced fat loss. Sleep hygiene tips: 1) Consistent sleep/wake times, 2) Dark, cool room (65-68°F), 3) No screens 1 hour before bed, 4) Avoid caffeine after 2pm, 5) No large meals 2-3 hours before sleep, 6) Regular exercise (but not too close to bedtime), 7) Manage stress through meditation or journaling. Poor sleep = higher cortisol = more fat storage + less muscle growth. Prioritize sleep like you prioritize training!",
    },
];

/// Reply used when no topic matches
pub const DEFAULT_RESPONSE: &str = "👋 I'm your AI nutrition coach! I can help you with: **Nutrition**: protein intake, macros, meal planning, supplements, hydration. **Weight Management**: fat loss, muscle building, body recomposition. **Training**: workout advice, cardio vs strength, exercise selection. **Health**: sleep, recovery, stress management, general wellness. What specific question can I help you with today? The more details you provide, the better I can assist you!";

/// First topic matching the message, if any
pub fn match_topic(message: &str) -> Option<&'static Topic> {
    let lowered = message.to_lowercase();
    TOPICS.iter().find(|topic| topic.matches(&lowered))
}

/// Canned coaching reply for a free-text message
pub fn respond(message: &str) -> &'static str {
    match_topic(message)
        .map(|topic| topic.response)
        .unwrap_or(DEFAULT_RESPONSE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn topic(name: &str) -> &'static Topic {
        TOPICS.iter().find(|t| t.name == name).unwrap()
    }

    #[test]
    fn test_topics_in_declaration_order() {
        let names: Vec<_> = TOPICS.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "protein",
                "weight_loss",
                "carbs",
                "hydration",
                "muscle",
                "meal_plan",
                "supplements",
                "fasting",
                "cardio",
                "sleep"
            ]
        );
    }

    #[test]
    fn test_protein_question() {
        let reply = respond("How much protein do I need?");
        assert_eq!(reply, topic("protein").response);
        assert!(reply.contains("Protein is crucial"));
    }

    #[test]
    fn test_unmatched_message_gets_help_text() {
        assert_eq!(respond("xyz"), DEFAULT_RESPONSE);
        assert!(match_topic("xyz").is_none());
    }

    #[rstest]
    #[case("I want to LOSE WEIGHT", "weight_loss")]
    #[case("are carbs bad?", "carbs")]
    #[case("how much water per day", "hydration")]
    #[case("tips to bulk up", "muscle")]
    #[case("give me a meal plan", "meal_plan")]
    #[case("is creatine safe", "supplements")]
    #[case("cardio or weights", "cardio")]
    #[case("I feel tired", "sleep")]
    fn test_keyword_routes_to_topic(#[case] message: &str, #[case] expected: &str) {
        assert_eq!(match_topic(message).unwrap().name, expected);
    }

    #[test]
    fn test_earlier_topic_wins_on_overlap() {
        // "muscle" is a protein keyword too, and protein is declared first
        assert_eq!(match_topic("build muscle").unwrap().name, "protein");
        // "protein powder" is listed under supplements but "protein" matches first
        assert_eq!(match_topic("best protein powder?").unwrap().name, "protein");
    }

    #[test]
    fn test_substring_matching_is_not_word_based() {
        // "breakfast" contains "fast"
        assert_eq!(match_topic("ideas for breakfast").unwrap().name, "fasting");
    }
}
