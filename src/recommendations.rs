//! Local recommendations database
//!
//! A fixed city -> interest -> tips table built once at startup, plus the
//! tip resolver that falls back to generic suggestions for anything the
//! table does not know about.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

pub const FOOD: &str = "Food 🍜";
pub const CULTURE: &str = "Culture 🏛️";
pub const ADVENTURE: &str = "Adventure 🏔️";

/// Interest categories offered by the form, in display order
pub const INTEREST_CATEGORIES: [&str; 3] = [FOOD, CULTURE, ADVENTURE];

/// Process-wide recommendation table
pub static LOCAL_RECOMMENDATIONS: LazyLock<RecommendationTable> =
    LazyLock::new(RecommendationTable::builtin);

/// Ordered tips for one city and interest
pub type TipList = &'static [&'static str];

const PARIS_FOOD: TipList = &[
    "🍽️ Breakfast: Angelina (famous hot chocolate & pastries)",
    "🥐 Lunch: Breizh Café (best crepes in Le Marais)",
    "🍷 Dinner: Bouillon Pigalle (modern French bistro)",
    "🧀 Activity: Montmartre cheese & wine tasting tour",
];

const PARIS_CULTURE: TipList = &[
    "🖼️ Morning: Louvre Museum (skip-the-line tickets)",
    "⛪ Afternoon: Sainte-Chapelle (stained glass masterpiece)",
    "🚢 Evening: Seine River cruise with Eiffel Tower views",
];

const TOKYO_FOOD: TipList = &[
    "🍣 Breakfast: Tsukiji Outer Market fresh sushi",
    "🍜 Lunch: Ichiran Ramen (private booth experience)",
    "🍢 Dinner: Omoide Yokocho yakitori alley",
    "🍱 Activity: Sushi-making class in Ginza",
];

const TOKYO_ADVENTURE: TipList = &[
    "🎨 Morning: TeamLab Planets digital art museum",
    "🚦 Afternoon: Shibuya Crossing & Hachiko statue",
    "🍻 Evening: Golden Gai bar hopping",
];

const NEW_YORK_CULTURE: TipList = &[
    "🏛️ Morning: MET Museum early access tour",
    "🚶 Afternoon: High Line elevated park walk",
    "🍕 Dinner: Joe's Pizza (best NY-style slice)",
];

/// Immutable city -> interest category -> ordered tip list mapping
#[derive(Debug, Default)]
pub struct RecommendationTable {
    cities: HashMap<&'static str, HashMap<&'static str, TipList>>,
}

impl RecommendationTable {
    /// Build a table from `(city, interest, tips)` rows
    #[must_use]
    pub fn from_rows(rows: &[(&'static str, &'static str, TipList)]) -> Self {
        let mut cities: HashMap<&'static str, HashMap<&'static str, TipList>> = HashMap::new();
        for &(city, interest, tips) in rows {
            cities.entry(city).or_default().insert(interest, tips);
        }
        Self { cities }
    }

    fn builtin() -> Self {
        Self::from_rows(&[
            ("Paris", FOOD, PARIS_FOOD),
            ("Paris", CULTURE, PARIS_CULTURE),
            ("Tokyo", FOOD, TOKYO_FOOD),
            ("Tokyo", ADVENTURE, TOKYO_ADVENTURE),
            ("New York", CULTURE, NEW_YORK_CULTURE),
        ])
    }

    /// Exact, case-sensitive lookup. `None` when the city or interest is unknown.
    #[must_use]
    pub fn lookup(&self, city: &str, interest: &str) -> Option<TipList> {
        self.cities
            .get(city)
            .and_then(|interests| interests.get(interest))
            .copied()
    }

    /// Cities present in the table, sorted
    #[must_use]
    pub fn cities(&self) -> Vec<&'static str> {
        let mut cities: Vec<_> = self.cities.keys().copied().collect();
        cities.sort_unstable();
        cities
    }

    /// Tips for `city` and `interest`, or generic suggestions when the table has none
    #[must_use]
    pub fn resolve_tips(&self, city: &str, interest: &str) -> Vec<String> {
        match self.lookup(city, interest) {
            Some(tips) if !tips.is_empty() => tips.iter().map(|tip| (*tip).to_string()).collect(),
            _ => {
                debug!(city, interest, "No local recommendations, using generic tips");
                fallback_tips(interest)
            }
        }
    }
}

/// Generic tips referencing the lower-cased interest name
#[must_use]
pub fn fallback_tips(interest: &str) -> Vec<String> {
    let interest = interest.to_lowercase();
    vec![
        format!("Explore local {interest} spots"),
        format!("Visit popular {interest} locations"),
        "Ask locals for hidden gems".to_string(),
    ]
}

/// Resolve tips against the built-in table
#[must_use]
pub fn resolve_tips(city: &str, interest: &str) -> Vec<String> {
    LOCAL_RECOMMENDATIONS.resolve_tips(city, interest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_city_and_interest() {
        let tips = resolve_tips("Paris", CULTURE);
        assert_eq!(tips.len(), 3);
        assert!(tips[0].contains("Louvre"));
        assert!(tips[2].contains("Seine"));

        let tips = resolve_tips("Tokyo", FOOD);
        assert_eq!(tips.len(), 4);
        assert!(tips[3].contains("Sushi-making"));
    }

    #[test]
    fn test_unknown_city_falls_back() {
        let tips = resolve_tips("Lisbon", "Nightlife");
        assert_eq!(
            tips,
            vec![
                "Explore local nightlife spots",
                "Visit popular nightlife locations",
                "Ask locals for hidden gems",
            ]
        );
    }

    #[test]
    fn test_unknown_interest_for_known_city_falls_back() {
        let tips = resolve_tips("New York", FOOD);
        assert_eq!(tips.len(), 3);
        assert!(tips[0].contains("food 🍜"));
        assert!(tips[1].contains("food 🍜"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(LOCAL_RECOMMENDATIONS.lookup("paris", CULTURE).is_none());
        assert!(LOCAL_RECOMMENDATIONS.lookup("Paris", "culture 🏛️").is_none());
        assert!(LOCAL_RECOMMENDATIONS.lookup("Paris", CULTURE).is_some());
    }

    #[test]
    fn test_empty_tip_list_is_treated_as_missing() {
        const NOTHING: TipList = &[];
        let table = RecommendationTable::from_rows(&[("Oslo", "Food", NOTHING)]);
        assert_eq!(table.resolve_tips("Oslo", "Food").len(), 3);
        assert_eq!(table.resolve_tips("Oslo", "Food")[0], "Explore local food spots");
    }

    #[test]
    fn test_builtin_cities() {
        assert_eq!(
            LOCAL_RECOMMENDATIONS.cities(),
            vec!["New York", "Paris", "Tokyo"]
        );
    }
}
