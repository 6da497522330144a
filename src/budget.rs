//! Budget tier classification
//!
//! Daily spend decides which of three fixed suggestion blocks and which
//! transport recommendation an itinerary gets.

use serde::{Deserialize, Serialize};

use crate::{Result, TravelPlannerError};

/// Daily spend above this is Luxury
pub const LUXURY_THRESHOLD: f64 = 300.0;
/// Daily spend above this (and not Luxury) is Mid-range
pub const MID_RANGE_THRESHOLD: f64 = 150.0;

/// Spending style derived from `budget / days`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetTier {
    Luxury,
    MidRange,
    Budget,
}

impl BudgetTier {
    /// Tier for a per-day amount. Thresholds are strict, ties go to the lower tier.
    #[must_use]
    pub fn from_daily_budget(daily_budget: f64) -> Self {
        if daily_budget > LUXURY_THRESHOLD {
            BudgetTier::Luxury
        } else if daily_budget > MID_RANGE_THRESHOLD {
            BudgetTier::MidRange
        } else {
            BudgetTier::Budget
        }
    }

    /// Display label used in itinerary headings
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BudgetTier::Luxury => "💰 Luxury",
            BudgetTier::MidRange => "💳 Mid-range",
            BudgetTier::Budget => "🪙 Budget",
        }
    }

    /// Three suggestion bullets printed under every day
    #[must_use]
    pub fn suggestions(self) -> [&'static str; 3] {
        match self {
            BudgetTier::Luxury => [
                "Book private guided experiences",
                "Reserve at Michelin-starred restaurants",
                "Consider VIP passes for attractions",
            ],
            BudgetTier::MidRange => [
                "Take small group tours",
                "Try lunch specials at fine restaurants",
                "Buy attraction combo tickets",
            ],
            BudgetTier::Budget => [
                "Free walking tours available",
                "Street food is delicious and affordable",
                "Many museums have free entry days",
            ],
        }
    }

    /// `(best option, what to get)` for the getting-around section
    #[must_use]
    pub fn transport(self) -> (&'static str, &'static str) {
        match self {
            BudgetTier::Luxury => ("Private driver", "VIP airport transfers"),
            BudgetTier::MidRange | BudgetTier::Budget => ("Metro/buses", "Tourist travel pass"),
        }
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a trip budget, returning the tier and the per-day amount
pub fn classify_budget(budget: f64, days: u32) -> Result<(BudgetTier, f64)> {
    if days == 0 {
        return Err(TravelPlannerError::validation(
            "Trip length must be at least 1 day",
        ));
    }
    let daily_budget = budget / f64::from(days);
    Ok((BudgetTier::from_daily_budget(daily_budget), daily_budget))
}
