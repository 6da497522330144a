//! Itinerary composition
//!
//! Turns a [`TripRequest`] into the Markdown itinerary document: a header
//! with weather and budget style, one section per day and a closing block of
//! practical information.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::budget::{BudgetTier, classify_budget};
use crate::fetchers::Fetchers;
use crate::packing::generate_packing_list;
use crate::recommendations::resolve_tips;
use crate::{Result, TravelPlannerError};

/// Tips shown per day
pub const TIPS_PER_DAY: usize = 3;

/// Longest trip an itinerary is rendered for
pub const MAX_TRIP_DAYS: u32 = 365;

/// Time-of-day tags assigned to tips by position
pub const TIME_SLOTS: [&str; 3] = ["☀️ Morning", "🌇 Afternoon", "🌃 Evening"];

const RUSH_HOUR_ADVICE: &str = "Rush hour (8-9:30AM, 5-7PM)";

const MONEY_SAVING_TIPS: [&str; 3] = [
    "Free museum days (check local calendar)",
    "Lunch specials at high-end restaurants",
    "City tourism discount cards",
];

/// What the traveller asked for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Destination city, matched case-sensitively against the tips table
    pub city: String,
    /// Total budget in USD
    pub budget: f64,
    /// Trip length in days
    pub days: u32,
    /// Interest categories, rotated across days
    pub interests: Vec<String>,
}

/// One day of the trip before rendering
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    pub interest: String,
    /// `(time slot, tip)` pairs, at most [`TIPS_PER_DAY`]
    pub activities: Vec<(&'static str, String)>,
}

impl TripRequest {
    pub fn new<S: Into<String>>(city: S, budget: f64, days: u32, interests: &[&str]) -> Self {
        Self {
            city: city.into(),
            budget,
            days,
            interests: interests.iter().map(|i| (*i).to_string()).collect(),
        }
    }

    /// Reject requests the itinerary cannot be built from
    pub fn validate(&self) -> Result<()> {
        if self.city.trim().is_empty() {
            return Err(TravelPlannerError::validation("Destination city cannot be empty"));
        }
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(TravelPlannerError::validation(format!(
                "Budget must be a positive amount, got: {}",
                self.budget
            )));
        }
        if self.days == 0 {
            return Err(TravelPlannerError::validation("Trip length must be at least 1 day"));
        }
        if self.days > MAX_TRIP_DAYS {
            return Err(TravelPlannerError::validation(format!(
                "Trip length must be at most {MAX_TRIP_DAYS} days, got: {}",
                self.days
            )));
        }
        if self.interests.is_empty() {
            return Err(TravelPlannerError::validation("Select at least one interest"));
        }
        Ok(())
    }

    /// Interest for a 1-based day: `interests[day % len]`.
    ///
    /// Day 1 therefore starts on the second interest whenever more than one
    /// is selected; the first one comes round on day `len`.
    #[must_use]
    pub fn interest_for_day(&self, day: u32) -> Option<&str> {
        if self.interests.is_empty() {
            return None;
        }
        let index = day as usize % self.interests.len();
        self.interests.get(index).map(String::as_str)
    }

    /// Per-day interest and tagged tips for the whole trip
    #[must_use]
    pub fn day_plans(&self) -> Vec<DayPlan> {
        (1..=self.days)
            .filter_map(|day| {
                let interest = self.interest_for_day(day)?;
                let activities = resolve_tips(&self.city, interest)
                    .into_iter()
                    .take(TIPS_PER_DAY)
                    .enumerate()
                    .map(|(i, tip)| (TIME_SLOTS[i % TIME_SLOTS.len()], tip))
                    .collect();
                Some(DayPlan {
                    day,
                    interest: interest.to_string(),
                    activities,
                })
            })
            .collect()
    }
}

/// Produce the full itinerary text for `request`.
///
/// Fetches the weather for the header and again for the packing list; both
/// degrade to fallback text rather than failing.
#[instrument(skip(fetchers), fields(city = %request.city, days = request.days))]
pub async fn plan_trip(fetchers: &Fetchers, request: &TripRequest) -> Result<String> {
    request.validate()?;

    let weather = fetchers.weather_line(&request.city).await;
    let packing_list = generate_packing_list(fetchers, &request.city, request.days).await;
    let itinerary = compose_itinerary(request, &weather, &packing_list)?;

    info!(
        "Composed {}-day itinerary for {} ({} bytes)",
        request.days,
        request.city,
        itinerary.len()
    );
    Ok(itinerary)
}

/// Render the itinerary from already-fetched weather and packing list text
pub fn compose_itinerary(request: &TripRequest, weather: &str, packing_list: &str) -> Result<String> {
    request.validate()?;
    let (tier, daily_budget) = classify_budget(request.budget, request.days)?;
    debug!(?tier, daily_budget, "Classified budget");

    let mut doc = format!(
        "# 🌍 {} Itinerary ({} days, ${})\n**{}**  \n**Budget Style:** {} (${:.0}/day)\n\n",
        request.city,
        request.days,
        format_amount(request.budget),
        weather,
        tier.label(),
        daily_budget
    );

    for plan in request.day_plans() {
        doc.push_str(&render_day(&plan, tier));
    }

    doc.push_str(&render_practical_info(tier, packing_list));
    Ok(doc)
}

fn render_day(plan: &DayPlan, tier: BudgetTier) -> String {
    let mut section = format!("## 🗓️ Day {}: {}\n### 🕘 Daily Highlights\n", plan.day, plan.interest);
    for (slot, tip) in &plan.activities {
        section.push_str(&format!("- {slot}: {tip}\n"));
    }

    section.push_str(&format!("\n### 💡 {} Tips\n", tier.label()));
    let suggestions: Vec<String> = tier
        .suggestions()
        .iter()
        .map(|s| format!("- {s}"))
        .collect();
    section.push_str(&suggestions.join("\n"));
    section.push_str("\n\n---\n");
    section
}

fn render_practical_info(tier: BudgetTier, packing_list: &str) -> String {
    let (best_option, get) = tier.transport();
    let money_tips: Vec<String> = MONEY_SAVING_TIPS.iter().map(|t| format!("- {t}")).collect();
    format!(
        "\n### 📝 Travel Essentials\n{packing_list}\n\n\
         ### 🚍 Getting Around\n\
         - Best option: {best_option}\n\
         - Get: {get}\n\
         - Avoid: {RUSH_HOUR_ADVICE}\n\n\
         ### 💰 Money Saving Tips\n{}\n",
        money_tips.join("\n")
    )
}

/// Whole amounts print without decimals (`2500`), others as-is (`2500.5`)
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{amount:.0}")
    } else {
        format!("{amount}")
    }
}
