//! `TripPlanner` - templated travel itineraries
//!
//! This library turns a destination, budget, trip length and interests into
//! a Markdown itinerary, and gathers the photos, weather, map embed and city
//! summary shown next to it.

pub mod api;
pub mod budget;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetchers;
pub mod itinerary;
pub mod logging;
pub mod packing;
pub mod planner;
pub mod recommendations;
pub mod web;

// Re-export core types for public API
pub use budget::{BudgetTier, classify_budget};
pub use cache::LruCache;
pub use config::PlannerConfig;
pub use error::TravelPlannerError;
pub use fetchers::{Fetchers, TravelApiClient, TravelDataSource};
pub use itinerary::{TripRequest, compose_itinerary, plan_trip};
pub use packing::generate_packing_list;
pub use planner::{TripPlan, TripPlanner, map_embed};
pub use recommendations::resolve_tips;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelPlannerError>;
