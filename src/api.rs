use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    TravelPlannerError,
    itinerary::TripRequest,
    planner::{TripPlan, TripPlanner},
    recommendations::{ADVENTURE, CULTURE, FOOD, INTEREST_CATEGORIES},
};

pub const DAY_CHOICES: [u32; 3] = [3, 5, 7];

#[derive(Serialize, Deserialize)]
pub struct ApiBudgetRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

#[derive(Serialize, Deserialize)]
pub struct ApiFormOptions {
    pub default_city: String,
    pub interests: Vec<String>,
    pub default_interests: Vec<String>,
    pub day_choices: Vec<u32>,
    pub default_days: u32,
    pub budget: ApiBudgetRange,
    pub examples: Vec<TripRequest>,
}

impl Default for ApiFormOptions {
    fn default() -> Self {
        Self {
            default_city: "Paris".to_string(),
            interests: INTEREST_CATEGORIES.iter().map(|i| (*i).to_string()).collect(),
            default_interests: vec![FOOD.to_string(), CULTURE.to_string()],
            day_choices: DAY_CHOICES.to_vec(),
            default_days: 5,
            budget: ApiBudgetRange {
                min: 100,
                max: 10_000,
                step: 100,
                default: 2000,
            },
            examples: vec![
                TripRequest::new("Paris", 2500.0, 5, &[FOOD, CULTURE]),
                TripRequest::new("Tokyo", 3000.0, 7, &[FOOD, ADVENTURE]),
                TripRequest::new("New York", 3500.0, 4, &[CULTURE]),
            ],
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiCitySummary {
    pub city: String,
    pub summary: String,
}

/// Maps planner errors onto HTTP responses
pub struct ApiError(TravelPlannerError);

impl From<TravelPlannerError> for ApiError {
    fn from(err: TravelPlannerError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(TravelPlannerError::validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!("Request failed: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "error": self.0.user_message() }))).into_response()
    }
}

pub fn router(planner: Arc<TripPlanner>) -> Router {
    Router::new()
        .route("/plan", post(create_plan))
        .route("/cities/{city}/summary", get(get_city_summary))
        .route("/options", get(get_options))
        .with_state(planner)
}

async fn create_plan(
    State(planner): State<Arc<TripPlanner>>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Result<Json<TripPlan>, ApiError> {
    let Json(request) = payload?;
    let plan = planner.plan(&request).await?;
    Ok(Json(plan))
}

async fn get_city_summary(
    State(planner): State<Arc<TripPlanner>>,
    Path(city): Path<String>,
) -> Result<Json<ApiCitySummary>, ApiError> {
    if city.trim().is_empty() {
        return Err(TravelPlannerError::validation("Destination city cannot be empty").into());
    }
    let summary = planner.city_summary(&city).await;
    Ok(Json(ApiCitySummary { city, summary }))
}

async fn get_options() -> Json<ApiFormOptions> {
    Json(ApiFormOptions::default())
}
