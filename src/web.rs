use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api;
use crate::config::PlannerConfig;
use crate::planner::TripPlanner;

/// API under `/api`, the form's static files everywhere else
pub fn app(planner: Arc<TripPlanner>, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router(planner))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
}

pub async fn run(config: &PlannerConfig, planner: Arc<TripPlanner>) -> Result<()> {
    let app = app(planner, &config.server.static_dir);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Trip planner running at http://localhost:{}", config.server.port);
    axum::serve(listener, app)
        .await
        .context("Web server terminated")?;
    Ok(())
}
