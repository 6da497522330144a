use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tripplanner::{PlannerConfig, TripPlanner, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::var_os("TRIPPLANNER_CONFIG") {
        Some(path) => PlannerConfig::load_from_path(Some(PathBuf::from(path)))?,
        None => PlannerConfig::load()?,
    };

    logging::init(&config.logging)?;
    tracing::debug!(
        "Loaded configuration (server {}:{}, summary cache {} entries)",
        config.server.host,
        config.server.port,
        config.cache.city_summary_capacity
    );

    if config.apis.pixabay_key.is_none() {
        tracing::warn!("No Pixabay API key configured, the gallery will show stock photos");
    }

    let planner = TripPlanner::from_config(&config).context("Failed to create trip planner")?;
    web::run(&config, Arc::new(planner)).await
}
