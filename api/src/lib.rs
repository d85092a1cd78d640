//! This crate contains all shared fullstack server functions.

pub mod chart_series;
#[cfg(not(target_arch = "wasm32"))]
mod explorer_client;
pub mod home_stats;
pub mod homepage_config;
pub mod indicator_id;

use dioxus::prelude::*;

use chart_series::ChartSeries;
use home_stats::HomeStats;
use homepage_config::HomepageConfig;
use indicator_id::IndicatorId;

pub type ApiError = anyhow::Error;

/// Retrieves the homepage configuration.
///
/// In the future this may read from a settings file. For now it is built
/// from env vars on every call.
#[post("/api/homepage_config")]
pub async fn homepage_config() -> Result<HomepageConfig, ApiError> {
    Ok(HomepageConfig::from_env())
}

/// The aggregate stats snapshot for the homepage headline values.
#[post("/api/home_stats")]
pub async fn home_stats() -> Result<HomeStats, ApiError> {
    let stats = explorer_client::fetch_home_stats().await?;

    let json = serde_json::to_string(&stats)?;
    dioxus_logger::tracing::info!("home stats json: {}", json);

    Ok(stats)
}

/// Time-series data for one indicator's chart.
#[post("/api/chart_series")]
pub async fn chart_series(id: IndicatorId) -> Result<ChartSeries, ApiError> {
    let series = explorer_client::fetch_chart_series(id).await?;
    dioxus_logger::tracing::info!("fetched {} points for {}", series.chart.len(), id);
    Ok(series)
}
