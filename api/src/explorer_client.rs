//! HTTP client for the explorer backend and its stats microservice.
//!
//! Server-side only; the wasm client never talks to the upstream services
//! directly, it goes through the server functions in `lib.rs`.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::chart_series::ChartPoint;
use crate::chart_series::ChartSeries;
use crate::home_stats::HomeStats;
use crate::indicator_id::IndicatorId;
use crate::ApiError;

const DEFAULT_API_URL: &str = "http://localhost:4000";
const DEFAULT_STATS_API_URL: &str = "http://localhost:8050";

fn api_url() -> String {
    std::env::var("CHAINSCOPE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

fn stats_api_url() -> String {
    std::env::var("CHAINSCOPE_STATS_API_URL").unwrap_or_else(|_| DEFAULT_STATS_API_URL.to_string())
}

/// Fetches the aggregate stats snapshot from the explorer backend.
pub async fn fetch_home_stats() -> Result<HomeStats, ApiError> {
    let url = format!("{}/api/v2/stats", api_url());

    let client = reqwest::Client::new();
    let stats = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<HomeStats>()
        .await?;

    Ok(stats)
}

/// The stats service serializes every point value as a string.
#[derive(Deserialize, Debug)]
struct RawLinePoint {
    date: NaiveDate,
    value: String,
}

#[derive(Deserialize, Debug)]
struct RawLineChart {
    chart: Vec<RawLinePoint>,
}

/// Fetches one indicator's time series from the stats service.
pub async fn fetch_chart_series(id: IndicatorId) -> Result<ChartSeries, ApiError> {
    let url = format!("{}/api/v1/lines/{}", stats_api_url(), id.line_name());

    let client = reqwest::Client::new();
    let raw = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<RawLineChart>()
        .await?;

    Ok(decode_line_chart(raw, id))
}

fn decode_line_chart(raw: RawLineChart, id: IndicatorId) -> ChartSeries {
    let mut chart = Vec::with_capacity(raw.chart.len());
    for point in raw.chart {
        match point.value.parse::<f64>() {
            // "NaN" and "inf" parse successfully; they have no place on a
            // polyline, so they get the same treatment as garbage.
            Ok(value) if value.is_finite() => chart.push(ChartPoint {
                date: point.date,
                value,
            }),
            _ => {
                dioxus_logger::tracing::warn!(
                    "skipping unusable point for {}: {} = {:?}",
                    id,
                    point.date,
                    point.value
                );
            }
        }
    }

    ChartSeries { chart }
}
