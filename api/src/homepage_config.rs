use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::indicator_id::IndicatorId;

/// Deployment-level homepage settings.
///
/// `charts` is both an inclusion filter and a display order: only the listed
/// indicators are shown, in list order. Read from env vars on the server;
/// the client receives it once through [`crate::homepage_config`].
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HomepageConfig {
    pub charts: Vec<IndicatorId>,
}

impl Default for HomepageConfig {
    fn default() -> Self {
        Self {
            charts: vec![IndicatorId::DailyTxs, IndicatorId::CoinPrice],
        }
    }
}

impl HomepageConfig {
    /// Builds the config from `CHAINSCOPE_HOMEPAGE_CHARTS`, a comma-separated
    /// list of indicator ids. Unset or blank falls back to the default list;
    /// unrecognized ids are skipped.
    pub fn from_env() -> Self {
        match std::env::var("CHAINSCOPE_HOMEPAGE_CHARTS") {
            Ok(raw) if !raw.trim().is_empty() => Self::parse(&raw),
            _ => Self::default(),
        }
    }

    fn parse(raw: &str) -> Self {
        let mut charts: Vec<IndicatorId> = Vec::new();
        for s in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match IndicatorId::from_str(s) {
                // A repeated id keeps its first position; the list doubles
                // as a set of render keys downstream.
                Ok(id) if !charts.contains(&id) => charts.push(id),
                Ok(_) => {}
                Err(_) => {
                    dioxus_logger::tracing::warn!("unknown homepage chart id: {}", s);
                }
            }
        }
        Self { charts }
    }
}
