use serde::Deserialize;
use serde::Serialize;

/// Identifies one of the preconfigured homepage indicators.
///
/// The string form (`daily_txs`, `coin_price`, ...) is what appears in the
/// `CHAINSCOPE_HOMEPAGE_CHARTS` env var.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum IndicatorId {
    DailyTxs,
    CoinPrice,
    MarketCap,
    Tvl,
}

impl IndicatorId {
    /// Name of the corresponding line chart on the stats service
    /// (`/api/v1/lines/{name}`).
    pub fn line_name(&self) -> &'static str {
        match self {
            IndicatorId::DailyTxs => "newTxns",
            IndicatorId::CoinPrice => "nativeCoinPrice",
            IndicatorId::MarketCap => "marketCap",
            IndicatorId::Tvl => "tvl",
        }
    }
}
