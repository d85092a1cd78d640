use serde::Deserialize;
use serde::Serialize;

/// The aggregate stats snapshot served by the explorer backend at
/// `/api/v2/stats`.
///
/// Every field is optional: a freshly indexed chain (or a backend with the
/// market data integrations disabled) legitimately omits most of them. The
/// widget never reads these fields directly; each indicator carries its own
/// extraction function.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct HomeStats {
    pub transactions_today: Option<String>,
    pub total_transactions: Option<String>,
    pub total_blocks: Option<String>,
    pub coin_price: Option<String>,
    pub market_cap: Option<String>,
    pub tvl: Option<String>,
    pub average_block_time: Option<u64>,
}
