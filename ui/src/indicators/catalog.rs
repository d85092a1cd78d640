//! The static indicator catalog and the filter that applies the configured
//! display order to it.

use api::home_stats::HomeStats;
use api::indicator_id::IndicatorId;

/// One displayable indicator: what to call it, how to explain it, and how to
/// pull its headline value out of a stats snapshot.
///
/// Extraction returns `None` when the snapshot lacks the field (or carries a
/// malformed value); the caller renders its "no data" state in that case.
#[derive(Clone, Copy)]
pub struct IndicatorDef {
    pub id: IndicatorId,
    pub title: &'static str,
    pub hint: Option<&'static str>,
    pub value: fn(&HomeStats) -> Option<String>,
}

impl PartialEq for IndicatorDef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

pub static CATALOG: &[IndicatorDef] = &[
    IndicatorDef {
        id: IndicatorId::DailyTxs,
        title: "Daily transactions",
        hint: Some("Number of transactions yesterday (0:00 - 23:59 UTC)"),
        value: |stats| {
            stats
                .transactions_today
                .as_deref()
                .and_then(format_thousands)
        },
    },
    IndicatorDef {
        id: IndicatorId::CoinPrice,
        title: "Coin price",
        hint: None,
        value: |stats| stats.coin_price.as_deref().and_then(format_usd),
    },
    IndicatorDef {
        id: IndicatorId::MarketCap,
        title: "Market cap",
        hint: None,
        value: |stats| stats.market_cap.as_deref().and_then(format_usd),
    },
    IndicatorDef {
        id: IndicatorId::Tvl,
        title: "Total value locked",
        hint: Some("Total value of digital assets locked in DeFi protocols"),
        value: |stats| stats.tvl.as_deref().and_then(format_usd),
    },
];

/// Applies the configured display order to the catalog: only listed ids are
/// kept, in list position order. Pure function of its two inputs.
pub fn filter_catalog<'a>(
    catalog: &'a [IndicatorDef],
    order: &[IndicatorId],
) -> Vec<&'a IndicatorDef> {
    order
        .iter()
        .filter_map(|id| catalog.iter().find(|def| def.id == *id))
        .collect()
}

/// Groups an integer's digits with commas: "1234567" -> "1,234,567".
fn format_thousands(raw: &str) -> Option<String> {
    let n = raw.trim().parse::<u64>().ok()?;
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    Some(out)
}

/// Renders a decimal amount as US dollars with two fraction digits and
/// grouped thousands: "1234.5" -> "$1,234.50".
fn format_usd(raw: &str) -> Option<String> {
    let amount = raw.trim().parse::<f64>().ok()?;
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }
    let cents = (amount * 100.0).round() as u64;
    let whole = format_thousands(&(cents / 100).to_string())?;
    Some(format!("${}.{:02}", whole, cents % 100))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(defs: &[&IndicatorDef]) -> Vec<IndicatorId> {
        defs.iter().map(|def| def.id).collect()
    }

    #[test]
    fn every_indicator_id_has_exactly_one_catalog_entry() {
        use strum::IntoEnumIterator;
        for id in IndicatorId::iter() {
            assert_eq!(CATALOG.iter().filter(|d| d.id == id).count(), 1, "{}", id);
        }
    }

    #[test]
    fn filter_keeps_only_listed_ids_in_list_order() {
        // catalog order is DailyTxs, CoinPrice, MarketCap, Tvl; the order
        // list wins.
        let order = [IndicatorId::Tvl, IndicatorId::DailyTxs];
        assert_eq!(ids(&filter_catalog(CATALOG, &order)), order);
    }

    #[test]
    fn filter_is_independent_of_catalog_order() {
        let mut reversed: Vec<IndicatorDef> = CATALOG.to_vec();
        reversed.reverse();
        let order = [IndicatorId::CoinPrice, IndicatorId::MarketCap];
        assert_eq!(ids(&filter_catalog(&reversed, &order)), order);
    }

    #[test]
    fn empty_order_list_filters_everything_out() {
        assert!(filter_catalog(CATALOG, &[]).is_empty());
    }

    #[test]
    fn full_order_list_is_the_identity_permutation() {
        let order = [
            IndicatorId::MarketCap,
            IndicatorId::Tvl,
            IndicatorId::CoinPrice,
            IndicatorId::DailyTxs,
        ];
        assert_eq!(ids(&filter_catalog(CATALOG, &order)), order);
    }

    #[test]
    fn daily_txs_extraction_formats_thousands() {
        let stats = api::home_stats::HomeStats {
            transactions_today: Some("1234567".to_string()),
            ..Default::default()
        };
        let def = CATALOG.iter().find(|d| d.id == IndicatorId::DailyTxs).unwrap();
        assert_eq!((def.value)(&stats), Some("1,234,567".to_string()));
    }

    #[test]
    fn extraction_on_sparse_snapshot_is_none() {
        let stats = api::home_stats::HomeStats::default();
        for def in CATALOG {
            assert_eq!((def.value)(&stats), None, "{}", def.id);
        }
    }

    #[test]
    fn extraction_on_malformed_field_is_none() {
        let stats = api::home_stats::HomeStats {
            coin_price: Some("not-a-number".to_string()),
            ..Default::default()
        };
        let def = CATALOG.iter().find(|d| d.id == IndicatorId::CoinPrice).unwrap();
        assert_eq!((def.value)(&stats), None);
    }

    #[test]
    fn usd_formatting_rounds_to_cents() {
        assert_eq!(format_usd("1234.5"), Some("$1,234.50".to_string()));
        assert_eq!(format_usd("0.996"), Some("$1.00".to_string()));
        assert_eq!(format_usd("1658535769.00"), Some("$1,658,535,769.00".to_string()));
        assert_eq!(format_usd("-1"), None);
    }

    #[test]
    fn thousands_formatting_handles_short_numbers() {
        assert_eq!(format_thousands("0"), Some("0".to_string()));
        assert_eq!(format_thousands("999"), Some("999".to_string()));
        assert_eq!(format_thousands("1000"), Some("1,000".to_string()));
    }
}
