//! The homepage chain-indicators widget: a headline value and chart for the
//! active indicator, next to a clickable list of the alternatives.

use api::home_stats::HomeStats;
use api::homepage_config::HomepageConfig;
use dioxus::prelude::*;

use super::catalog::filter_catalog;
use super::catalog::IndicatorDef;
use super::catalog::CATALOG;
use super::chart::ChainIndicatorChart;
use super::indicator_item::ChainIndicatorItem;
use crate::components::pico::InfoTip;
use crate::components::pico::Skeleton;
use crate::theme::use_theme_mode;

/// What the headline region shows for the active indicator. The stats
/// request and the chart request resolve independently; this only depends on
/// the former.
#[derive(Clone, PartialEq, Debug)]
enum HeadlineValue {
    Loading,
    NoData,
    Value(String),
}

fn headline_value<E>(
    stats: Option<&Result<HomeStats, E>>,
    indicator: Option<&IndicatorDef>,
) -> HeadlineValue {
    match stats {
        None => HeadlineValue::Loading,
        Some(Err(_)) => HeadlineValue::NoData,
        Some(Ok(snapshot)) => match indicator.and_then(|def| (def.value)(snapshot)) {
            Some(value) => HeadlineValue::Value(value),
            None => HeadlineValue::NoData,
        },
    }
}

/// An empty filtered catalog means the widget renders nothing at all.
fn shows_widget(indicators: &[&IndicatorDef]) -> bool {
    !indicators.is_empty()
}

/// The selectable list only appears when there is an alternative to pick;
/// a lone indicator renders just the headline and chart.
fn shows_indicator_list(indicators: &[&IndicatorDef]) -> bool {
    indicators.len() > 1
}

#[component]
pub fn ChainIndicators(config: HomepageConfig) -> Element {
    let indicators = filter_catalog(CATALOG, &config.charts);

    // Default to the first indicator in display order; empty catalog means
    // no selection at all.
    let initial = indicators.first().map(|def| def.id);
    let mut selected = use_signal(move || initial);

    // Fetched once per mount; selection changes never re-fire this.
    let stats = use_resource(move || async move { api::home_stats().await });

    let theme = use_theme_mode();

    // Nothing configured for the homepage: render nothing at all.
    if !shows_widget(&indicators) {
        return rsx! {};
    }

    let indicator = indicators
        .iter()
        .copied()
        .find(|def| Some(def.id) == selected());

    let stats_state = stats.read();
    let value = headline_value(stats_state.as_ref(), indicator);

    rsx! {
        section {
            style: "
                display: flex;
                flex-wrap: wrap;
                gap: 0 3rem;
                align-items: stretch;
                padding: 2rem;
                border-radius: var(--pico-border-radius);
                box-shadow: var(--pico-card-box-shadow);
                background-color: {theme.surface_color()};
            ",
            div {
                style: "flex-grow: 1; display: flex; flex-direction: column; min-width: 0;",
                div {
                    style: "display: flex; align-items: center;",
                    span {
                        style: "font-weight: 500; font-size: 1.125rem;",
                        {indicator.map(|def| def.title).unwrap_or_default()}
                    }
                    if let Some(hint) = indicator.and_then(|def| def.hint) {
                        InfoTip { label: "{hint}" }
                    }
                }
                match value {
                    HeadlineValue::Loading => rsx! {
                        div {
                            style: "margin: 0.75rem 0 1rem 0;",
                            Skeleton { width: "215px", height: "48px" }
                        }
                    },
                    HeadlineValue::NoData => rsx! {
                        p {
                            style: "margin: 0.75rem 0 1rem 0;",
                            "There is no data"
                        }
                    },
                    HeadlineValue::Value(value) => rsx! {
                        p {
                            style: "
                                margin: 0.75rem 0 1rem 0;
                                font-weight: 600;
                                font-size: 48px;
                                line-height: 48px;
                            ",
                            "{value}"
                        }
                    },
                }
                if let Some(id) = selected() {
                    // Keyed on the selection: reselecting remounts the chart
                    // with a fresh request and drops any in-flight one.
                    ChainIndicatorChart { key: "{id}", id }
                }
            }
            if shows_indicator_list(&indicators) {
                ul {
                    style: "
                        flex-shrink: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        margin: 0;
                        padding: 0.75rem;
                        border-radius: var(--pico-border-radius);
                        background-color: {theme.panel_color()};
                    ",
                    for def in indicators.iter().copied() {
                        ChainIndicatorItem {
                            key: "{def.id}",
                            id: def.id,
                            title: def.title,
                            value: match &*stats_state {
                                Some(Ok(snapshot)) => (def.value)(snapshot),
                                _ => None,
                            },
                            is_selected: Some(def.id) == selected(),
                            on_select: move |id| selected.set(Some(id)),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::indicator_id::IndicatorId;

    use super::*;

    type StatsResult = Result<HomeStats, &'static str>;

    fn snapshot() -> HomeStats {
        HomeStats {
            transactions_today: Some("4200".to_string()),
            coin_price: Some("1.25".to_string()),
            ..Default::default()
        }
    }

    fn def(id: IndicatorId) -> &'static IndicatorDef {
        CATALOG.iter().find(|d| d.id == id).unwrap()
    }

    #[test]
    fn pending_stats_show_the_placeholder_regardless_of_selection() {
        for id in [IndicatorId::DailyTxs, IndicatorId::Tvl] {
            let value = headline_value::<&'static str>(None, Some(def(id)));
            assert_eq!(value, HeadlineValue::Loading);
        }
        assert_eq!(
            headline_value::<&'static str>(None, None),
            HeadlineValue::Loading
        );
    }

    #[test]
    fn failed_stats_show_the_notice_regardless_of_selection() {
        let failed: StatsResult = Err("boom");
        for id in [IndicatorId::DailyTxs, IndicatorId::CoinPrice] {
            assert_eq!(
                headline_value(Some(&failed), Some(def(id))),
                HeadlineValue::NoData
            );
        }
    }

    #[test]
    fn loaded_stats_show_the_selected_indicators_value() {
        let loaded: StatsResult = Ok(snapshot());
        assert_eq!(
            headline_value(Some(&loaded), Some(def(IndicatorId::DailyTxs))),
            HeadlineValue::Value("4,200".to_string())
        );
        assert_eq!(
            headline_value(Some(&loaded), Some(def(IndicatorId::CoinPrice))),
            HeadlineValue::Value("$1.25".to_string())
        );
    }

    #[test]
    fn loaded_stats_without_the_selected_field_show_the_notice() {
        let loaded: StatsResult = Ok(snapshot());
        assert_eq!(
            headline_value(Some(&loaded), Some(def(IndicatorId::Tvl))),
            HeadlineValue::NoData
        );
    }

    #[test]
    fn empty_filtered_catalog_renders_no_widget_at_all() {
        let filtered = filter_catalog(CATALOG, &[]);
        assert!(!shows_widget(&filtered));
        assert!(!shows_indicator_list(&filtered));
    }

    #[test]
    fn single_survivor_renders_the_headline_without_the_list() {
        let filtered = filter_catalog(CATALOG, &[IndicatorId::CoinPrice]);
        assert!(shows_widget(&filtered));
        assert!(!shows_indicator_list(&filtered));
    }

    #[test]
    fn two_or_more_survivors_render_the_list() {
        let filtered =
            filter_catalog(CATALOG, &[IndicatorId::CoinPrice, IndicatorId::DailyTxs]);
        assert!(shows_widget(&filtered));
        assert!(shows_indicator_list(&filtered));
    }

    #[test]
    fn initial_selection_is_the_first_filtered_entry_or_none() {
        let config = HomepageConfig {
            charts: vec![IndicatorId::Tvl, IndicatorId::DailyTxs],
        };
        let filtered = filter_catalog(CATALOG, &config.charts);
        assert_eq!(filtered.first().map(|d| d.id), Some(IndicatorId::Tvl));

        let empty = HomepageConfig { charts: vec![] };
        let filtered = filter_catalog(CATALOG, &empty.charts);
        assert_eq!(filtered.first().map(|d| d.id), None);
    }
}
