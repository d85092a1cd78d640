//! The chart collaborator: fetches the selected indicator's time series and
//! owns its own loading/error/loaded presentation.

use api::chart_series::ChartPoint;
use api::indicator_id::IndicatorId;
use dioxus::prelude::*;
use itertools::Itertools;
use itertools::MinMaxResult;

use crate::components::pico::Skeleton;

const VIEW_WIDTH: f64 = 480.0;
const VIEW_HEIGHT: f64 = 150.0;
const PAD: f64 = 4.0;

/// Lays the series out as SVG polyline coordinates inside the fixed viewbox:
/// x advances evenly per point, y is inverted (SVG y grows downward) and
/// scaled to the series' value range. A flat or single-point series sits on
/// the vertical midline.
fn polyline_points(points: &[ChartPoint]) -> Vec<(f64, f64)> {
    if points.is_empty() {
        return Vec::new();
    }

    let (min, max) = match points
        .iter()
        .map(|p| p.value)
        .minmax_by(|a, b| a.total_cmp(b))
    {
        MinMaxResult::NoElements => return Vec::new(),
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(min, max) => (min, max),
    };
    let span = max - min;

    let inner_w = VIEW_WIDTH - 2.0 * PAD;
    let inner_h = VIEW_HEIGHT - 2.0 * PAD;
    let step = if points.len() > 1 {
        inner_w / (points.len() - 1) as f64
    } else {
        0.0
    };

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = PAD + step * i as f64;
            let y = if span == 0.0 {
                VIEW_HEIGHT / 2.0
            } else {
                PAD + inner_h * (1.0 - (p.value - min) / span)
            };
            (x, y)
        })
        .collect()
}

/// Renders the series as a standalone SVG line. Embedded via
/// `dangerous_inner_html`; the markup contains only numbers we format
/// ourselves, never upstream strings.
fn svg_markup(points: &[ChartPoint]) -> String {
    let coords = polyline_points(points)
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .join(" ");

    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" "#,
            r#"preserveAspectRatio="none" style="width: 100%; height: 150px; display: block;">"#,
            r#"<polyline points="{points}" fill="none" stroke="var(--pico-primary)" "#,
            r#"stroke-width="2" stroke-linejoin="round"/></svg>"#,
        ),
        w = VIEW_WIDTH,
        h = VIEW_HEIGHT,
        points = coords,
    )
}

#[component]
pub fn ChainIndicatorChart(id: IndicatorId) -> Element {
    let series = use_resource(move || async move { api::chart_series(id).await });

    rsx! {
        match &*series.read() {
            None => rsx! {
                Skeleton { width: "100%", height: "150px" }
            },
            Some(Err(e)) => rsx! {
                p {
                    style: "height: 150px; display: flex; align-items: center; color: var(--pico-muted-color);",
                    title: "{e}",
                    "There is no chart data"
                }
            },
            Some(Ok(series)) if series.is_empty() => rsx! {
                p {
                    style: "height: 150px; display: flex; align-items: center; color: var(--pico-muted-color);",
                    "There is no chart data"
                }
            },
            Some(Ok(series)) => {
                let svg = svg_markup(&series.chart);
                rsx! {
                    div {
                        style: "width: 100%;",
                        dangerous_inner_html: "{svg}",
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn point(day: u32, value: f64) -> ChartPoint {
        ChartPoint {
            date: NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
            value,
        }
    }

    #[test]
    fn empty_series_has_no_points() {
        assert!(polyline_points(&[]).is_empty());
    }

    #[test]
    fn x_advances_monotonically_across_the_viewbox() {
        let series = vec![point(1, 1.0), point(2, 3.0), point(3, 2.0)];
        let coords = polyline_points(&series);
        assert_eq!(coords.len(), 3);
        assert_eq!(coords[0].0, PAD);
        assert_eq!(coords[2].0, VIEW_WIDTH - PAD);
        assert!(coords.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn y_is_inverted_and_spans_the_value_range() {
        let series = vec![point(1, 0.0), point(2, 10.0)];
        let coords = polyline_points(&series);
        // The minimum sits at the bottom of the viewbox, the maximum at the
        // top.
        assert_eq!(coords[0].1, VIEW_HEIGHT - PAD);
        assert_eq!(coords[1].1, PAD);
    }

    #[test]
    fn flat_series_sits_on_the_midline() {
        let series = vec![point(1, 5.0), point(2, 5.0), point(3, 5.0)];
        for (_, y) in polyline_points(&series) {
            assert_eq!(y, VIEW_HEIGHT / 2.0);
        }
    }

    #[test]
    fn single_point_sits_on_the_midline_at_left_pad() {
        let coords = polyline_points(&[point(1, 42.0)]);
        assert_eq!(coords, vec![(PAD, VIEW_HEIGHT / 2.0)]);
    }

    #[test]
    fn markup_contains_rounded_coordinate_pairs() {
        let series = vec![point(1, 0.0), point(2, 3.0)];
        let svg = svg_markup(&series);
        assert!(svg.contains(r#"points="4.0,146.0 476.0,4.0""#), "{svg}");
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }
}
