use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

/// One sample of an indicator's time series.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Time-series data for a single indicator, as returned by the stats
/// service's line-chart endpoint. Points arrive oldest first.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    pub chart: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.chart.is_empty()
    }
}
