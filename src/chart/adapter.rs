//! SparkAdapter - Indexed Chart Data Source

use std::sync::Arc;

use crate::domain::metric::Metric;
use crate::domain::record::DailyCases;
use crate::domain::series::CaseSeries;
use crate::domain::timescale::TimeScale;

/// Indexed data source for a spark-line chart.
///
/// The widget reads y values by position and truncates the visible bounds
/// on the left for bounded time scales; the underlying data is never cut.
#[derive(Debug, Clone)]
pub struct SparkAdapter {
    series: Arc<CaseSeries>,
    /// Statistic plotted on the y axis
    pub metric: Metric,
    /// Visible time range
    pub scale: TimeScale,
}

impl SparkAdapter {
    /// Create an adapter over the given series with default selectors
    pub fn new(series: Arc<CaseSeries>) -> Self {
        Self {
            series,
            metric: Metric::default(),
            scale: TimeScale::default(),
        }
    }

    /// Number of data points across the full series
    pub fn count(&self) -> usize {
        self.series.len()
    }

    /// Record at the given index (0 = oldest)
    pub fn item(&self, index: usize) -> Option<&DailyCases> {
        self.series.get(index)
    }

    /// Y value at the given index
    pub fn y(&self, index: usize) -> Option<f32> {
        self.series
            .get(index)
            .map(|record| record.increase(self.metric) as f32)
    }

    /// First visible index under the current scale, clamped to the series
    /// start. `None` means the full series is visible.
    pub fn left_bound(&self) -> Option<usize> {
        self.scale
            .num_days()
            .map(|days| self.count().saturating_sub(days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::parse_api_date;

    fn series(positives: &[i64]) -> Arc<CaseSeries> {
        let records = positives
            .iter()
            .enumerate()
            .map(|(i, p)| DailyCases {
                date_checked: parse_api_date(&format!("2020-03-{:02}T00:00:00", i + 1))
                    .expect("date"),
                positive_increase: *p,
                negative_increase: 0,
                death_increase: 0,
                state: String::new(),
            })
            .collect();
        Arc::new(CaseSeries::from_chronological(records))
    }

    #[test]
    fn test_count_and_y() {
        let adapter = SparkAdapter::new(series(&[1, 2, 3]));
        assert_eq!(adapter.count(), 3);
        assert_eq!(adapter.y(0), Some(1.0));
        assert_eq!(adapter.y(2), Some(3.0));
        assert_eq!(adapter.y(3), None);
    }

    #[test]
    fn test_left_bound_truncates_not_cuts() {
        let mut adapter = SparkAdapter::new(series(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
        assert_eq!(adapter.left_bound(), None);

        adapter.scale = TimeScale::Week;
        assert_eq!(adapter.left_bound(), Some(3));
        // Data outside the bound is still addressable
        assert_eq!(adapter.count(), 10);
        assert_eq!(adapter.y(0), Some(1.0));
    }

    #[test]
    fn test_left_bound_clamps_for_short_series() {
        let mut adapter = SparkAdapter::new(series(&[1, 2]));
        adapter.scale = TimeScale::Month;
        assert_eq!(adapter.left_bound(), Some(0));
    }
}
