//! ChartState - Chart Selection and Derived Display Values

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::domain::metric::Metric;
use crate::domain::record::DailyCases;
use crate::domain::series::CaseSeries;
use crate::domain::timescale::TimeScale;
use crate::error::{Error, Result};
use crate::state::data_state::DataState;

/// Current chart selection: the active series plus the metric and time
/// scale selectors. Holds a read reference to exactly one series owned by
/// `DataState` and never mutates it.
///
/// Setters don't notify anyone; the display layer re-pulls the derived
/// values after each change.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    active: Arc<CaseSeries>,
    metric: Metric,
    scale: TimeScale,
}

impl ChartState {
    /// Point the chart at the series for the given selector key. Unknown
    /// keys and the nationwide entry silently resolve to the national
    /// series; this never fails.
    pub fn select_series(&mut self, key: &str, data: &DataState) {
        self.active = data.resolve(key);
    }

    /// Apply the defaults used when fresh data first arrives: the given
    /// series with the positive metric over the full range.
    pub fn reset(&mut self, series: Arc<CaseSeries>) {
        self.active = series;
        self.metric = Metric::Positive;
        self.scale = TimeScale::Max;
    }

    /// The series currently displayed
    pub fn active(&self) -> &Arc<CaseSeries> {
        &self.active
    }

    /// Selected metric
    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
    }

    /// Selected time scale
    pub fn scale(&self) -> TimeScale {
        self.scale
    }

    pub fn set_scale(&mut self, scale: TimeScale) {
        self.scale = scale;
    }

    /// Records visible under the current time scale: the last
    /// `num_days` records, or the whole series for `Max`. A series shorter
    /// than the window yields all available records.
    pub fn visible_window(&self) -> &[DailyCases] {
        match self.scale.num_days() {
            Some(days) => self.active.tail(days),
            None => self.active.records(),
        }
    }

    /// Metric count of the most recent record of the active series,
    /// regardless of the window selection. Errors before any data arrives.
    pub fn current_value(&self) -> Result<i64> {
        let last = self.active.last().ok_or(Error::EmptySeries)?;
        Ok(last.increase(self.metric))
    }

    /// Date of the most recent record, for the date label
    pub fn current_date(&self) -> Option<NaiveDateTime> {
        self.active.last().map(|record| record.date_checked)
    }
}
