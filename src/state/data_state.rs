//! DataState - Fetched Series State (National and Per-State)

use std::sync::Arc;

use ahash::AHashMap;

use crate::constants::ALL_STATES;
use crate::domain::aggregation;
use crate::domain::record::DailyCases;
use crate::domain::series::CaseSeries;

/// Owner of all fetched case series. The national and per-state fields are
/// written by independent fetches and replaced wholesale; mutation happens
/// only on the display-driving thread.
#[derive(Debug, Clone, Default)]
pub struct DataState {
    /// Nationwide chronological series
    national: Arc<CaseSeries>,
    /// One chronological series per state code
    per_state: AHashMap<String, Arc<CaseSeries>>,
    /// Loading states
    pub national_loading: bool,
    pub states_loading: bool,
}

impl DataState {
    /// Create an empty state with both fetches pending
    pub fn new() -> Self {
        Self {
            national_loading: true,
            states_loading: true,
            ..Default::default()
        }
    }

    /// Replace the nationwide series with a fresh newest-first batch
    pub fn update_national(&mut self, records: Vec<DailyCases>) {
        self.national = Arc::new(aggregation::national_series(records));
        self.national_loading = false;
    }

    /// Replace all per-state series with a fresh newest-first batch
    pub fn update_states(&mut self, records: Vec<DailyCases>) {
        self.per_state = aggregation::per_state_series(records)
            .into_iter()
            .map(|(state, series)| (state, Arc::new(series)))
            .collect();
        self.states_loading = false;
    }

    /// The nationwide series
    pub fn national(&self) -> Arc<CaseSeries> {
        self.national.clone()
    }

    /// Series for a selector key. The nationwide entry, an unknown code,
    /// and a not-yet-loaded state map all fall back to the national series.
    pub fn resolve(&self, key: &str) -> Arc<CaseSeries> {
        if key == ALL_STATES {
            return self.national.clone();
        }
        self.per_state
            .get(key)
            .cloned()
            .unwrap_or_else(|| self.national.clone())
    }

    /// Sorted state codes with the nationwide entry first
    pub fn selector_keys(&self) -> Vec<String> {
        aggregation::selector_keys(self.per_state.keys())
    }
}
