//! Aggregation - National and Per-State Series
//!
//! Transforms the raw newest-first fetch batches into queryable series.
//! Each load fully replaces prior data; there is no merge.

use ahash::AHashMap;

use crate::constants::ALL_STATES;
use crate::domain::record::DailyCases;
use crate::domain::series::CaseSeries;

/// Reverse the newest-first national batch into a chronological series.
/// Length-preserving; an empty batch yields an empty series.
pub fn national_series(records: Vec<DailyCases>) -> CaseSeries {
    CaseSeries::from_newest_first(records)
}

/// Group the newest-first states batch into one chronological series per
/// state code, preserving within-group order.
///
/// Records with an empty state code form their own bucket under the
/// empty-string key.
pub fn per_state_series(records: Vec<DailyCases>) -> AHashMap<String, CaseSeries> {
    let mut buckets: AHashMap<String, Vec<DailyCases>> = AHashMap::new();
    for record in records.into_iter().rev() {
        buckets.entry(record.state.clone()).or_default().push(record);
    }
    buckets
        .into_iter()
        .map(|(state, records)| (state, CaseSeries::from_chronological(records)))
        .collect()
}

/// Sorted state codes prefixed with the nationwide selector entry
pub fn selector_keys<'a>(codes: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut keys: Vec<String> = codes.cloned().collect();
    keys.sort();
    keys.insert(0, ALL_STATES.to_string());
    keys
}
