//! CaseSeries - Chronological Series of Daily Records

use crate::domain::record::DailyCases;

/// Chronologically ordered (oldest-first) series of daily records for one
/// jurisdiction. Replaced wholesale on re-fetch; never updated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseSeries {
    records: Vec<DailyCases>,
}

impl CaseSeries {
    /// Build from a newest-first batch as delivered by the upstream feed.
    /// Internal order is oldest-first so the chart reads left to right.
    pub fn from_newest_first(mut records: Vec<DailyCases>) -> Self {
        records.reverse();
        Self { records }
    }

    /// Build from records already in chronological order
    pub fn from_chronological(records: Vec<DailyCases>) -> Self {
        Self { records }
    }

    /// Number of records in the series
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the series has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, oldest first
    pub fn records(&self) -> &[DailyCases] {
        &self.records
    }

    /// Record at the given index (0 = oldest)
    pub fn get(&self, index: usize) -> Option<&DailyCases> {
        self.records.get(index)
    }

    /// Most recent record
    pub fn last(&self) -> Option<&DailyCases> {
        self.records.last()
    }

    /// The last `min(n, len)` records
    pub fn tail(&self, n: usize) -> &[DailyCases] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::parse_api_date;

    fn record(date: &str) -> DailyCases {
        DailyCases {
            date_checked: parse_api_date(date).expect("date"),
            positive_increase: 0,
            negative_increase: 0,
            death_increase: 0,
            state: String::new(),
        }
    }

    #[test]
    fn test_from_newest_first_reverses() {
        let series = CaseSeries::from_newest_first(vec![
            record("2020-03-03T00:00:00"),
            record("2020-03-02T00:00:00"),
            record("2020-03-01T00:00:00"),
        ]);
        assert_eq!(series.len(), 3);
        let first = series.get(0).expect("first");
        let last = series.last().expect("last");
        assert_eq!(first.date_checked, parse_api_date("2020-03-01T00:00:00").expect("date"));
        assert_eq!(last.date_checked, parse_api_date("2020-03-03T00:00:00").expect("date"));
    }

    #[test]
    fn test_tail_clamps_to_available() {
        let series = CaseSeries::from_chronological(vec![
            record("2020-03-01T00:00:00"),
            record("2020-03-02T00:00:00"),
        ]);
        assert_eq!(series.tail(7).len(), 2);
        assert_eq!(series.tail(1).len(), 1);
        assert_eq!(
            series.tail(1)[0].date_checked,
            parse_api_date("2020-03-02T00:00:00").expect("date")
        );
    }

    #[test]
    fn test_empty_series() {
        let series = CaseSeries::default();
        assert!(series.is_empty());
        assert!(series.last().is_none());
        assert!(series.tail(7).is_empty());
    }
}
