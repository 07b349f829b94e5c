//! DailyCases - One Day's Case Statistics

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::API_DATE_FORMAT;
use crate::domain::metric::Metric;
use crate::error::Result;

/// One day's case statistics for a jurisdiction
///
/// Deserialized straight from the upstream JSON. Counts are assumed
/// non-negative but not validated; absent count fields default to zero,
/// while a non-integer value aborts the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCases {
    /// Timestamp the statistics were checked
    #[serde(with = "api_date")]
    pub date_checked: NaiveDateTime,
    /// New positive tests reported this day
    #[serde(default)]
    pub positive_increase: i64,
    /// New negative tests reported this day
    #[serde(default)]
    pub negative_increase: i64,
    /// New deaths reported this day
    #[serde(default)]
    pub death_increase: i64,
    /// Two-letter state code; empty on the national feed
    #[serde(default)]
    pub state: String,
}

impl DailyCases {
    /// Count field selected by the given metric
    pub fn increase(&self, metric: Metric) -> i64 {
        match metric {
            Metric::Positive => self.positive_increase,
            Metric::Negative => self.negative_increase,
            Metric::Death => self.death_increase,
        }
    }
}

/// Parse a date in the upstream `YYYY-MM-DDTHH:mm:ss` format.
///
/// The feed appends a literal `Z` suffix that carries no offset information.
pub fn parse_api_date(raw: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim_end_matches('Z');
    Ok(NaiveDateTime::parse_from_str(trimmed, API_DATE_FORMAT)?)
}

/// Serde adapter for the upstream date format
pub(crate) mod api_date {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::constants::API_DATE_FORMAT;

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&dt.format(API_DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_api_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_record() {
        let json = r#"{
            "dateChecked": "2020-03-02T00:00:00Z",
            "positiveIncrease": 5,
            "negativeIncrease": 10,
            "deathIncrease": 0,
            "state": "CA"
        }"#;
        let record: DailyCases = serde_json::from_str(json).expect("decode");
        assert_eq!(record.state, "CA");
        assert_eq!(record.positive_increase, 5);
        assert_eq!(record.increase(Metric::Negative), 10);
        assert_eq!(
            record.date_checked,
            parse_api_date("2020-03-02T00:00:00").expect("date")
        );
    }

    #[test]
    fn test_missing_state_defaults_to_empty() {
        let json = r#"{"dateChecked": "2020-03-02T00:00:00", "positiveIncrease": 1}"#;
        let record: DailyCases = serde_json::from_str(json).expect("decode");
        assert_eq!(record.state, "");
        assert_eq!(record.negative_increase, 0);
    }

    #[test]
    fn test_bad_date_aborts_batch() {
        let json = r#"[
            {"dateChecked": "2020-03-02T00:00:00", "positiveIncrease": 1},
            {"dateChecked": "not-a-date", "positiveIncrease": 2}
        ]"#;
        let result: Result<Vec<DailyCases>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_integer_count_is_rejected() {
        let json = r#"{"dateChecked": "2020-03-02T00:00:00", "positiveIncrease": "lots"}"#;
        let result: Result<DailyCases, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
