//! TimeScale - How Many Recent Days Are Visible

/// Visible time range for the chart
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeScale {
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
    /// Full series
    #[default]
    Max,
}

impl TimeScale {
    /// Number of most-recent days shown, or `None` for the full series
    pub fn num_days(&self) -> Option<usize> {
        match self {
            TimeScale::Week => Some(7),
            TimeScale::Month => Some(30),
            TimeScale::Max => None,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            TimeScale::Week => "Week",
            TimeScale::Month => "Month",
            TimeScale::Max => "Max",
        }
    }

    /// Parse a selection name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "week" => Some(TimeScale::Week),
            "month" => Some(TimeScale::Month),
            "max" => Some(TimeScale::Max),
            _ => None,
        }
    }
}

impl std::fmt::Display for TimeScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_days() {
        assert_eq!(TimeScale::Week.num_days(), Some(7));
        assert_eq!(TimeScale::Month.num_days(), Some(30));
        assert_eq!(TimeScale::Max.num_days(), None);
    }

    #[test]
    fn test_default_is_max() {
        assert_eq!(TimeScale::default(), TimeScale::Max);
    }
}
