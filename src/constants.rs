//! API and Display Constants
//!
//! Centralized constants shared by the service and display layers.

/// COVID Tracking Project API base URL
pub const BASE_URL: &str = "https://covidtracking.com/api/v1/";

/// Endpoint for the nationwide daily series
pub const NATIONAL_DAILY_ENDPOINT: &str = "us/daily.json";

/// Endpoint for the per-state daily series
pub const STATES_DAILY_ENDPOINT: &str = "states/daily.json";

/// Selector entry that maps to the nationwide series
pub const ALL_STATES: &str = "All (Nationwide)";

/// Date format used by the upstream feed (no offset; a literal Z suffix is tolerated)
pub const API_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Date format for the date label under the chart
pub const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

/// Request timeout for the daily endpoints
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Config file name under the platform config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Maximum width of the terminal sparkline
pub const SPARKLINE_WIDTH: usize = 80;
