//! Format - Formatting Utilities

use chrono::NaiveDateTime;

use crate::constants::DISPLAY_DATE_FORMAT;

/// Format a number with thousand separators for the ticker display
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let len = digits.len();
    let mut result = String::new();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if n < 0 { format!("-{result}") } else { result }
}

/// Format a record date for the date label (e.g. "Mar 02, 2020")
pub fn format_record_date(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::parse_api_date;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(-1234), "-1,234");
    }

    #[test]
    fn test_format_record_date() {
        let dt = parse_api_date("2020-03-02T00:00:00").expect("date");
        assert_eq!(format_record_date(&dt), "Mar 02, 2020");
    }
}
