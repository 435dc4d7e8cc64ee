//! codecs for the localized duration text attached to route legs, such as
//! "1시간 8분" or "29분". the hour and minute clauses are each optional and
//! may appear anywhere in the string; a string with neither clause parses
//! to zero minutes, since malformed duration text is expected in raw
//! upstream data and must not fail a row.

use regex::Regex;
use std::sync::LazyLock;

/// unit marker for the hour clause. hour values are whole numbers.
pub const HOUR_UNIT: &str = "시간";

/// unit marker for the minute clause. minute values may be fractional.
pub const MINUTE_UNIT: &str = "분";

static HOURS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*시간").expect("invalid hour clause regex"));

static MINUTES_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.?\d*)\s*분").expect("invalid minute clause regex"));

/// extracts the (hours, minutes) clause values from a duration string,
/// defaulting each missing clause to zero.
fn parse_clauses(text: &str) -> (i64, f64) {
    let hours = HOURS_PATTERN
        .captures(text)
        .and_then(|caps| caps[1].parse::<i64>().ok())
        .unwrap_or(0);
    let minutes = MINUTES_PATTERN
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .unwrap_or(0.0);
    (hours, minutes)
}

pub mod whole {
    //! integer-minute codec variant used by the route simplifier, which
    //! only ever accumulates whole-minute legs. any fractional minute
    //! component in the input is truncated toward zero.

    /// parses duration text into total whole minutes.
    pub fn parse(text: &str) -> i64 {
        let (hours, minutes) = super::parse_clauses(text);
        ((hours * 60) as f64 + minutes) as i64
    }

    /// formats total minutes as duration text, omitting empty clauses.
    /// zero always renders as the minute-only form, never an empty string.
    pub fn format(minutes: i64) -> String {
        let hours = minutes / 60;
        let mins = minutes % 60;
        if hours > 0 && mins > 0 {
            format!("{}{} {}{}", hours, super::HOUR_UNIT, mins, super::MINUTE_UNIT)
        } else if hours > 0 {
            format!("{}{}", hours, super::HOUR_UNIT)
        } else {
            format!("{}{}", mins, super::MINUTE_UNIT)
        }
    }
}

pub mod fractional {
    //! float-minute codec variant used by the midpoint splitter, which
    //! must represent exact proportional splits of a leg.

    /// parses duration text into total minutes, preserving any
    /// fractional minute component.
    pub fn parse(text: &str) -> f64 {
        let (hours, minutes) = super::parse_clauses(text);
        (hours * 60) as f64 + minutes
    }

    /// formats total minutes as duration text. fractional minute
    /// remainders render as-is, e.g. "2.5분".
    pub fn format(minutes: f64) -> String {
        let hours = (minutes / 60.0).floor() as i64;
        let mins = minutes % 60.0;
        if hours > 0 && mins > 0.0 {
            format!("{}{} {}{}", hours, super::HOUR_UNIT, mins, super::MINUTE_UNIT)
        } else if hours > 0 {
            format!("{}{}", hours, super::HOUR_UNIT)
        } else {
            format!("{}{}", mins, super::MINUTE_UNIT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{fractional, whole};

    #[test]
    fn test_whole_parse_hour_and_minute_clauses() {
        assert_eq!(whole::parse("1시간 8분"), 68);
        assert_eq!(whole::parse("29분"), 29);
        assert_eq!(whole::parse("1시간"), 60);
        assert_eq!(whole::parse("2시간 30분"), 150);
    }

    #[test]
    fn test_whole_parse_truncates_fractional_minutes() {
        assert_eq!(whole::parse("2.5분"), 2);
        assert_eq!(whole::parse("1시간 0.9분"), 60);
    }

    #[test]
    fn test_parse_missing_clauses_is_zero() {
        assert_eq!(whole::parse(""), 0);
        assert_eq!(whole::parse("garbage"), 0);
        assert_eq!(fractional::parse(""), 0.0);
        assert_eq!(fractional::parse("no units here"), 0.0);
    }

    #[test]
    fn test_whole_format_clause_omission() {
        assert_eq!(whole::format(68), "1시간 8분");
        assert_eq!(whole::format(29), "29분");
        assert_eq!(whole::format(60), "1시간");
        assert_eq!(whole::format(120), "2시간");
    }

    #[test]
    fn test_format_zero_is_never_empty() {
        assert_eq!(whole::format(0), "0분");
        assert_eq!(fractional::format(0.0), "0분");
    }

    #[test]
    fn test_whole_round_trip() {
        for minutes in [0, 1, 59, 60, 61, 90, 120, 1000] {
            assert_eq!(whole::parse(&whole::format(minutes)), minutes);
        }
    }

    #[test]
    fn test_fractional_parse() {
        assert_eq!(fractional::parse("1시간 30분"), 90.0);
        assert_eq!(fractional::parse("45분"), 45.0);
        assert_eq!(fractional::parse("2시간"), 120.0);
        assert_eq!(fractional::parse("2.5분"), 2.5);
    }

    #[test]
    fn test_fractional_format() {
        assert_eq!(fractional::format(90.0), "1시간 30분");
        assert_eq!(fractional::format(45.0), "45분");
        assert_eq!(fractional::format(2.5), "2.5분");
        assert_eq!(fractional::format(90.5), "1시간 30.5분");
        assert_eq!(fractional::format(120.0), "2시간");
    }

    #[test]
    fn test_fractional_round_trip() {
        for minutes in [0.0, 0.5, 2.5, 45.0, 60.0, 90.5, 119.25] {
            assert_eq!(fractional::parse(&fractional::format(minutes)), minutes);
        }
    }

    #[test]
    fn test_parse_clause_order_is_irrelevant() {
        assert_eq!(whole::parse("8분 1시간"), 68);
        assert_eq!(fractional::parse("30분 1시간"), 90.0);
    }
}
