//! Utility functions for the Tourvisto admin

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Turn a camelCase form key into a label: `travelStyle` becomes `Travel Style`
#[must_use]
pub fn format_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.push(c);
        } else {
            label.push(c);
        }
    }
    label
}

/// Format a stored timestamp as `January 05, 2025`.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates; anything else
/// is returned unchanged.
#[must_use]
pub fn format_date(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%B %d, %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%B %d, %Y").to_string();
    }
    raw.to_string()
}

/// Direction of a month-over-month change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Current month is higher
    Increment,
    /// Current month is lower
    Decrement,
    /// Both months are equal
    NoChange,
}

/// Month-over-month change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendChange {
    /// Direction
    pub trend: Trend,
    /// Absolute change relative to last month, in percent
    pub percentage: f64,
}

/// Compare this month's count with last month's
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn calculate_trend(current_month: u64, last_month: u64) -> TrendChange {
    if last_month == 0 {
        return if current_month == 0 {
            TrendChange {
                trend: Trend::NoChange,
                percentage: 0.0,
            }
        } else {
            TrendChange {
                trend: Trend::Increment,
                percentage: 100.0,
            }
        };
    }

    let trend = match current_month.cmp(&last_month) {
        std::cmp::Ordering::Greater => Trend::Increment,
        std::cmp::Ordering::Less => Trend::Decrement,
        std::cmp::Ordering::Equal => Trend::NoChange,
    };
    let change = current_month.abs_diff(last_month) as f64;

    TrendChange {
        trend,
        percentage: change / last_month as f64 * 100.0,
    }
}

/// Case-insensitive substring match used by the combo-box filters
#[must_use]
pub fn matches_query(candidate: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || candidate.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("travelStyle", "Travel Style")]
    #[case("groupType", "Group Type")]
    #[case("interest", "Interest")]
    #[case("budget", "Budget")]
    #[case("", "")]
    fn test_format_key(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(format_key(key), expected);
    }

    #[rstest]
    #[case("2025-01-05T10:30:00.000+00:00", "January 05, 2025")]
    #[case("2024-12-31", "December 31, 2024")]
    #[case("yesterday", "yesterday")]
    fn test_format_date(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_date(raw), expected);
    }

    #[test]
    fn test_trend_without_last_month() {
        assert_eq!(
            calculate_trend(0, 0),
            TrendChange {
                trend: Trend::NoChange,
                percentage: 0.0
            }
        );
        assert_eq!(
            calculate_trend(7, 0),
            TrendChange {
                trend: Trend::Increment,
                percentage: 100.0
            }
        );
    }

    #[test]
    fn test_trend_directions() {
        let up = calculate_trend(150, 100);
        assert_eq!(up.trend, Trend::Increment);
        assert!((up.percentage - 50.0).abs() < f64::EPSILON);

        let down = calculate_trend(25, 100);
        assert_eq!(down.trend, Trend::Decrement);
        assert!((down.percentage - 75.0).abs() < f64::EPSILON);

        let flat = calculate_trend(40, 40);
        assert_eq!(flat.trend, Trend::NoChange);
        assert!(flat.percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn test_matches_query() {
        assert!(matches_query("🇫🇷France", "fra"));
        assert!(matches_query("Nature & Outdoors", "OUT"));
        assert!(matches_query("Anything", ""));
        assert!(matches_query("Anything", "   "));
        assert!(!matches_query("Peru", "chile"));
    }
}
