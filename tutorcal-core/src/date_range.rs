//! Date range for narrowing the agenda.

use chrono::{Duration, NaiveDate};

use crate::constants::DEFAULT_AGENDA_DAYS;

/// Inclusive date range. None values mean unbounded in that direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        DateRange { from, to }
    }

    /// Parse command-line bounds relative to `today`.
    /// - `from`: "start" for unbounded, or YYYY-MM-DD (defaults to today)
    /// - `to`: "end" for unbounded, or YYYY-MM-DD (defaults to +DEFAULT_AGENDA_DAYS)
    pub fn from_args(from: Option<&str>, to: Option<&str>, today: NaiveDate) -> Result<Self, String> {
        let from_date = match from {
            Some("start") => None,
            Some(s) => Some(parse_date(s)?),
            None => Some(today),
        };

        let to_date = match to {
            Some("end") => None,
            Some(s) => Some(parse_date(s)?),
            None => Some(from_date.unwrap_or(today) + Duration::days(DEFAULT_AGENDA_DAYS)),
        };

        Ok(DateRange {
            from: from_date,
            to: to_date,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults_are_relative_to_today() {
        let today = date(2024, 1, 1);
        let range = DateRange::from_args(None, None, today).unwrap();

        assert_eq!(range.from, Some(today));
        assert_eq!(range.to, Some(date(2024, 1, 31)));
    }

    #[test]
    fn test_to_defaults_relative_to_explicit_from() {
        let range = DateRange::from_args(Some("2024-03-01"), None, date(2024, 1, 1)).unwrap();
        assert_eq!(range.to, Some(date(2024, 3, 31)));
    }

    #[test]
    fn test_unbounded_keywords() {
        let range = DateRange::from_args(Some("start"), Some("end"), date(2024, 1, 1)).unwrap();
        assert!(range.contains(date(1900, 1, 1)));
        assert!(range.contains(date(2999, 1, 1)));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = DateRange::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 22)));
        assert!(range.contains(date(2024, 1, 1)));
        assert!(range.contains(date(2024, 1, 22)));
        assert!(!range.contains(date(2024, 1, 23)));
    }

    #[test]
    fn test_rejects_bad_dates() {
        let err = DateRange::from_args(Some("01/02/2024"), None, date(2024, 1, 1)).unwrap_err();
        assert!(err.contains("Expected YYYY-MM-DD"));
    }
}
