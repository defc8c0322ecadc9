//! Day naming, time-of-day parsing and display formatting.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Shown in place of missing dates and times.
pub const NOT_ENTERED: &str = "Not entered";

/// Map a Sunday-based day index (0 = Sunday .. 6 = Saturday) to a weekday.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// English day name for a Sunday-based index, "Unknown" when absent or out of range.
pub fn day_name(index: Option<u8>) -> &'static str {
    index
        .and_then(|i| DAY_NAMES.get(usize::from(i)).copied())
        .unwrap_or("Unknown")
}

/// Parse a stored time of day ("14:00", "14:00:00", "09:30:00.000").
///
/// Returns None for anything else; callers treat that as a missing time.
pub fn parse_time_of_day(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
}

/// `dd/MM/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date)
        .unwrap_or_else(|| NOT_ENTERED.to_string())
}

/// `HH:mm`
pub fn format_time(datetime: NaiveDateTime) -> String {
    datetime.format("%H:%M").to_string()
}

/// `HH:mm - HH:mm`
pub fn format_time_range(start: NaiveDateTime, end: NaiveDateTime) -> String {
    format!("{} - {}", format_time(start), format_time(end))
}

/// `$30`, `$35.5`: shortest form, no padding to cents.
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_name_is_sunday_based() {
        assert_eq!(day_name(Some(0)), "Sunday");
        assert_eq!(day_name(Some(3)), "Wednesday");
        assert_eq!(day_name(Some(6)), "Saturday");
        assert_eq!(day_name(Some(7)), "Unknown");
        assert_eq!(day_name(None), "Unknown");
    }

    #[test]
    fn test_weekday_index_matches_chrono_numbering() {
        for i in 0..7u8 {
            let weekday = weekday_from_index(i).expect("Index in range");
            assert_eq!(weekday.num_days_from_sunday(), u32::from(i));
        }
    }

    #[test]
    fn test_parse_time_of_day_variants() {
        let two_pm = NaiveTime::from_hms_opt(14, 0, 0);
        assert_eq!(parse_time_of_day("14:00"), two_pm);
        assert_eq!(parse_time_of_day("14:00:00"), two_pm);
        assert_eq!(parse_time_of_day(" 14:00 "), two_pm);
        assert_eq!(
            parse_time_of_day("09:30:00.000"),
            NaiveTime::from_hms_opt(9, 30, 0)
        );
    }

    #[test]
    fn test_parse_time_of_day_rejects_garbage() {
        assert_eq!(parse_time_of_day("soon"), None);
        assert_eq!(parse_time_of_day("25:00"), None);
        assert_eq!(parse_time_of_day(""), None);
    }

    #[test]
    fn test_date_and_time_formatting() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        let start = date.and_hms_opt(9, 5, 0).unwrap();
        let end = date.and_hms_opt(10, 5, 0).unwrap();

        assert_eq!(format_date(date), "08/01/2024");
        assert_eq!(format_optional_date(None), "Not entered");
        assert_eq!(format_time_range(start, end), "09:05 - 10:05");
        assert_eq!(format_price(25.0), "$25");
        assert_eq!(format_price(35.5), "$35.5");
    }
}
