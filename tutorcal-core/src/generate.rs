//! Occurrence generation.
//!
//! Expands session rules and student birth dates into concrete occurrences.
//! Generation is a pure function of its inputs and the current year; malformed
//! values in one record never affect the others.

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use tracing::{debug, warn};

use crate::constants::{BIRTHDAY_WINDOW_YEARS, DEFAULT_SESSION_MINUTES, OPEN_ENDED_FALLBACK_MONTHS};
use crate::format::parse_time_of_day;
use crate::occurrence::{Occurrence, OccurrenceKind, SessionAnchor, SourceRef};
use crate::record::{SessionRule, StudentRecord};

/// Generate every session and birthday occurrence, unfiltered.
///
/// Sessions come first in rule order, followed by birthdays in student order.
pub fn generate_occurrences(
    sessions: &[SessionRule],
    students: &[StudentRecord],
    current_year: i32,
) -> Vec<Occurrence> {
    let mut occurrences: Vec<Occurrence> = sessions.iter().flat_map(expand_session).collect();

    occurrences.extend(
        students
            .iter()
            .flat_map(|student| expand_birthdays(student, current_year)),
    );

    debug!(
        total = occurrences.len(),
        sessions = occurrences
            .iter()
            .filter(|o| o.kind() == OccurrenceKind::Session)
            .count(),
        birthdays = occurrences
            .iter()
            .filter(|o| o.kind() == OccurrenceKind::Birthday)
            .count(),
        "Generated occurrences"
    );

    occurrences
}

/// Expand one session rule into its occurrences.
pub fn expand_session(rule: &SessionRule) -> Vec<Occurrence> {
    let Some(start_date) = rule.start_date else {
        return Vec::new();
    };

    let times = SessionTimes::for_rule(rule);
    let mut anchors = Vec::new();

    match (rule.day_of_week, rule.weekday()) {
        (None, _) => anchors.push((start_date, SessionAnchor::OneTime)),
        (Some(day), None) => {
            warn!(session = %rule.id, day, "Skipping session with invalid day_of_week");
        }
        (Some(_), Some(weekday)) => {
            if start_date.weekday() == weekday {
                anchors.push((start_date, SessionAnchor::Start));
            }

            match rule.end_date {
                Some(end_date) => {
                    let mut current = first_weekday_after(start_date, weekday);
                    while let Some(date) = current.filter(|d| *d <= end_date) {
                        anchors.push((date, SessionAnchor::Recurring(date)));
                        current = date.checked_add_days(Days::new(7));
                    }
                }
                None => {
                    // Bounded stand-in for an open-ended rule: one date per month.
                    for month in 0..OPEN_ENDED_FALLBACK_MONTHS {
                        let Some(date) = month_start(start_date, month)
                            .and_then(|first| first_weekday_on_or_after(first, weekday))
                        else {
                            continue;
                        };

                        // The start date itself was handled above.
                        if date <= start_date {
                            continue;
                        }
                        anchors.push((date, SessionAnchor::Fallback(month)));
                    }
                }
            }
        }
    }

    anchors
        .into_iter()
        .map(|(date, anchor)| {
            let (start, end) = times.on(date);
            Occurrence {
                id: Occurrence::session_id(&rule.id, anchor),
                title: rule.title().to_string(),
                start,
                end: Some(end),
                all_day: false,
                source: SourceRef::Session(rule.id.clone()),
            }
        })
        .collect()
}

/// All-day birthday occurrences for the current and following year.
///
/// Past birthdays within the current year are kept.
pub fn expand_birthdays(student: &StudentRecord, current_year: i32) -> Vec<Occurrence> {
    if student.date_of_birth.is_none() {
        return Vec::new();
    }

    (current_year..current_year + BIRTHDAY_WINDOW_YEARS)
        .filter_map(|year| {
            let date = student.birthday_in(year)?;
            Some(Occurrence {
                id: Occurrence::birthday_id(&student.id, year),
                title: format!("🎂 {}'s Birthday", student.full_name()),
                start: date.and_time(NaiveTime::MIN),
                end: None,
                all_day: true,
                source: SourceRef::Student(student.id.clone()),
            })
        })
        .collect()
}

/// Parsed time-of-day bounds for a session, shared by all its occurrences.
struct SessionTimes {
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
}

impl SessionTimes {
    fn for_rule(rule: &SessionRule) -> Self {
        SessionTimes {
            start: parse_field(rule, "start_time", rule.start_time.as_deref()),
            end: parse_field(rule, "end_time", rule.end_time.as_deref()),
        }
    }

    /// Start and end datetimes on `date`. Without an end time the session lasts one hour.
    fn on(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let start = date.and_time(self.start.unwrap_or(NaiveTime::MIN));
        let end = match self.end {
            Some(end) => date.and_time(end),
            None => start + Duration::minutes(DEFAULT_SESSION_MINUTES),
        };
        (start, end)
    }
}

fn parse_field(rule: &SessionRule, field: &str, raw: Option<&str>) -> Option<NaiveTime> {
    let raw = raw?;
    let parsed = parse_time_of_day(raw);
    if parsed.is_none() {
        warn!(session = %rule.id, field, value = raw, "Ignoring unparseable time of day");
    }
    parsed
}

/// First date strictly after `date` that falls on `weekday`.
fn first_weekday_after(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let ahead = days_until(date.weekday(), weekday);
    let ahead = if ahead == 0 { 7 } else { ahead };
    date.checked_add_days(Days::new(ahead))
}

fn first_weekday_on_or_after(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days_until(date.weekday(), weekday)))
}

fn days_until(from: Weekday, to: Weekday) -> u64 {
    u64::from((7 + to.num_days_from_sunday() - from.num_days_from_sunday()) % 7)
}

/// First day of the month `offset` months after the month containing `date`.
fn month_start(date: NaiveDate, offset: u32) -> Option<NaiveDate> {
    let months = date.year() * 12 + date.month0() as i32 + offset as i32;
    NaiveDate::from_ymd_opt(months.div_euclid(12), months.rem_euclid(12) as u32 + 1, 1)
}
