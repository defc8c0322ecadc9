//! Occurrences: concrete dated entries produced from sessions and birthdays.
//!
//! Occurrences are derived data. They are rebuilt from the records on every
//! generation pass and hold only an id back-reference to their source.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::record::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccurrenceKind {
    Session,
    Birthday,
}

impl fmt::Display for OccurrenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OccurrenceKind::Session => write!(f, "session"),
            OccurrenceKind::Birthday => write!(f, "birthday"),
        }
    }
}

/// Back-reference to the record an occurrence was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceRef {
    Session(RecordId),
    Student(RecordId),
}

impl SourceRef {
    pub fn kind(&self) -> OccurrenceKind {
        match self {
            SourceRef::Session(_) => OccurrenceKind::Session,
            SourceRef::Student(_) => OccurrenceKind::Birthday,
        }
    }
}

/// Which expansion step produced a session occurrence. Encoded into the occurrence id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAnchor {
    /// The start date itself, when it falls on the recurrence weekday
    Start,
    /// A weekly step up to the end date
    Recurring(NaiveDate),
    /// First matching weekday of the n-th month of the open-ended fallback
    Fallback(u32),
    /// A session without a recurrence weekday
    OneTime,
}

/// A single calendar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Unique within one generation pass
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    /// None for all-day entries
    pub end: Option<NaiveDateTime>,
    pub all_day: bool,
    pub source: SourceRef,
}

impl Occurrence {
    pub fn kind(&self) -> OccurrenceKind {
        self.source.kind()
    }

    /// The calendar date the occurrence is anchored on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn session_id(session: &RecordId, anchor: SessionAnchor) -> String {
        match anchor {
            SessionAnchor::Start => format!("session-{}-start", session),
            SessionAnchor::Recurring(date) => {
                let millis = date
                    .and_hms_opt(0, 0, 0)
                    .map(|dt| dt.and_utc().timestamp_millis())
                    .unwrap_or_default();
                format!("session-{}-recurring-{}", session, millis)
            }
            SessionAnchor::Fallback(month) => format!("session-{}-fallback-{}", session, month),
            SessionAnchor::OneTime => format!("session-{}-one-time", session),
        }
    }

    pub fn birthday_id(student: &RecordId, year: i32) -> String {
        format!("birthday-{}-{}", student, year)
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
