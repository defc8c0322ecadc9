//! Record types as delivered by the record store.
//!
//! These mirror the rows of the `sessions`, `students` and `enrollments`
//! tables. Column names are snake_case and ids may arrive as either numbers
//! or strings, so every id is normalised into an opaque [`RecordId`].

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::DEFAULT_SESSION_TITLE;
use crate::format::weekday_from_index;

/// Nullable column decoded as its default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Opaque identity of a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct RecordId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for RecordId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => RecordId(s),
            RawId::Number(n) => RecordId(n.to_string()),
        }
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tutoring session: either weekly recurring (`day_of_week` set) or one-time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRule {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    /// 0 = Sunday .. 6 = Saturday
    #[serde(default)]
    pub day_of_week: Option<u8>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Time of day as stored, e.g. "14:00" or "14:00:00"
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub price_per_session: Option<f64>,
}

impl SessionRule {
    /// A one-time session starting on `start_date`, with everything else unset.
    pub fn new(id: impl Into<String>, start_date: Option<NaiveDate>) -> Self {
        SessionRule {
            id: RecordId::new(id),
            name: None,
            day_of_week: None,
            start_date,
            end_date: None,
            start_time: None,
            end_time: None,
            location: None,
            description: None,
            notes: None,
            price_per_session: None,
        }
    }

    /// Display title, falling back to the default label when unnamed.
    pub fn title(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => DEFAULT_SESSION_TITLE,
        }
    }

    /// The recurrence weekday, or None for one-time sessions and out-of-range values.
    pub fn weekday(&self) -> Option<Weekday> {
        self.day_of_week.and_then(weekday_from_index)
    }
}

/// A student. Only month and day of `date_of_birth` drive recurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub parent_first_name: Option<String>,
    #[serde(default)]
    pub parent_phone_number: Option<String>,
    #[serde(default)]
    pub parent_email: Option<String>,
}

impl StudentRecord {
    pub fn new(id: impl Into<String>, first_name: &str, last_name: &str) -> Self {
        StudentRecord {
            id: RecordId::new(id),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            date_of_birth: None,
            parent_first_name: None,
            parent_phone_number: None,
            parent_email: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// The birthday falling in `year`.
    ///
    /// A 29 February birth date lands on 1 March in non-leap years.
    pub fn birthday_in(&self, year: i32) -> Option<NaiveDate> {
        let dob = self.date_of_birth?;
        NaiveDate::from_ymd_opt(year, dob.month(), dob.day()).or_else(|| {
            NaiveDate::from_ymd_opt(year, dob.month(), 28).and_then(|d| d.succ_opt())
        })
    }

    /// Age turned on the birthday in `year`.
    pub fn age_in(&self, year: i32) -> Option<i32> {
        self.date_of_birth.map(|dob| year - dob.year())
    }
}

/// Whether an enrollment currently counts towards a session's roster.
///
/// Only a stored 1 is active; 0, other values and null are inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "i64")]
pub enum EnrollmentStatus {
    Active,
    #[default]
    Inactive,
}

impl From<Option<i64>> for EnrollmentStatus {
    fn from(value: Option<i64>) -> Self {
        value.map(EnrollmentStatus::from).unwrap_or_default()
    }
}

impl From<i64> for EnrollmentStatus {
    fn from(value: i64) -> Self {
        if value == 1 {
            EnrollmentStatus::Active
        } else {
            EnrollmentStatus::Inactive
        }
    }
}

impl From<EnrollmentStatus> for i64 {
    fn from(status: EnrollmentStatus) -> Self {
        match status {
            EnrollmentStatus::Active => 1,
            EnrollmentStatus::Inactive => 0,
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrollmentStatus::Active => write!(f, "Active"),
            EnrollmentStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

/// Many-to-many link between a session and a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentLink {
    pub id: RecordId,
    pub session_id: RecordId,
    pub student_id: RecordId,
    #[serde(default)]
    pub status: EnrollmentStatus,
    #[serde(default)]
    pub enrollment_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl EnrollmentLink {
    pub fn new(id: &str, session_id: &str, student_id: &str, status: EnrollmentStatus) -> Self {
        EnrollmentLink {
            id: RecordId::new(id),
            session_id: RecordId::new(session_id),
            student_id: RecordId::new(student_id),
            status,
            enrollment_date: None,
            notes: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == EnrollmentStatus::Active
    }
}
