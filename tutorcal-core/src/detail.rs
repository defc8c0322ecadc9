//! Display-ready detail records for a selected occurrence.

use chrono::Datelike;

use crate::format::{
    NOT_ENTERED, day_name, format_date, format_optional_date, format_price, format_time_range,
};
use crate::occurrence::Occurrence;
use crate::record::{SessionRule, StudentRecord};

/// Detail for one occurrence, joined with its source record.
#[derive(Debug, Clone, PartialEq)]
pub enum OccurrenceDetail<'a> {
    Session(SessionDetail<'a>),
    Birthday(BirthdayDetail<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionDetail<'a> {
    pub occurrence: &'a Occurrence,
    pub rule: &'a SessionRule,
    pub students: &'a [&'a StudentRecord],
}

#[derive(Debug, Clone, PartialEq)]
pub struct BirthdayDetail<'a> {
    pub occurrence: &'a Occurrence,
    pub student: &'a StudentRecord,
}

impl OccurrenceDetail<'_> {
    pub fn title(&self) -> &str {
        match self {
            OccurrenceDetail::Session(d) => &d.occurrence.title,
            OccurrenceDetail::Birthday(d) => &d.occurrence.title,
        }
    }

    /// Labelled fields in display order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            OccurrenceDetail::Session(d) => d.fields(),
            OccurrenceDetail::Birthday(d) => d.fields(),
        }
    }
}

impl SessionDetail<'_> {
    pub fn student_names(&self) -> Vec<String> {
        self.students.iter().map(|s| s.full_name()).collect()
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let occurrence = self.occurrence;
        let rule = self.rule;
        let name = match rule.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => "Untitled Session".to_string(),
        };
        let time = match occurrence.end {
            Some(end) => format_time_range(occurrence.start, end),
            None => NOT_ENTERED.to_string(),
        };

        let mut fields = vec![
            ("Session Name", name),
            ("Date", format_date(occurrence.date())),
            ("Time", time),
            ("Day", day_name(rule.day_of_week).to_string()),
        ];

        if let Some(description) = &rule.description {
            fields.push(("Description", description.clone()));
        }
        if let Some(location) = &rule.location {
            fields.push(("Location", location.clone()));
        }
        if let Some(price) = rule.price_per_session {
            fields.push(("Price per Session", format_price(price)));
        }
        if let Some(notes) = &rule.notes {
            fields.push(("Notes", notes.clone()));
        }

        let students = if self.students.is_empty() {
            "No students enrolled".to_string()
        } else {
            self.student_names().join(", ")
        };
        fields.push(("Enrolled Students", students));

        fields
    }
}

impl BirthdayDetail<'_> {
    /// Age the student turns on this occurrence.
    pub fn turning(&self) -> Option<i32> {
        self.student.age_in(self.occurrence.date().year())
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let student = self.student;
        let mut fields = vec![
            ("Student", student.full_name()),
            ("Birthday", format_optional_date(student.date_of_birth)),
        ];

        if let Some(age) = self.turning() {
            fields.push(("Turning", age.to_string()));
        }
        if let Some(parent) = &student.parent_first_name {
            fields.push(("Parent", parent.clone()));
        }
        if let Some(phone) = &student.parent_phone_number {
            fields.push(("Phone", phone.clone()));
        }
        if let Some(email) = &student.parent_email {
            fields.push(("Email", email.clone()));
        }

        fields
    }
}
