//! Snapshot of the record store's three collections.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{TutorCalError, TutorCalResult};
use crate::record::{EnrollmentLink, RecordId, SessionRule, StudentRecord};

/// Everything the engine reads, fetched in one go.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    #[serde(default)]
    pub sessions: Vec<SessionRule>,
    #[serde(default)]
    pub students: Vec<StudentRecord>,
    #[serde(default)]
    pub enrollments: Vec<EnrollmentLink>,
}

impl RecordSnapshot {
    /// Decode a JSON export and order sessions by start date.
    pub fn from_json(content: &str) -> TutorCalResult<Self> {
        let mut snapshot: RecordSnapshot = serde_json::from_str(content)
            .map_err(|e| TutorCalError::RecordDecode(e.to_string()))?;
        snapshot.sort_sessions();
        Ok(snapshot)
    }

    /// Ascending by start date; sessions without one go last. Stable.
    pub fn sort_sessions(&mut self) {
        self.sessions
            .sort_by(|a, b| match (a.start_date, b.start_date) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
    }

    pub fn session(&self, id: &RecordId) -> Option<&SessionRule> {
        self.sessions.iter().find(|s| &s.id == id)
    }

    pub fn student(&self, id: &RecordId) -> Option<&StudentRecord> {
        self.students.iter().find(|s| &s.id == id)
    }
}
