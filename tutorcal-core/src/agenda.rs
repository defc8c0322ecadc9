//! One generation pass over a record snapshot.
//!
//! An `Agenda` owns the occurrences generated from a snapshot together with
//! the roster index built from the same snapshot. Filtering and detail lookup
//! are read-only queries against it; a new snapshot means a new `Agenda`.

use chrono::{Datelike, Local};

use crate::date_range::DateRange;
use crate::detail::{BirthdayDetail, OccurrenceDetail, SessionDetail};
use crate::filter::CategoryFilter;
use crate::generate::generate_occurrences;
use crate::occurrence::{Occurrence, SourceRef};
use crate::record::{RecordId, StudentRecord};
use crate::roster::RosterIndex;
use crate::snapshot::RecordSnapshot;

pub struct Agenda<'a> {
    snapshot: &'a RecordSnapshot,
    occurrences: Vec<Occurrence>,
    roster: RosterIndex<'a>,
}

impl<'a> Agenda<'a> {
    /// Generate occurrences with `current_year` as the birthday window start.
    pub fn build(snapshot: &'a RecordSnapshot, current_year: i32) -> Self {
        Agenda {
            snapshot,
            occurrences: generate_occurrences(&snapshot.sessions, &snapshot.students, current_year),
            roster: RosterIndex::build(&snapshot.enrollments, &snapshot.students),
        }
    }

    /// Generate occurrences for the current local year.
    pub fn for_today(snapshot: &'a RecordSnapshot) -> Self {
        Self::build(snapshot, Local::now().year())
    }

    pub fn visible(&self, filter: &CategoryFilter) -> Vec<&Occurrence> {
        filter.apply(&self.occurrences)
    }

    /// Visible occurrences starting inside `range`, sorted by start.
    pub fn visible_in(&self, filter: &CategoryFilter, range: &DateRange) -> Vec<&Occurrence> {
        let mut occurrences: Vec<_> = self
            .visible(filter)
            .into_iter()
            .filter(|o| range.contains(o.date()))
            .collect();
        occurrences.sort_by_key(|o| o.start);
        occurrences
    }

    pub fn find(&self, occurrence_id: &str) -> Option<&Occurrence> {
        self.occurrences.iter().find(|o| o.id == occurrence_id)
    }

    pub fn active_students_for(&self, session_id: &RecordId) -> &[&'a StudentRecord] {
        self.roster.active_students_for(session_id)
    }

    /// Join an occurrence with its source record (and roster, for sessions).
    ///
    /// None when the source record is not part of this snapshot.
    pub fn detail<'s>(&'s self, occurrence: &'s Occurrence) -> Option<OccurrenceDetail<'s>> {
        match &occurrence.source {
            SourceRef::Session(id) => {
                let rule = self.snapshot.session(id)?;
                Some(OccurrenceDetail::Session(SessionDetail {
                    occurrence,
                    rule,
                    students: self.roster.active_students_for(id),
                }))
            }
            SourceRef::Student(id) => {
                let student = self.snapshot.student(id)?;
                Some(OccurrenceDetail::Birthday(BirthdayDetail {
                    occurrence,
                    student,
                }))
            }
        }
    }
}
