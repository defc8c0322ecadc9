//! Session rosters: which students are actively enrolled in each session.

use std::collections::HashMap;

use crate::record::{EnrollmentLink, RecordId, StudentRecord};

/// Active students per session, resolved once from the enrollment links.
#[derive(Debug, Default)]
pub struct RosterIndex<'a> {
    by_session: HashMap<&'a RecordId, Vec<&'a StudentRecord>>,
}

impl<'a> RosterIndex<'a> {
    /// Group active links by session, keeping link order.
    ///
    /// Inactive links and links to unknown students are dropped.
    pub fn build(enrollments: &'a [EnrollmentLink], students: &'a [StudentRecord]) -> Self {
        let mut students_by_id: HashMap<&RecordId, &StudentRecord> = HashMap::new();
        for student in students {
            students_by_id.entry(&student.id).or_insert(student);
        }

        let mut by_session: HashMap<&RecordId, Vec<&StudentRecord>> = HashMap::new();
        for link in enrollments.iter().filter(|link| link.is_active()) {
            if let Some(&student) = students_by_id.get(&link.student_id) {
                by_session.entry(&link.session_id).or_default().push(student);
            }
        }

        RosterIndex { by_session }
    }

    /// Students actively enrolled in `session_id`, empty when there are none.
    pub fn active_students_for(&self, session_id: &RecordId) -> &[&'a StudentRecord] {
        self.by_session
            .get(session_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::EnrollmentStatus::{Active, Inactive};

    fn students() -> Vec<StudentRecord> {
        vec![
            StudentRecord::new("s1", "Ada", "Lovelace"),
            StudentRecord::new("s2", "Alan", "Turing"),
            StudentRecord::new("s3", "Grace", "Hopper"),
        ]
    }

    fn names(roster: &[&StudentRecord]) -> Vec<String> {
        roster.iter().map(|s| s.full_name()).collect()
    }

    #[test]
    fn test_roster_keeps_link_order() {
        let students = students();
        let links = vec![
            EnrollmentLink::new("e1", "math", "s3", Active),
            EnrollmentLink::new("e2", "math", "s1", Active),
            EnrollmentLink::new("e3", "art", "s2", Active),
        ];
        let index = RosterIndex::build(&links, &students);

        assert_eq!(
            names(index.active_students_for(&RecordId::new("math"))),
            vec!["Grace Hopper", "Ada Lovelace"]
        );
        assert_eq!(
            names(index.active_students_for(&RecordId::new("art"))),
            vec!["Alan Turing"]
        );
    }

    #[test]
    fn test_roster_excludes_inactive_and_unresolved_links() {
        let students = students();
        let links = vec![
            EnrollmentLink::new("e1", "math", "s1", Inactive),
            EnrollmentLink::new("e2", "math", "ghost", Active),
            EnrollmentLink::new("e3", "math", "s2", Active),
        ];
        let index = RosterIndex::build(&links, &students);

        assert_eq!(
            names(index.active_students_for(&RecordId::new("math"))),
            vec!["Alan Turing"]
        );
    }

    #[test]
    fn test_roster_is_empty_for_session_without_active_links() {
        let students = students();
        let links = vec![EnrollmentLink::new("e1", "math", "s1", Inactive)];
        let index = RosterIndex::build(&links, &students);

        assert!(index.active_students_for(&RecordId::new("math")).is_empty());
        assert!(index.active_students_for(&RecordId::new("unknown")).is_empty());
    }
}
