//! Category filtering of generated occurrences.

use serde::{Deserialize, Serialize};

use crate::occurrence::{Occurrence, OccurrenceKind};

fn enabled() -> bool {
    true
}

/// Which occurrence categories are shown. Both are on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter {
    #[serde(default = "enabled")]
    pub sessions: bool,
    #[serde(default = "enabled")]
    pub birthdays: bool,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter {
            sessions: true,
            birthdays: true,
        }
    }
}

impl CategoryFilter {
    pub fn allows(&self, kind: OccurrenceKind) -> bool {
        match kind {
            OccurrenceKind::Session => self.sessions,
            OccurrenceKind::Birthday => self.birthdays,
        }
    }

    /// The filter with `kind` flipped.
    pub fn toggled(self, kind: OccurrenceKind) -> Self {
        match kind {
            OccurrenceKind::Session => CategoryFilter {
                sessions: !self.sessions,
                ..self
            },
            OccurrenceKind::Birthday => CategoryFilter {
                birthdays: !self.birthdays,
                ..self
            },
        }
    }

    /// Occurrences whose kind is enabled, in their original order.
    pub fn apply<'a>(&self, occurrences: &'a [Occurrence]) -> Vec<&'a Occurrence> {
        occurrences
            .iter()
            .filter(|occurrence| self.allows(occurrence.kind()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_occurrences;
    use crate::record::{SessionRule, StudentRecord};
    use chrono::NaiveDate;

    fn sample() -> Vec<Occurrence> {
        let mut rule = SessionRule::new("1", NaiveDate::from_ymd_opt(2024, 1, 1));
        rule.day_of_week = Some(1);
        rule.end_date = NaiveDate::from_ymd_opt(2024, 1, 22);

        let mut student = StudentRecord::new("s1", "Ada", "Lovelace");
        student.date_of_birth = NaiveDate::from_ymd_opt(2011, 12, 10);

        generate_occurrences(&[rule], &[student], 2024)
    }

    fn count(occurrences: &[&Occurrence], kind: OccurrenceKind) -> usize {
        occurrences.iter().filter(|o| o.kind() == kind).count()
    }

    #[test]
    fn test_default_filter_shows_everything() {
        let occurrences = sample();
        assert_eq!(CategoryFilter::default().apply(&occurrences).len(), 6);
    }

    #[test]
    fn test_disabling_sessions_keeps_birthdays() {
        let occurrences = sample();
        let filter = CategoryFilter::default().toggled(OccurrenceKind::Session);
        let visible = filter.apply(&occurrences);

        assert_eq!(count(&visible, OccurrenceKind::Session), 0);
        assert_eq!(count(&visible, OccurrenceKind::Birthday), 2);
    }

    #[test]
    fn test_toggling_twice_restores_output() {
        let occurrences = sample();
        let filter = CategoryFilter::default();
        let round_trip = filter
            .toggled(OccurrenceKind::Session)
            .toggled(OccurrenceKind::Session);

        assert_eq!(round_trip, filter);
        assert_eq!(round_trip.apply(&occurrences), filter.apply(&occurrences));
    }

    #[test]
    fn test_everything_disabled_is_empty() {
        let occurrences = sample();
        let filter = CategoryFilter {
            sessions: false,
            birthdays: false,
        };
        assert!(filter.apply(&occurrences).is_empty());
    }
}
