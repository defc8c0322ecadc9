//! Core engine for tutorcal.
//!
//! Turns tutoring records into calendar occurrences:
//! - `generate` expands weekly, one-time and birthday rules into `Occurrence`s
//! - `roster` resolves which students are actively enrolled in each session
//! - `agenda` ties both to a `RecordSnapshot` for filtering and detail lookup

pub mod agenda;
pub mod config;
pub mod constants;
pub mod date_range;
pub mod detail;
pub mod error;
pub mod filter;
pub mod format;
pub mod generate;
pub mod occurrence;
pub mod record;
pub mod roster;
pub mod snapshot;

pub use agenda::Agenda;
pub use filter::CategoryFilter;
pub use occurrence::{Occurrence, OccurrenceKind, SourceRef};
pub use record::{EnrollmentLink, EnrollmentStatus, RecordId, SessionRule, StudentRecord};
pub use snapshot::RecordSnapshot;
