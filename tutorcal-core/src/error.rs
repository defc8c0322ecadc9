//! Error types for tutorcal.
//!
//! The occurrence engine itself never fails; these errors come from loading
//! configuration and record snapshots.

use thiserror::Error;

/// Errors that can occur in tutorcal operations.
#[derive(Error, Debug)]
pub enum TutorCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Record decode error: {0}")]
    RecordDecode(String),
}

/// Result type alias for tutorcal operations.
pub type TutorCalResult<T> = Result<T, TutorCalError>;
