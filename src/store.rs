//! File-backed record store: a JSON export of sessions, students and enrollments.

use std::path::Path;

use anyhow::{Context, Result};
use tutorcal_core::RecordSnapshot;

/// Read and decode the export at `path`.
pub async fn load_snapshot(path: &Path) -> Result<RecordSnapshot> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Could not read records from {}", path.display()))?;

    let snapshot = RecordSnapshot::from_json(&content)
        .with_context(|| format!("Could not decode records in {}", path.display()))?;

    tracing::debug!(
        sessions = snapshot.sessions.len(),
        students = snapshot.students.len(),
        enrollments = snapshot.enrollments.len(),
        "Loaded record snapshot"
    );

    Ok(snapshot)
}
