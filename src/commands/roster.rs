use anyhow::Result;
use owo_colors::OwoColorize;
use tutorcal_core::{Agenda, EnrollmentLink, EnrollmentStatus, RecordId, RecordSnapshot};

use crate::render::Render;

pub fn run(snapshot: &RecordSnapshot, session_id: &RecordId, all: bool) -> Result<()> {
    let Some(session) = snapshot.session(session_id) else {
        let available: Vec<_> = snapshot.sessions.iter().map(|s| s.id.to_string()).collect();
        anyhow::bail!(
            "Session '{}' not found. Available: {}",
            session_id,
            available.join(", ")
        );
    };

    println!("{}", session.title().bold());

    if all {
        let links: Vec<_> = snapshot
            .enrollments
            .iter()
            .filter(|link| &link.session_id == session_id)
            .collect();

        if links.is_empty() {
            println!("  {}", "No enrollments".dimmed());
        }
        for link in links {
            println!("  {}", render_link(snapshot, link));
        }
        return Ok(());
    }

    let agenda = Agenda::for_today(snapshot);
    let students = agenda.active_students_for(session_id);

    if students.is_empty() {
        println!("  {}", "No students enrolled".dimmed());
        return Ok(());
    }

    for student in students {
        println!("  {}", student.render());
    }

    Ok(())
}

/// One enrollment with its status, including links to missing students.
fn render_link(snapshot: &RecordSnapshot, link: &EnrollmentLink) -> String {
    let name = match snapshot.student(&link.student_id) {
        Some(student) => student.full_name(),
        None => format!("Unknown student {}", link.student_id)
            .dimmed()
            .to_string(),
    };

    let status = match link.status {
        EnrollmentStatus::Active => link.status.to_string().green().to_string(),
        EnrollmentStatus::Inactive => link.status.to_string().red().to_string(),
    };

    format!("{} {}", name, status)
}
