use anyhow::Result;
use tutorcal_core::{Agenda, RecordSnapshot};

use crate::render::Render;

pub fn run(snapshot: &RecordSnapshot, occurrence_id: &str) -> Result<()> {
    let agenda = Agenda::for_today(snapshot);

    let Some(occurrence) = agenda.find(occurrence_id) else {
        anyhow::bail!(
            "Occurrence '{}' not found.\n\n\
            List occurrence ids with:\n  \
            tutorcal agenda --verbose",
            occurrence_id
        );
    };

    let Some(detail) = agenda.detail(occurrence) else {
        anyhow::bail!("The record behind '{}' is no longer available", occurrence_id);
    };

    println!("{}", detail.render());
    Ok(())
}
