use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use tutorcal_core::date_range::DateRange;
use tutorcal_core::{Agenda, CategoryFilter, RecordSnapshot};

use crate::render::Render;

pub fn run(
    snapshot: &RecordSnapshot,
    filter: CategoryFilter,
    range: DateRange,
    verbose: bool,
) -> Result<()> {
    let agenda = Agenda::for_today(snapshot);
    let occurrences = agenda.visible_in(&filter, &range);

    if occurrences.is_empty() {
        println!("{}", "No occurrences found".dimmed());
        return Ok(());
    }

    let today = chrono::Local::now().date_naive();
    let mut current_date: Option<NaiveDate> = None;

    for occurrence in occurrences {
        let date = occurrence.date();

        if current_date != Some(date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(date, today).bold());
            current_date = Some(date);
        }

        println!("  {}", occurrence.render());
        if verbose {
            println!("  {:>13} {}", "", occurrence.id.dimmed());
        }
    }

    Ok(())
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}
