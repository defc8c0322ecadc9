//! TUI rendering traits for tutorcal types.
//!
//! Extension traits that add colored terminal rendering to tutorcal-core
//! types using owo_colors.

use owo_colors::OwoColorize;
use tutorcal_core::detail::OccurrenceDetail;
use tutorcal_core::format::format_time;
use tutorcal_core::{Occurrence, OccurrenceKind, StudentRecord};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for OccurrenceKind {
    fn render(&self) -> String {
        let tag = format!("[{}]", self);
        match self {
            OccurrenceKind::Session => tag.blue().to_string(),
            OccurrenceKind::Birthday => tag.magenta().to_string(),
        }
    }
}

impl Render for Occurrence {
    fn render(&self) -> String {
        let time = if self.all_day {
            format!("{:>13}", "all-day")
        } else {
            let end = self.end.map(format_time).unwrap_or_default();
            format!("{:>5} - {:>5}", format_time(self.start), end)
        };

        format!("{} {} {}", time, self, self.kind().render())
    }
}

impl Render for OccurrenceDetail<'_> {
    fn render(&self) -> String {
        let mut lines = vec![self.title().bold().to_string()];

        for (label, value) in self.fields() {
            lines.push(format!("  {} {}", format!("{label}:").dimmed(), value));
        }

        lines.join("\n")
    }
}

impl Render for StudentRecord {
    fn render(&self) -> String {
        match &self.parent_phone_number {
            Some(phone) => format!("{} {}", self.full_name(), phone.dimmed()),
            None => self.full_name(),
        }
    }
}
