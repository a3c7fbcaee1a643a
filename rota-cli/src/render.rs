//! Terminal rendering for rota-core types.
//!
//! Extension traits that add colored output to rota-core types using
//! owo_colors; the core crate itself never prints.

use owo_colors::OwoColorize;
use rota_core::classroom::Classroom;
use rota_core::diff::{DiffKind, ScheduleDiff};
use rota_core::slot::ScheduleEntry;

/// Extension trait for rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DiffKind {
    fn render(&self) -> String {
        let symbol = self.symbol();
        match self {
            DiffKind::Create => symbol.green().to_string(),
            DiffKind::Update => symbol.yellow().to_string(),
            DiffKind::Delete => symbol.red().to_string(),
        }
    }
}

impl Render for Classroom {
    fn render(&self) -> String {
        format!("🏫 {}", self.slug)
    }
}

impl Render for ScheduleEntry {
    fn render(&self) -> String {
        match self {
            ScheduleEntry::Persisted { slot, .. } => slot.to_string(),
            ScheduleEntry::Draft { slot } => format!("{} {}", slot, "(draft)".dimmed()),
        }
    }
}

/// Threshold for compact view (show counts instead of individual slots)
const COMPACT_THRESHOLD: usize = 5;

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "slot" => "slots",
            _ => word,
        }
    }
}

/// Extended rendering for ScheduleDiff
pub trait ScheduleDiffRender {
    fn render(&self, verbose: bool) -> String;
}

impl ScheduleDiffRender for ScheduleDiff {
    fn render(&self, verbose: bool) -> String {
        if self.is_empty() {
            return "   No changes".dimmed().to_string();
        }

        let (created, updated, deleted) = self.counts();
        let mut lines = Vec::new();

        if verbose || created + updated + deleted <= COMPACT_THRESHOLD {
            // Full view, listed in apply order: deletes land first.
            for stored in &self.to_delete {
                lines.push(format!(
                    "   {} {}",
                    DiffKind::Delete.render(),
                    stored.slot.to_string().red()
                ));
            }
            for update in &self.to_update {
                lines.push(format!(
                    "   {} {} {} {}",
                    DiffKind::Update.render(),
                    update.old.to_string().yellow(),
                    "→".dimmed(),
                    update.new.to_string().yellow()
                ));
            }
            for slot in &self.to_create {
                lines.push(format!(
                    "   {} {}",
                    DiffKind::Create.render(),
                    slot.to_string().green()
                ));
            }
        } else {
            // Compact view: show counts by diff kind
            if created > 0 {
                let label = format!("({} new {})", created, pluralize("slot", created));
                lines.push(format!("   {} {}", "+".green(), label.green()));
            }
            if updated > 0 {
                let label = format!("({} changed {})", updated, pluralize("slot", updated));
                lines.push(format!("   {} {}", "~".yellow(), label.yellow()));
            }
            if deleted > 0 {
                let label = format!("({} deleted {})", deleted, pluralize("slot", deleted));
                lines.push(format!("   {} {}", "-".red(), label.red()));
            }
        }

        lines.join("\n")
    }
}
