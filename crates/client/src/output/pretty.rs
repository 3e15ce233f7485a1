//! Pretty output formatting.

use chrono::{DateTime, Utc};

use quicknotes_core::note::Note;

use crate::store::EmptyState;

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a note for display.
pub fn format_note(note: &Note) -> String {
    let mut output = format!("{}\n  ID: {}", note.title, note.id);
    if !note.tags.is_empty() {
        output.push_str(&format!("\n  Tags: {}", note.tags.join(", ")));
    }
    for line in note.content.lines() {
        output.push_str(&format!("\n  | {}", line));
    }
    output.push_str(&format!("\n  Created {}", format_date(&note.created_at)));
    if note.updated_at != note.created_at {
        output.push_str(&format!("  Updated {}", format_date(&note.updated_at)));
    }
    output
}

/// Format notes for display.
pub fn format_notes(notes: &[&Note]) -> String {
    if notes.is_empty() {
        return "No notes found.".to_string();
    }
    let mut output = format!("NOTES ({})\n", notes.len());
    output.push_str(&"-".repeat(40));
    for note in notes {
        output.push_str(&format!("\n{}", format_note(note)));
        output.push('\n');
    }
    output
}

/// Format the message shown when nothing is visible.
pub fn format_empty_state(state: EmptyState) -> String {
    format!("{}\n  {}", state.title(), state.hint())
}

/// Format the active search tags, if any.
pub fn format_search_tags(tags: &[String]) -> Option<String> {
    (!tags.is_empty()).then(|| format!("Active filters: {}", tags.join(", ")))
}
