//! Output formatting utilities

use crate::domain::Note;
use chrono::Local;

/// Format notes for display, numbered from 1 in list order
pub fn format_note_list(notes: &[Note], date_format: &str) -> String {
    if notes.is_empty() {
        return "No notes found".to_string();
    }

    let mut output = String::new();
    for (index, note) in notes.iter().enumerate() {
        output.push_str(&format_note_line(index + 1, note, date_format));
        output.push('\n');
    }
    output
}

/// One listing line: position, done marker, local date, short id, text
pub fn format_note_line(position: usize, note: &Note, date_format: &str) -> String {
    let marker = if note.completed { "[x]" } else { "[ ]" };
    format!(
        "{:>3}. {} {}  {}  {}",
        position,
        marker,
        note.date.with_timezone(&Local).format(date_format),
        note.short_id(),
        note.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const FORMAT: &str = "%Y";

    #[test]
    fn test_format_empty_list() {
        let output = format_note_list(&[], FORMAT);
        assert_eq!(output, "No notes found");
    }

    #[test]
    fn test_format_note_list() {
        let date = Utc.with_ymd_and_hms(2030, 6, 15, 12, 0, 0).unwrap();
        let mut done = Note::new("water plants", date);
        done.completed = true;
        let notes = vec![Note::new("buy milk", date), done];

        let output = format_note_list(&notes, FORMAT);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  1. [ ] 2030"));
        assert!(lines[0].ends_with("buy milk"));
        assert!(lines[1].starts_with("  2. [x] 2030"));
        assert!(lines[1].contains(&notes[1].short_id()));
    }
}
