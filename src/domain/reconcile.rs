//! Merging a created or edited note into a user's list

use crate::domain::{Note, NoteDraft};
use crate::error::{AgendaError, Result};
use chrono::{DateTime, Duration, Utc};

/// How far in the past a new note may be scheduled by default
pub const DEFAULT_GRACE_SECONDS: i64 = 60;

/// Sort notes ascending by date. Equal dates keep their relative order.
pub fn sort_notes(notes: &mut [Note]) {
    notes.sort_by_key(|note| note.date);
}

/// Merge `draft` into `notes` and return the new, sorted list.
///
/// `target` is `None` to create a note and `Some(index)` to replace the note
/// at that index. Only new notes are checked against `now - grace`.
pub fn reconcile(
    notes: &[Note],
    draft: NoteDraft,
    target: Option<usize>,
    now: DateTime<Utc>,
    grace: Duration,
) -> Result<Vec<Note>> {
    let text = draft.text.trim();
    if text.is_empty() {
        return Err(AgendaError::EmptyNote);
    }

    let mut updated = notes.to_vec();

    match target {
        Some(index) => {
            let existing = updated
                .get_mut(index)
                .ok_or_else(|| AgendaError::NoteNotFound(format!("#{}", index + 1)))?;
            *existing = Note {
                id: existing.id,
                text: text.to_string(),
                date: draft.date,
                completed: existing.completed,
            };
        }
        None => {
            // A window reaching before the earliest representable instant has no lower bound
            if let Some(earliest) = now.checked_sub_signed(grace) {
                if draft.date < earliest {
                    return Err(AgendaError::PastDate(draft.date));
                }
            }
            updated.push(Note::new(text, draft.date));
        }
    }

    sort_notes(&mut updated);
    Ok(updated)
}
