//! Per-user note lists

use crate::domain::note::StoredNote;
use crate::domain::Note;
use crate::infrastructure::store::{BestEffortStore, KeyValueStore};
use log::warn;
use serde_json::Value;

/// Storage key holding the notes of the account with this email
pub fn notes_key(email: &str) -> String {
    format!("notes_{}", email)
}

/// Reads and writes note lists keyed by account email
#[derive(Debug, Clone)]
pub struct NoteRepository<S> {
    store: BestEffortStore<S>,
}

impl<S: KeyValueStore> NoteRepository<S> {
    pub fn new(store: S) -> Self {
        NoteRepository {
            store: BestEffortStore::new(store),
        }
    }

    /// Stored notes for `email`, in stored order.
    ///
    /// Records that cannot be read are skipped. Records written without an
    /// id are given one and the list is written back so the id sticks.
    pub fn list(&self, email: &str) -> Vec<Note> {
        let key = notes_key(email);

        let records = match self.store.get(&key) {
            None => return Vec::new(),
            Some(Value::Array(records)) => records,
            Some(other) => {
                warn!("Ignoring '{}': expected a list, found {}", key, kind_of(&other));
                return Vec::new();
            }
        };

        let mut notes = Vec::with_capacity(records.len());
        let mut repaired = false;
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<StoredNote>(record) {
                Ok(stored) => {
                    let (note, generated) = stored.into_note();
                    repaired |= generated;
                    notes.push(note);
                }
                Err(e) => warn!("Skipping unreadable note {} in '{}': {}", index, key, e),
            }
        }

        if repaired {
            warn!("Assigned ids to notes in '{}'", key);
            self.replace_all(email, &notes);
        }

        notes
    }

    /// Overwrite the stored list unconditionally
    pub fn replace_all(&self, email: &str, notes: &[Note]) {
        self.store.set(&notes_key(email), notes);
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
