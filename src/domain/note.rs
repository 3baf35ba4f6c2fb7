//! Note records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A scheduled, completable note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub text: String,
    pub date: DateTime<Utc>,
    pub completed: bool,
}

impl Note {
    /// Create a fresh, not yet completed note
    pub fn new(text: impl Into<String>, date: DateTime<Utc>) -> Self {
        Note {
            id: Uuid::new_v4(),
            text: text.into(),
            date,
            completed: false,
        }
    }

    /// Short id form shown in listings
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

/// User input for a note that is about to be created or edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub text: String,
    pub date: DateTime<Utc>,
}

impl NoteDraft {
    pub fn new(text: impl Into<String>, date: DateTime<Utc>) -> Self {
        NoteDraft {
            text: text.into(),
            date,
        }
    }
}

/// Shape of a note as it may appear in older stored data.
///
/// `id` and `completed` were not always written. `completed` may be `null` or
/// a non-boolean value, which is read by truthiness.
#[derive(Debug, Deserialize)]
pub(crate) struct StoredNote {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub text: String,
    pub date: DateTime<Utc>,
    #[serde(default, deserialize_with = "truthy")]
    pub completed: bool,
}

/// `false`, `null`, `0`, `""` are false; every other value is true
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

impl StoredNote {
    /// Convert into a `Note`, reporting whether an id had to be generated.
    pub fn into_note(self) -> (Note, bool) {
        let generated = self.id.is_none();
        let note = Note {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            text: self.text,
            date: self.date,
            completed: self.completed,
        };
        (note, generated)
    }
}
