//! Naming a note on the command line

use crate::domain::Note;
use crate::error::{AgendaError, Result};
use std::str::FromStr;

const MIN_ID_PREFIX: usize = 4;

/// A note target: its 1-based position in the listing, or an id prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteRef {
    Position(usize),
    IdPrefix(String),
    /// Digits long enough to be either; an id match wins over the position
    PositionOrId(usize, String),
}

impl FromStr for NoteRef {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            if trimmed.len() >= MIN_ID_PREFIX {
                // Out-of-range numbers (usize overflow included) can still be a short id
                let position = trimmed.parse::<usize>().unwrap_or(0);
                return Ok(NoteRef::PositionOrId(position, trimmed.to_string()));
            }
            return match trimmed.parse::<usize>() {
                Ok(position) if position > 0 => Ok(NoteRef::Position(position)),
                _ => Err(AgendaError::NoteNotFound(s.to_string())),
            };
        }

        let prefix: String = trimmed
            .chars()
            .filter(|c| *c != '-')
            .collect::<String>()
            .to_lowercase();
        if prefix.len() < MIN_ID_PREFIX || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AgendaError::NoteNotFound(s.to_string()));
        }

        Ok(NoteRef::IdPrefix(prefix))
    }
}

impl NoteRef {
    /// Find the index this reference points at in `notes`
    pub fn resolve(&self, notes: &[Note]) -> Result<usize> {
        match self {
            NoteRef::Position(position) => position_index(*position, notes)
                .ok_or_else(|| AgendaError::NoteNotFound(position.to_string())),
            NoteRef::IdPrefix(prefix) => match_id_prefix(prefix, notes)?
                .ok_or_else(|| AgendaError::NoteNotFound(prefix.clone())),
            NoteRef::PositionOrId(position, digits) => match match_id_prefix(digits, notes)? {
                Some(index) => Ok(index),
                None => position_index(*position, notes)
                    .ok_or_else(|| AgendaError::NoteNotFound(digits.clone())),
            },
        }
    }
}

fn position_index(position: usize, notes: &[Note]) -> Option<usize> {
    (position > 0 && position <= notes.len()).then(|| position - 1)
}

/// The single note whose id starts with `prefix`; several matches are an error
fn match_id_prefix(prefix: &str, notes: &[Note]) -> Result<Option<usize>> {
    let mut matches = notes
        .iter()
        .enumerate()
        .filter(|(_, note)| note.id.simple().to_string().starts_with(prefix));

    match (matches.next(), matches.next()) {
        (Some((index, _)), None) => Ok(Some(index)),
        (Some(_), Some(_)) => Err(AgendaError::NoteNotFound(format!(
            "{} (ambiguous id prefix)",
            prefix
        ))),
        (None, _) => Ok(None),
    }
}
