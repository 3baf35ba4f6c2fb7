//! Error types for agenda

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for agenda application
#[derive(Debug, Error)]
pub enum AgendaError {
    #[error("Not an agenda directory: {0}")]
    NotAgendaDirectory(PathBuf),

    #[error("Note text cannot be empty")]
    EmptyNote,

    #[error("Cannot schedule a new note in the past: {0}")]
    PastDate(DateTime<Utc>),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email not registered: {0}")]
    EmailNotRegistered(String),

    #[error("No account registered")]
    NoAccount,

    #[error("Field is required: {0}")]
    MissingField(&'static str),

    #[error("Invalid date/time: {0}")]
    InvalidWhen(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl AgendaError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AgendaError::NotAgendaDirectory(_) => 2,
            AgendaError::EmptyNote | AgendaError::PastDate(_) | AgendaError::InvalidWhen(_) => 3,
            AgendaError::InvalidCredentials
            | AgendaError::EmailNotRegistered(_)
            | AgendaError::NoAccount
            | AgendaError::MissingField(_) => 4,
            AgendaError::NoteNotFound(_) => 5,
            _ => 1,
        }
    }

    /// True for errors caused by user input rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AgendaError::EmptyNote
                | AgendaError::PastDate(_)
                | AgendaError::InvalidCredentials
                | AgendaError::EmailNotRegistered(_)
                | AgendaError::NoAccount
                | AgendaError::MissingField(_)
                | AgendaError::InvalidWhen(_)
                | AgendaError::NoteNotFound(_)
        )
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            AgendaError::NotAgendaDirectory(path) => {
                format!(
                    "Not an agenda directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'agenda init' in this directory to create a new agenda\n\
                    • Navigate to an existing agenda directory\n\
                    • Set AGENDA_ROOT environment variable to your agenda path",
                    path.display()
                )
            }
            AgendaError::NoAccount => "No account registered\n\n\
                Suggestions:\n\
                • Create one with: agenda register --name <NAME> --email <EMAIL> --password <PASSWORD>"
                .to_string(),
            AgendaError::InvalidCredentials => "Invalid email or password\n\n\
                Suggestions:\n\
                • Email and password are case-sensitive\n\
                • Forgot it? agenda reset-password --email <EMAIL> --new-password <PASSWORD>"
                .to_string(),
            AgendaError::InvalidWhen(input) => {
                format!(
                    "Invalid date/time: '{}'\n\n\
                    Valid forms:\n\
                    • today, tomorrow, yesterday, monday, next friday, last monday\n\
                    • any of the above followed by HH:MM (e.g., tomorrow 09:30)\n\
                    • YYYY-MM-DD or YYYY-MM-DD HH:MM (e.g., 2025-08-25 14:30)\n\
                    • RFC 3339 (e.g., 2025-08-25T14:30:00Z)",
                    input
                )
            }
            AgendaError::NoteNotFound(target) => {
                format!(
                    "Note not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'agenda list' to see note positions and ids\n\
                    • Positions start at 1; id prefixes need at least 4 characters",
                    target
                )
            }
            AgendaError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: agenda config grace_seconds 120",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using AgendaError
pub type Result<T> = std::result::Result<T, AgendaError>;
