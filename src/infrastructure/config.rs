//! Configuration management

use crate::domain::DEFAULT_GRACE_SECONDS;
use crate::error::{AgendaError, Result};
use crate::infrastructure::store::AGENDA_DIR;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_DATE_FORMAT: &str = "%a %d %b %H:%M";

/// Largest accepted grace window (one year)
pub const MAX_GRACE_SECONDS: i64 = 365 * 24 * 60 * 60;

/// True when chrono can format with `format` without error
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

fn default_grace_seconds() -> i64 {
    DEFAULT_GRACE_SECONDS
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// How far in the past a new note may be scheduled
    #[serde(default = "default_grace_seconds")]
    pub grace_seconds: i64,
    /// chrono format string used when listing notes
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            grace_seconds: default_grace_seconds(),
            date_format: default_date_format(),
            created: Utc::now(),
        }
    }

    /// Grace window, clamped to `0..=MAX_GRACE_SECONDS` for hand-edited files
    pub fn grace(&self) -> Duration {
        let seconds = self.grace_seconds.clamp(0, MAX_GRACE_SECONDS);
        Duration::try_seconds(seconds).unwrap_or_else(Duration::zero)
    }

    /// Configured listing format, or the default if it cannot be used
    pub fn display_format(&self) -> &str {
        if is_valid_date_format(&self.date_format) {
            &self.date_format
        } else {
            DEFAULT_DATE_FORMAT
        }
    }

    /// Load config from .agenda/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let agenda_dir = path.join(AGENDA_DIR);
        let config_path = agenda_dir.join("config.toml");

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if agenda_dir.is_dir() {
                    return Ok(Config::new());
                }
                return Err(AgendaError::NotAgendaDirectory(path.to_path_buf()));
            }
            Err(e) => return Err(AgendaError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| AgendaError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .agenda/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let agenda_dir = path.join(AGENDA_DIR);
        let config_path = agenda_dir.join("config.toml");

        if !agenda_dir.exists() {
            fs::create_dir(&agenda_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}
