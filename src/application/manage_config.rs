//! Config management use case

use crate::error::{AgendaError, Result};
use crate::infrastructure::config::{is_valid_date_format, MAX_GRACE_SECONDS};
use crate::infrastructure::{Config, FileStore};

/// Service for managing agenda configuration
pub struct ConfigService {
    store: FileStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: FileStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "grace_seconds" => Ok(config.grace_seconds.to_string()),
            "date_format" => Ok(config.date_format),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(AgendaError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: grace_seconds, date_format, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "grace_seconds" => {
                let seconds: i64 = value.trim().parse().map_err(|_| {
                    AgendaError::Config(format!(
                        "Invalid grace_seconds: '{}' (expected a whole number of seconds)",
                        value
                    ))
                })?;
                if !(0..=MAX_GRACE_SECONDS).contains(&seconds) {
                    return Err(AgendaError::Config(format!(
                        "grace_seconds must be between 0 and {}",
                        MAX_GRACE_SECONDS
                    )));
                }
                config.grace_seconds = seconds;
            }
            "date_format" => {
                if value.trim().is_empty() || !is_valid_date_format(value) {
                    return Err(AgendaError::Config(format!(
                        "Invalid date_format: '{}'",
                        value
                    )));
                }
                config.date_format = value.to_string();
            }
            "created" => {
                return Err(AgendaError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(AgendaError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: grace_seconds, date_format",
                    key
                )));
            }
        }

        self.store.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let store = init(temp.path()).unwrap();
        (temp, ConfigService::new(store))
    }

    #[test]
    fn test_get_defaults() {
        let (_temp, service) = service();
        assert_eq!(service.get("grace_seconds").unwrap(), "60");
        assert_eq!(service.get("date_format").unwrap(), "%a %d %b %H:%M");
        assert!(service.get("created").is_ok());
    }

    #[test]
    fn test_set_and_get() {
        let (_temp, service) = service();
        service.set("grace_seconds", "120").unwrap();
        service.set("date_format", "%Y-%m-%d %H:%M").unwrap();

        assert_eq!(service.get("grace_seconds").unwrap(), "120");
        assert_eq!(service.get("date_format").unwrap(), "%Y-%m-%d %H:%M");
        assert_eq!(service.list().unwrap().grace_seconds, 120);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let (_temp, service) = service();
        assert!(service.set("grace_seconds", "soon").is_err());
        assert!(service.set("grace_seconds", "-5").is_err());
        assert!(service.set("grace_seconds", "10000000000000").is_err());
        assert!(service.set("date_format", "  ").is_err());
        assert!(service.set("date_format", "%Q").is_err());
        assert!(service.set("created", "2020-01-01T00:00:00Z").is_err());
        assert!(service.set("colour", "blue").is_err());
    }

    #[test]
    fn test_grace_seconds_upper_bound() {
        let (_temp, service) = service();
        service.set("grace_seconds", "31536000").unwrap();
        assert_eq!(service.get("grace_seconds").unwrap(), "31536000");

        match service.set("grace_seconds", "31536001") {
            Err(AgendaError::Config(msg)) => assert!(msg.contains("between 0 and 31536000")),
            other => panic!("Expected Config error, got {:?}", other),
        }
        assert_eq!(service.get("grace_seconds").unwrap(), "31536000");
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = service();
        match service.get("colour") {
            Err(AgendaError::Config(msg)) => assert!(msg.contains("Unknown config key")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
