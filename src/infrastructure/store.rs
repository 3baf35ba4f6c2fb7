//! Key-value storage of JSON documents

use crate::error::{AgendaError, Result};
use crate::infrastructure::Config;
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Name of the per-directory metadata folder
pub const AGENDA_DIR: &str = ".agenda";

/// Raw storage of JSON values under string keys.
///
/// `Ok(None)` means the key was never written; failures are reported as errors.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Value>>;

    fn set(&self, key: &str, value: &Value) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// Stores each key as `<root>/.agenda/store/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    pub root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        FileStore { root }
    }

    /// Discover the agenda root by walking up from the current directory.
    /// AGENDA_ROOT takes precedence when set.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("AGENDA_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_agenda_dir(&path) {
                return Ok(FileStore::new(path));
            } else {
                return Err(AgendaError::Config(format!(
                    "AGENDA_ROOT is set to '{}' but no {} directory found. \
                    Run 'agenda init' in that directory or unset AGENDA_ROOT.",
                    path.display(),
                    AGENDA_DIR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the agenda root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_agenda_dir(&current) {
                return Ok(FileStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(AgendaError::NotAgendaDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_agenda_dir(path: &Path) -> bool {
        path.join(AGENDA_DIR).is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_agenda_dir(&self.root)
    }

    /// Create the `.agenda` directory structure
    pub fn initialize(&self) -> Result<()> {
        let agenda_dir = self.root.join(AGENDA_DIR);

        if agenda_dir.exists() {
            return Err(AgendaError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(self.store_dir())?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn store_dir(&self) -> PathBuf {
        self.root.join(AGENDA_DIR).join("store")
    }

    /// File backing a key. Bytes outside `[A-Za-z0-9._@+-]` are percent-encoded.
    pub fn path_for_key(&self, key: &str) -> PathBuf {
        let mut name = String::with_capacity(key.len() + 5);
        for byte in key.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'.' | b'_' | b'@' | b'+' | b'-' => {
                    name.push(byte as char)
                }
                _ => name.push_str(&format!("%{:02X}", byte)),
            }
        }
        // A key of only dots would otherwise name "." or ".."
        if name.chars().all(|c| c == '.') {
            name = name.replace('.', "%2E");
        }
        name.push_str(".json");
        self.store_dir().join(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let path = self.path_for_key(key);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AgendaError::Io(e)),
        };

        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Write to a temp file in the same directory, then rename into place.
    fn set(&self, key: &str, value: &Value) -> Result<()> {
        let path = self.path_for_key(key);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string(value)?;
        let tmp_path = path.with_extension(format!("json.tmp-{}", std::process::id()));
        fs::write(&tmp_path, contents)?;

        if path.exists() {
            // rename does not overwrite on Windows
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        debug!("wrote {}", path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for_key(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AgendaError::Io(e)),
        }
    }
}

/// In-process store; clones share the same contents
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, Value>>> {
        self.entries
            .lock()
            .map_err(|_| AgendaError::Store("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &Value) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Adapter that never fails: errors are logged and read as "absent".
///
/// A failed write leaves the caller's in-memory state ahead of what was persisted.
#[derive(Debug, Clone)]
pub struct BestEffortStore<S> {
    inner: S,
}

impl<S: KeyValueStore> BestEffortStore<S> {
    pub fn new(inner: S) -> Self {
        BestEffortStore { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Stored value, or `None` when missing, `null`, or unreadable
    pub fn get(&self, key: &str) -> Option<Value> {
        match self.inner.get(key) {
            Ok(Some(Value::Null)) | Ok(None) => None,
            Ok(Some(value)) => Some(value),
            Err(e) => {
                error!("Error reading '{}': {}", key, e);
                None
            }
        }
    }

    /// Stored value decoded as `T`; a value of the wrong shape reads as `None`
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!("Ignoring malformed value under '{}': {}", key, e);
                None
            }
        }
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let result = serde_json::to_value(value)
            .map_err(AgendaError::from)
            .and_then(|value| self.inner.set(key, &value));

        if let Err(e) = result {
            error!("Error saving '{}': {}", key, e);
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.inner.remove(key) {
            error!("Error removing '{}': {}", key, e);
        }
    }
}
