//! Initialize agenda use case

use crate::error::Result;
use crate::infrastructure::{Config, FileStore};
use log::info;
use std::fs;
use std::path::Path;

/// Initialize a new agenda at the specified path.
pub fn init(path: &Path) -> Result<FileStore> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileStore::new(path.to_path_buf());
    store.initialize()?;
    store.save_config(&Config::new())?;

    info!("Initialized agenda at {}", path.display());
    Ok(store)
}
