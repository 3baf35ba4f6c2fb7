//! Infrastructure layer - External I/O and persistence

pub mod accounts;
pub mod config;
pub mod notes;
pub mod store;

pub use accounts::AccountRepository;
pub use config::Config;
pub use notes::NoteRepository;
pub use store::{BestEffortStore, FileStore, KeyValueStore, MemoryStore};
