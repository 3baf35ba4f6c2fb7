//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_account;
pub mod manage_config;
pub mod manage_notes;

pub use manage_account::AccountService;
pub use manage_config::ConfigService;
pub use manage_notes::NoteService;
