//! agenda - Scheduled personal notes
//!
//! Keeps a single local account and that account's date-ordered notes in a
//! small JSON key-value store next to the working directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::AgendaError;
