//! Domain layer - Business logic and domain models

pub mod account;
pub mod note;
pub mod note_ref;
pub mod reconcile;
pub mod when;

pub use account::{Account, RememberedCredentials};
pub use note::{Note, NoteDraft};
pub use note_ref::NoteRef;
pub use reconcile::{reconcile, sort_notes, DEFAULT_GRACE_SECONDS};
pub use when::{DayReference, When};
