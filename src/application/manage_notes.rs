//! Note use cases for the registered account

use crate::domain::{reconcile, sort_notes, Account, Note, NoteDraft, NoteRef};
use crate::error::{AgendaError, Result};
use crate::infrastructure::{AccountRepository, Config, KeyValueStore, NoteRepository};
use chrono::{DateTime, Duration, Utc};
use log::info;

/// Service for listing and changing the account's notes
pub struct NoteService<S> {
    accounts: AccountRepository<S>,
    notes: NoteRepository<S>,
    grace: Duration,
}

impl<S: KeyValueStore + Clone> NoteService<S> {
    /// Create a new note service
    pub fn new(store: S, config: &Config) -> Self {
        NoteService {
            accounts: AccountRepository::new(store.clone()),
            notes: NoteRepository::new(store),
            grace: config.grace(),
        }
    }

    /// The account whose notes are managed
    pub fn account(&self) -> Result<Account> {
        self.accounts.load().ok_or(AgendaError::NoAccount)
    }

    pub fn list(&self) -> Result<Vec<Note>> {
        let account = self.account()?;
        Ok(self.notes.list(&account.email))
    }

    /// Create a note scheduled at `draft.date`
    pub fn add(&self, draft: NoteDraft) -> Result<Vec<Note>> {
        self.save(draft, None, Utc::now())
    }

    /// Change a note's text and/or date; omitted fields keep their value
    pub fn edit(
        &self,
        target: &NoteRef,
        text: Option<String>,
        date: Option<DateTime<Utc>>,
    ) -> Result<Vec<Note>> {
        let current = self.list()?;
        let index = target.resolve(&current)?;
        let existing = &current[index];

        let draft = NoteDraft::new(
            text.unwrap_or_else(|| existing.text.clone()),
            date.unwrap_or(existing.date),
        );
        self.save(draft, Some(index), Utc::now())
    }

    /// Validate, merge and persist. Returns the sorted list that was written.
    pub fn save(
        &self,
        draft: NoteDraft,
        target: Option<usize>,
        now: DateTime<Utc>,
    ) -> Result<Vec<Note>> {
        let account = self.account()?;
        let current = self.notes.list(&account.email);

        let updated = reconcile(&current, draft, target, now, self.grace)?;
        self.notes.replace_all(&account.email, &updated);

        match target {
            Some(index) => info!("Updated note {} for {}", index + 1, account.email),
            None => info!("Added note for {}", account.email),
        }
        Ok(updated)
    }

    /// Flip the completed flag. Returns the note after the change.
    pub fn toggle(&self, target: &NoteRef) -> Result<Note> {
        let account = self.account()?;
        let mut notes = self.notes.list(&account.email);
        let index = target.resolve(&notes)?;

        notes[index].completed = !notes[index].completed;
        let toggled = notes[index].clone();
        self.persist(&account, notes);

        Ok(toggled)
    }

    /// Remove a note. Returns the removed note.
    pub fn delete(&self, target: &NoteRef) -> Result<Note> {
        let account = self.account()?;
        let mut notes = self.notes.list(&account.email);
        let index = target.resolve(&notes)?;

        let removed = notes.remove(index);
        self.persist(&account, notes);

        info!("Deleted note from {}", account.email);
        Ok(removed)
    }

    fn persist(&self, account: &Account, mut notes: Vec<Note>) {
        sort_notes(&mut notes);
        self.notes.replace_all(&account.email, &notes);
    }
}
