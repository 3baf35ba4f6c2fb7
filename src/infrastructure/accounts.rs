//! Account and remembered-credentials records

use crate::domain::{Account, RememberedCredentials};
use crate::infrastructure::store::{BestEffortStore, KeyValueStore};

pub const ACCOUNT_KEY: &str = "user";
pub const REMEMBERED_KEY: &str = "rememberedUser";

/// Reads and writes the single account slot
#[derive(Debug, Clone)]
pub struct AccountRepository<S> {
    store: BestEffortStore<S>,
}

impl<S: KeyValueStore> AccountRepository<S> {
    pub fn new(store: S) -> Self {
        AccountRepository {
            store: BestEffortStore::new(store),
        }
    }

    pub fn load(&self) -> Option<Account> {
        self.store.get_as(ACCOUNT_KEY)
    }

    /// Overwrite the account slot
    pub fn save(&self, account: &Account) {
        self.store.set(ACCOUNT_KEY, account);
    }

    pub fn load_remembered(&self) -> Option<RememberedCredentials> {
        self.store.get_as(REMEMBERED_KEY)
    }

    /// Write the remembered record; `None` is stored as `null`
    pub fn save_remembered(&self, credentials: Option<&RememberedCredentials>) {
        self.store.set(REMEMBERED_KEY, &credentials);
    }

    pub fn clear_remembered(&self) {
        self.store.remove(REMEMBERED_KEY);
    }
}
