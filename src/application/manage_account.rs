//! Registration, login and password reset use cases

use crate::domain::{Account, RememberedCredentials};
use crate::error::{AgendaError, Result};
use crate::infrastructure::{AccountRepository, KeyValueStore};
use log::info;

/// Service for the local account and its remembered login
pub struct AccountService<S> {
    repository: AccountRepository<S>,
}

impl<S: KeyValueStore> AccountService<S> {
    /// Create a new account service
    pub fn new(store: S) -> Self {
        AccountService {
            repository: AccountRepository::new(store),
        }
    }

    /// Replace the stored account and remember its credentials.
    ///
    /// Any previous account is overwritten; its notes stay under their own key.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<Account> {
        for (field, value) in [("name", name), ("email", email), ("password", password)] {
            if value.trim().is_empty() {
                return Err(AgendaError::MissingField(field));
            }
        }

        let account = Account::new(name, email, password);
        self.repository.save(&account);
        self.repository
            .save_remembered(Some(&RememberedCredentials::new(email, password)));

        info!("Registered account {}", email);
        Ok(account)
    }

    /// Check the credentials against the stored account.
    ///
    /// An unknown email and a wrong password fail the same way.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Account> {
        match self.repository.load() {
            Some(account) if account.matches(email, password) => Ok(account),
            _ => Err(AgendaError::InvalidCredentials),
        }
    }

    /// Authenticate, then remember the credentials or clear them
    pub fn login(&self, email: &str, password: &str, remember: bool) -> Result<Account> {
        let account = self.authenticate(email, password)?;

        if remember {
            self.remember(email, password);
        } else {
            self.repository.save_remembered(None);
        }

        info!("Logged in as {}", email);
        Ok(account)
    }

    /// Log in with any missing email or password taken from the remembered login.
    ///
    /// With `remember` unset, a login stays remembered once a record exists.
    /// Returns the account and whether the login is now remembered.
    pub fn login_with_remembered(
        &self,
        email: Option<&str>,
        password: Option<&str>,
        remember: Option<bool>,
    ) -> Result<(Account, bool)> {
        let saved = self.remembered();

        let email = email
            .or(saved.as_ref().map(|c| c.email.as_str()))
            .ok_or(AgendaError::MissingField("email"))?
            .to_string();
        let password = password
            .or(saved.as_ref().map(|c| c.password.as_str()))
            .ok_or(AgendaError::MissingField("password"))?
            .to_string();
        let remember = remember.unwrap_or(saved.is_some());

        let account = self.login(&email, &password, remember)?;
        Ok((account, remember))
    }

    pub fn logout(&self) {
        self.forget();
        info!("Logged out");
    }

    /// Overwrite the password of the stored account when the email matches
    pub fn reset_password(&self, email: &str, new_password: &str) -> Result<()> {
        let mut account = match self.repository.load() {
            Some(account) if account.email == email => account,
            _ => return Err(AgendaError::EmailNotRegistered(email.to_string())),
        };

        account.password = new_password.to_string();
        self.repository.save(&account);

        info!("Password reset for {}", email);
        Ok(())
    }

    pub fn remember(&self, email: &str, password: &str) {
        self.repository
            .save_remembered(Some(&RememberedCredentials::new(email, password)));
    }

    pub fn forget(&self) {
        self.repository.clear_remembered();
    }

    pub fn remembered(&self) -> Option<RememberedCredentials> {
        self.repository.load_remembered()
    }

    pub fn current(&self) -> Option<Account> {
        self.repository.load()
    }
}
