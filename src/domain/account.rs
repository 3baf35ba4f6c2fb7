//! Local account records

use serde::{Deserialize, Serialize};

/// The single locally stored user.
///
/// The password is kept as plain text and compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Account {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive match on both fields
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// Login fields cached for auto-fill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RememberedCredentials {
    pub email: String,
    pub password: String,
}

impl RememberedCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        RememberedCredentials {
            email: email.into(),
            password: password.into(),
        }
    }
}
