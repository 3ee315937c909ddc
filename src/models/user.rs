//! User model
//!
//! A registered user: credentials plus the user's expense ledger. The
//! credential check lives behind `verify_password` so the comparison scheme
//! can change (e.g. to a hashed one) without touching call sites.

use serde::{Deserialize, Serialize};

use super::ledger::Ledger;

/// A registered user and their expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique key across the directory (case-sensitive)
    pub username: String,

    /// Stored credential (plain text, matching the persisted format)
    pub password: String,

    /// The user's expense ledger
    #[serde(default)]
    pub expenses: Ledger,
}

impl User {
    /// Create a new user with an empty ledger
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            expenses: Ledger::new(),
        }
    }

    /// Check a login attempt against the stored credential
    ///
    /// Exact plain-text equality. This is the single credential comparison
    /// seam in the crate.
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
