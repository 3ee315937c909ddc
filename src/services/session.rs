//! Session management
//!
//! Owns the user directory for the process lifetime and the binding of the
//! current user. The binding is an index into the directory, so ledger
//! operations performed through the session mutate the stored user directly
//! and nothing diverges between the session's view and what gets persisted.

use crate::error::{SpendbookError, SpendbookResult};
use crate::models::{Directory, Expense, Ledger, User};
use crate::storage::UserStore;

/// Manages registration, authentication, and the current-user binding
pub struct SessionManager {
    store: UserStore,
    directory: Directory,
    /// Index of the current user into the directory; `None` when logged out
    current: Option<usize>,
}

impl SessionManager {
    /// Create a session manager over an already-loaded directory
    pub fn new(store: UserStore, directory: Directory) -> Self {
        Self {
            store,
            directory,
            current: None,
        }
    }

    /// Create a session manager by loading the directory from the store
    pub fn open(store: UserStore) -> SpendbookResult<Self> {
        let directory = store.load()?;
        Ok(Self::new(store, directory))
    }

    /// Register a new user and log them in
    ///
    /// Fails with a duplicate-user error when the username is already taken
    /// (case-sensitive exact match); neither the directory nor the session
    /// binding changes on failure.
    pub fn register(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> SpendbookResult<()> {
        let index = self.directory.insert(User::new(username, password))?;
        self.current = Some(index);
        Ok(())
    }

    /// Log in as an existing user
    ///
    /// Fails with an authentication error unless both username and password
    /// match exactly. Logging in while already logged in rebinds the session
    /// to the matching user.
    pub fn login(&mut self, username: &str, password: &str) -> SpendbookResult<()> {
        let index = self
            .directory
            .position_of(username)
            .filter(|&i| {
                self.directory
                    .get_at(i)
                    .is_some_and(|u| u.verify_password(password))
            })
            .ok_or(SpendbookError::Auth)?;

        self.current = Some(index);
        Ok(())
    }

    /// Log out the current user, persisting the directory
    ///
    /// Logging out while logged out is a no-op.
    pub fn logout(&mut self) -> SpendbookResult<()> {
        if self.current.is_some() {
            self.store.save(&self.directory)?;
            self.current = None;
        }
        Ok(())
    }

    /// Persist the directory without changing the session state
    ///
    /// Used for the shutdown flush.
    pub fn save(&self) -> SpendbookResult<()> {
        self.store.save(&self.directory)
    }

    /// Check whether a session is active
    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Check whether a username is registered
    pub fn user_exists(&self, username: &str) -> bool {
        self.directory.contains(username)
    }

    /// The current user, if logged in
    pub fn current_user(&self) -> Option<&User> {
        self.current.and_then(|i| self.directory.get_at(i))
    }

    /// The current user's username, if logged in
    pub fn current_username(&self) -> Option<&str> {
        self.current_user().map(|u| u.username.as_str())
    }

    /// Read-only view of the current user's expenses, if logged in
    pub fn expenses(&self) -> Option<&[Expense]> {
        self.current_user().map(|u| u.expenses.entries())
    }

    /// Mutable access to the current user's ledger
    ///
    /// All ledger mutation goes through here, directly into the directory's
    /// stored user.
    pub fn ledger_mut(&mut self) -> SpendbookResult<&mut Ledger> {
        let index = self.current.ok_or(SpendbookError::NotLoggedIn)?;
        self.directory
            .get_at_mut(index)
            .map(|u| &mut u.expenses)
            .ok_or(SpendbookError::NotLoggedIn)
    }

    /// Read-only view of the whole directory
    pub fn directory(&self) -> &Directory {
        &self.directory
    }
}
