//! User directory
//!
//! The full in-memory set of registered users, keyed by username. Iteration
//! order is insertion order (load order, then registration order), which is
//! also the order the codec persists users in. Username uniqueness is a hard
//! invariant enforced at insert time.

use serde::{Deserialize, Serialize};

use crate::error::{SpendbookError, SpendbookResult};

use super::user::User;

/// The set of all registered users
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directory {
    users: Vec<User>,
}

impl Directory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a username is registered (case-sensitive exact match)
    pub fn contains(&self, username: &str) -> bool {
        self.users.iter().any(|u| u.username == username)
    }

    /// Look up a user by username
    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Find the position of a user by username
    pub fn position_of(&self, username: &str) -> Option<usize> {
        self.users.iter().position(|u| u.username == username)
    }

    /// Get the user at a position
    pub fn get_at(&self, index: usize) -> Option<&User> {
        self.users.get(index)
    }

    /// Get a mutable reference to the user at a position
    pub fn get_at_mut(&mut self, index: usize) -> Option<&mut User> {
        self.users.get_mut(index)
    }

    /// Add a user, enforcing username uniqueness
    ///
    /// On success returns the new user's position. The directory is unchanged
    /// when the username is already taken.
    pub fn insert(&mut self, user: User) -> SpendbookResult<usize> {
        if self.contains(&user.username) {
            return Err(SpendbookError::DuplicateUser {
                username: user.username,
            });
        }
        self.users.push(user);
        Ok(self.users.len() - 1)
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if no users are registered
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterate over users in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, User> {
        self.users.iter()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a User;
    type IntoIter = std::slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.iter()
    }
}
