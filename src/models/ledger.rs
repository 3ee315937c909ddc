//! Expense ledger
//!
//! The ordered sequence of one user's expense records, with the mutation and
//! query operations the rest of the application goes through. Positions are
//! the only record identity, so removal shifts later entries down.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{SpendbookError, SpendbookResult};

use super::amount::Amount;
use super::expense::Expense;

/// One user's ordered expense sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from already-validated records, preserving their order
    ///
    /// Used by the persistence codec, which applies its own line-level
    /// filtering instead of add-time validation.
    pub fn from_entries(entries: Vec<Expense>) -> Self {
        Self { entries }
    }

    /// Append a new expense record
    ///
    /// Fails with a validation error if the description is empty; the ledger
    /// is unchanged on failure. The amount is already typed here — lenient
    /// coercion of unparsable text happens at the input boundary
    /// (`Amount::parse_lenient`).
    pub fn add(
        &mut self,
        description: impl Into<String>,
        timestamp: NaiveDateTime,
        category: impl Into<String>,
        amount: Amount,
    ) -> SpendbookResult<()> {
        let description = description.into();
        if description.is_empty() {
            return Err(SpendbookError::Validation(
                "Expense description cannot be empty".into(),
            ));
        }

        self.entries
            .push(Expense::new(description, timestamp, category, amount));
        Ok(())
    }

    /// Remove the expense at the given position
    ///
    /// Later entries shift down by one. Fails without mutating if the
    /// position is at or past the end.
    pub fn remove_at(&mut self, position: usize) -> SpendbookResult<Expense> {
        if position >= self.entries.len() {
            return Err(SpendbookError::OutOfRange {
                position,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(position))
    }

    /// Sort entries ascending by timestamp
    ///
    /// The sort is stable: entries with equal timestamps keep their relative
    /// order. Sorting an already-sorted ledger is observationally a no-op.
    pub fn sort_by_timestamp(&mut self) {
        self.entries.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    }

    /// Sum of all entry amounts; zero for an empty ledger
    pub fn total(&self) -> Amount {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the ledger has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at a position, if any
    pub fn get(&self, position: usize) -> Option<&Expense> {
        self.entries.get(position)
    }

    /// Read-only view of the entries in order
    pub fn entries(&self) -> &[Expense] {
        &self.entries
    }

    /// Iterate over the entries in order
    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
