//! Expense record model
//!
//! A single dated, categorized expense. Records are immutable once added;
//! the owning ledger replaces or removes whole records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;

/// Timestamp rendering used in the persisted file and in display output
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// What the expense was for (never empty once in a ledger)
    pub description: String,

    /// When the expense occurred, to second precision
    pub timestamp: NaiveDateTime,

    /// Free-form category label
    pub category: String,

    /// The expense value
    pub amount: Amount,
}

impl Expense {
    /// Create a new expense record
    pub fn new(
        description: impl Into<String>,
        timestamp: NaiveDateTime,
        category: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            description: description.into(),
            timestamp,
            category: category.into(),
            amount,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} | Category: {} | Amount: {}",
            self.description,
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.category,
            self.amount.format_with_symbol("$")
        )
    }
}
