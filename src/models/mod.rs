//! Core data models for Spendbook
//!
//! This module contains the data structures that represent the expense
//! tracking domain: amounts, expense records, per-user ledgers, and the
//! directory of registered users.

pub mod amount;
pub mod directory;
pub mod expense;
pub mod ledger;
pub mod user;

pub use amount::{Amount, AmountParseError};
pub use directory::Directory;
pub use expense::{Expense, TIMESTAMP_FORMAT};
pub use ledger::Ledger;
pub use user::User;
