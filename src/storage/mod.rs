//! Storage layer for Spendbook
//!
//! The text codec defining the on-disk representation, and the file store
//! that performs the load/save boundary with atomic writes.

pub mod codec;
pub mod store;

pub use codec::{decode, encode};
pub use store::UserStore;
