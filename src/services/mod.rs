//! Service layer for Spendbook
//!
//! Business logic on top of the models and storage layers. Currently this is
//! the session manager, which owns the directory and current-user binding.

pub mod session;

pub use session::SessionManager;
