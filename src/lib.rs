//! Spendbook - Multi-user flat-file expense tracker
//!
//! This library provides the core functionality for Spendbook: per-user
//! expense ledgers with registration and login, persisted across runs in a
//! flat text file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (amounts, expenses, ledgers, users)
//! - `storage`: The text codec and the file store
//! - `services`: Session management over the user directory
//! - `cli` / `display`: Command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use spendbook::services::SessionManager;
//! use spendbook::storage::UserStore;
//!
//! let store = UserStore::new("userdata.txt");
//! let mut session = SessionManager::open(store)?;
//! session.register("alice", "p1")?;
//! session.logout()?; // persists
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{SpendbookError, SpendbookResult};
