//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod commands;

pub use commands::{
    handle_add, handle_categories, handle_config, handle_list, handle_register, handle_remove,
    handle_sort, handle_total, AddArgs,
};
