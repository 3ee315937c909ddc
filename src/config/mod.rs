//! Configuration and path management for Spendbook

pub mod paths;
pub mod settings;

pub use paths::SpendbookPaths;
pub use settings::Settings;
