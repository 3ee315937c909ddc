//! Path management for Spendbook
//!
//! Resolves where the settings file and the persisted user file live.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDBOOK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/spendbook` or `~/.config/spendbook`
//! 3. Windows: `%APPDATA%\spendbook`

use std::path::PathBuf;

use crate::error::SpendbookError;

/// Name of the persisted user file within the data directory
pub const USER_DATA_FILE: &str = "userdata.txt";

/// Manages all paths used by Spendbook
#[derive(Debug, Clone)]
pub struct SpendbookPaths {
    /// Base directory for all Spendbook data
    base_dir: PathBuf,
}

impl SpendbookPaths {
    /// Create a new SpendbookPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SpendbookError> {
        let base_dir = if let Ok(custom) = std::env::var("SPENDBOOK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SpendbookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/spendbook/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted user file
    pub fn user_data_file(&self) -> PathBuf {
        self.base_dir.join(USER_DATA_FILE)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SpendbookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendbookError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SpendbookError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| SpendbookError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("spendbook"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SpendbookError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SpendbookError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("spendbook"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.user_data_file(),
            temp_dir.path().join("userdata.txt")
        );
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested");
        let paths = SpendbookPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
