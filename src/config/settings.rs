//! User settings for Spendbook
//!
//! Presentation-side preferences: the category set offered when adding
//! expenses, the currency symbol, and the date format. Stored as JSON next
//! to the user data file.

use serde::{Deserialize, Serialize};

use super::paths::SpendbookPaths;
use crate::error::SpendbookError;

/// User settings for Spendbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Categories offered when adding an expense
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Default currency symbol for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_categories() -> Vec<String> {
    ["Food", "Transportation", "Entertainment", "Utilities", "Others"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if missing
    pub fn load_or_create(paths: &SpendbookPaths) -> Result<Self, SpendbookError> {
        let path = paths.settings_file();

        if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| {
                SpendbookError::Config(format!("Failed to read settings: {}", e))
            })?;
            let settings = serde_json::from_str(&contents)
                .map_err(|e| SpendbookError::Config(format!("Failed to parse settings: {}", e)))?;
            Ok(settings)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendbookPaths) -> Result<(), SpendbookError> {
        paths.ensure_directories()?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SpendbookError::Config(format!("Failed to write settings: {}", e)))?;
        Ok(())
    }

    /// Check whether a category is in the configured set
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.categories.len(), 5);
        assert!(settings.has_category("Food"));
        assert!(!settings.has_category("food"));
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(paths.settings_file().exists());
        assert_eq!(settings.categories, Settings::default().categories);
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.categories.push("Travel".to_string());
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.has_category("Travel"));
    }
}
