//! User file store with atomic writes
//!
//! The single file boundary of the crate: loads the directory from the flat
//! text file at startup and writes it back on logout/shutdown. Writes go to
//! a temp file in the same directory followed by a rename, so the stored
//! file is either the old or the new contents, never a partial write.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::SpendbookError;
use crate::models::Directory;

use super::codec;

/// File-backed storage for the user directory
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the directory from the backing file
    ///
    /// A missing file yields an empty directory; malformed records within an
    /// existing file are dropped by the codec rather than failing the load.
    pub fn load(&self) -> Result<Directory, SpendbookError> {
        if !self.path.exists() {
            return Ok(Directory::new());
        }

        let text = fs::read_to_string(&self.path).map_err(|e| {
            SpendbookError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        Ok(codec::decode(&text))
    }

    /// Write the directory to the backing file atomically
    pub fn save(&self, directory: &Directory) -> Result<(), SpendbookError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    SpendbookError::Storage(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        // Temp file in the same directory (required for an atomic rename)
        let temp_path = self.path.with_extension("txt.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| SpendbookError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(codec::encode(directory).as_bytes())
            .map_err(|e| SpendbookError::Storage(format!("Failed to write data: {}", e)))?;

        writer
            .flush()
            .map_err(|e| SpendbookError::Storage(format!("Failed to flush data: {}", e)))?;

        // Sync to disk before rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| SpendbookError::Storage(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            // Try to clean up the temp file if the rename fails
            let _ = fs::remove_file(&temp_path);
            SpendbookError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, User};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_directory() -> Directory {
        let mut dir = Directory::new();
        let mut alice = User::new("alice", "p1");
        alice
            .expenses
            .add(
                "Lunch",
                NaiveDate::from_ymd_opt(2025, 1, 3)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap(),
                "Food",
                Amount::from_cents(1250),
            )
            .unwrap();
        dir.insert(alice).unwrap();
        dir
    }

    #[test]
    fn test_load_missing_file_yields_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = UserStore::new(temp_dir.path().join("userdata.txt"));

        let dir = store.load().unwrap();
        assert!(dir.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = UserStore::new(temp_dir.path().join("userdata.txt"));

        let dir = sample_directory();
        store.save(&dir).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, dir);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("userdata.txt");
        let store = UserStore::new(&path);

        store.save(&sample_directory()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("userdata.txt.tmp").exists());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("userdata.txt");
        let store = UserStore::new(&path);

        store.save(&sample_directory()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("userdata.txt");
        fs::write(&path, "").unwrap();

        let dir = UserStore::new(&path).load().unwrap();
        assert!(dir.is_empty());
    }
}
