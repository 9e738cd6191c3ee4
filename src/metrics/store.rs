//! Key-value persistence for score bookkeeping
//!
//! The tracker talks to a small get/set capability so the storage mechanism
//! stays swappable: a JSON file for normal play, a HashMap for tests and
//! `--no-persist` runs. Values are stored as strings and missing keys are
//! not an error.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// String key-value storage used by [`ScoreTracker`](super::ScoreTracker)
pub trait ScoreStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, nothing survives the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A JSON object file, written through on every `set`
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open a store at `path`, creating parent directories if needed.
    /// A missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        let entries = if path.exists() {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read score file {:?}", path))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Score file {:?} is not a JSON object", path))?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize score entries")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write score file {:?}", self.path))
    }
}

impl ScoreStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();

        assert_eq!(store.get("high_score").unwrap(), None);
        store.set("high_score", "120").unwrap();
        assert_eq!(store.get("high_score").unwrap(), Some("120".to_string()));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");

        {
            let mut store = JsonFileStore::open(&path).unwrap();
            assert_eq!(store.get("games_played").unwrap(), None);
            store.set("games_played", "3").unwrap();
            store.set("high_score", "90").unwrap();
        }

        // A fresh handle sees the persisted values
        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("games_played").unwrap(), Some("3".to_string()));
        assert_eq!(store.get("high_score").unwrap(), Some("90".to_string()));
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/scores.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("high_score", "10").unwrap();

        assert!(path.exists());
    }
}
