//! Key-value persistence for the selected color mode
//!
//! The provider keeps exactly one entry, [`MODE_STORAGE_KEY`]. A missing key
//! means "no saved mode".

use crate::error::ThemeError;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

/// Key the selected mode is stored under
pub const MODE_STORAGE_KEY: &str = "principlemd-theme-mode";

/// A string key-value store the provider persists the mode into.
pub trait ModeStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;

    fn remove(&self, key: &str) -> Result<(), ThemeError>;
}

/// In-process store; contents live as long as the value.
#[derive(Debug, Default)]
pub struct MemoryModeStore {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MemoryModeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a saved mode.
    pub fn with_mode(mode: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(MODE_STORAGE_KEY.to_string(), mode.into());
        store
    }
}

impl ModeStore for MemoryModeStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ThemeError> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

/// Store backed by a small TOML file of string entries.
///
/// Every operation re-reads the file, so several processes sharing a path see
/// each other's writes.
#[derive(Clone, Debug)]
pub struct FileModeStore {
    path: PathBuf,
}

impl FileModeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ThemeError {
        ThemeError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, ThemeError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        Ok(toml::from_str(&content)?)
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), ThemeError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        let content = toml::to_string(entries)?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}

impl ModeStore for FileModeStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), ThemeError> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
