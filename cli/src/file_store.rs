//! Session persistence for the CLI: a small JSON object on disk.
//!
//! The file holds the same `token` / `user` keys the browser keeps in
//! `localStorage`. Every write rewrites the whole file and creates its parent
//! directory on demand.

#[cfg(test)]
#[path = "file_store_test.rs"]
mod file_store_test;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use market::{KeyValueStore, StoreError};

use crate::error::CliError;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open `path`, treating a missing or unparsable file as empty. A corrupt
    /// file reads as signed out and is replaced on the next write.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::SessionFile`] if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CliError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable session file");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(CliError::SessionFile { path, source }),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError(format!("{}: {e}", parent.display())))?;
        }
        let raw = serde_json::to_string_pretty(&self.entries).map_err(|e| StoreError(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| StoreError(format!("{}: {e}", self.path.display())))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_none() && !self.path.exists() {
            return Ok(());
        }
        self.persist()
    }
}
