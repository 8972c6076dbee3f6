//! JSON-file-backed persistence for the ordered list of app records.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::engine::model::AppRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read app store at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write app store at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode app store: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("app store at {path} is not valid JSON: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("app store must contain a JSON array")]
    NotAnArray,
    #[error("app at index {0} must have non-empty 'name', 'directory', and 'command' fields")]
    InvalidRecord(usize),
    #[error("an app named '{0}' already exists")]
    DuplicateName(String),
}

/// Load/save of [`AppRecord`]s from a single JSON file.
///
/// The caller holds the one authoritative in-memory list and replaces it
/// wholesale with the list returned by [`AppStore::add`] / [`AppStore::remove`];
/// the file is rewritten synchronously on every mutation.
pub struct AppStore {
    path: PathBuf,
}

impl AppStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all records, creating an empty store file if none exists yet.
    /// An empty file also yields an empty list.
    pub fn load(&self) -> Result<Vec<AppRecord>, StoreError> {
        if !self.path.exists() {
            debug!("store file {} missing, creating it empty", self.path.display());
            self.save(&[])?;
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let raw: Value = serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        let items = raw.as_array().ok_or(StoreError::NotAnArray)?;

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let record: AppRecord = serde_json::from_value(item.clone())
                .map_err(|_| StoreError::InvalidRecord(index))?;
            if !record.is_complete() {
                return Err(StoreError::InvalidRecord(index));
            }
            records.push(record);
        }
        debug!("loaded {} app(s) from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Overwrites the store file with the full list, pretty-printed.
    pub fn save(&self, records: &[AppRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        let mut content = serde_json::to_string_pretty(records)?;
        content.push('\n');
        fs::write(&self.path, content).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!("saved {} app(s) to {}", records.len(), self.path.display());
        Ok(())
    }

    /// Appends `candidate` and persists. Rejects a name that already exists
    /// (case-sensitive exact match) without touching the file.
    pub fn add(
        &self,
        records: &[AppRecord],
        candidate: AppRecord,
    ) -> Result<Vec<AppRecord>, StoreError> {
        if records.iter().any(|r| r.name == candidate.name) {
            return Err(StoreError::DuplicateName(candidate.name));
        }
        let mut next = records.to_vec();
        next.push(candidate);
        self.save(&next)?;
        Ok(next)
    }

    /// Removes the first record equal to `target` (full field equality) and
    /// persists. Removing a record that is not present is a no-op.
    pub fn remove(
        &self,
        records: &[AppRecord],
        target: &AppRecord,
    ) -> Result<Vec<AppRecord>, StoreError> {
        let mut next = records.to_vec();
        if let Some(position) = next.iter().position(|r| r == target) {
            next.remove(position);
            self.save(&next)?;
        }
        Ok(next)
    }
}
