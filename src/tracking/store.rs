//! Persistent storage for tracked-key records.
//!
//! Each API key gets its own JSON file named by its [`KeyIdentity`], so keys
//! never contend with each other. The store is a best-effort local cache:
//! a missing, unreadable, or corrupt record loads as a fresh empty one and
//! never blocks the remote query.

use super::types::TrackedRecord;
use crate::data_paths;
use crate::identity::{KeyIdentity, TrackedKey};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Per-key JSON record store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct RecordStore {
    data_dir: PathBuf,
}

impl RecordStore {
    /// Opens a store at `data_dir`, creating the directory if possible.
    ///
    /// A directory that can't be created is only logged; loads then fall back
    /// to fresh records and saves report the error.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        if let Err(e) = data_paths::ensure_data_dir(&data_dir) {
            tracing::warn!("{:#}", e);
        }
        Self { data_dir }
    }

    /// Directory holding the per-key record files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Loads the record for a key, or a fresh one if it is missing or unreadable.
    pub fn load(&self, key: &TrackedKey) -> TrackedRecord {
        if let Err(e) = data_paths::ensure_data_dir(&self.data_dir) {
            tracing::warn!("{:#}", e);
        }

        let path = data_paths::record_path(&self.data_dir, &key.identity);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No record for {}, starting fresh", key.identity);
                return TrackedRecord::new(&key.preview);
            }
            Err(e) => {
                tracing::warn!("Failed to read record {}: {}", path.display(), e);
                return TrackedRecord::new(&key.preview);
            }
        };

        match serde_json::from_str(&content) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(
                    "Discarding unparseable record {}: {}",
                    path.display(),
                    e
                );
                TrackedRecord::new(&key.preview)
            }
        }
    }

    /// Saves a record atomically, stamping `last_updated`.
    ///
    /// The record is first written to a temporary file, then renamed over the
    /// final path, so readers never observe a partial write.
    pub fn save(&self, key: &TrackedKey, record: &mut TrackedRecord) -> Result<()> {
        data_paths::ensure_data_dir(&self.data_dir)?;

        record.last_updated = Utc::now();

        let path = data_paths::record_path(&self.data_dir, &key.identity);
        let temp_path = data_paths::record_temp_path(&self.data_dir, &key.identity);

        let content =
            serde_json::to_string_pretty(record).context("Failed to serialize tracked record")?;

        fs::write(&temp_path, &content)
            .with_context(|| format!("Failed to write temp record file: {}", temp_path.display()))?;

        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

        Ok(())
    }

    /// Runs a load-modify-save cycle under the key's advisory lock.
    ///
    /// If the lock file can't be opened or locked the update still runs
    /// unlocked; concurrent writers to one key are then last-writer-wins.
    pub fn update<T>(
        &self,
        key: &TrackedKey,
        apply: impl FnOnce(&mut TrackedRecord) -> T,
    ) -> Result<T> {
        data_paths::ensure_data_dir(&self.data_dir)?;
        let lock = self.acquire_lock(&key.identity);

        let mut record = self.load(key);
        let output = apply(&mut record);
        let saved = self.save(key, &mut record);

        if let Some(lock_file) = lock {
            if let Err(e) = FileExt::unlock(&lock_file) {
                tracing::debug!("Failed to release lock for {}: {}", key.identity, e);
            }
        }

        saved.map(|()| output)
    }

    /// Returns when models were last reconciled for this key.
    pub fn last_model_check(&self, key: &TrackedKey) -> Option<DateTime<Utc>> {
        self.load(key).models.last_check
    }

    fn acquire_lock(&self, identity: &KeyIdentity) -> Option<File> {
        let lock_path = data_paths::record_lock_path(&self.data_dir, identity);
        let file = match OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
        {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Failed to open lock file {}: {}", lock_path.display(), e);
                return None;
            }
        };

        match file.lock_exclusive() {
            Ok(()) => Some(file),
            Err(e) => {
                tracing::warn!("Failed to lock {}: {}", lock_path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
