//! Listing of every tracked key in a data directory.

use super::store::RecordStore;
use super::types::{TrackedKeySummary, TrackedRecord};
use crate::data_paths;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Lists all tracked keys, most recently updated first.
///
/// Files that can't be read or parsed are skipped.
pub fn list_tracked_keys(store: &RecordStore) -> Result<Vec<TrackedKeySummary>> {
    let data_dir = store.data_dir();
    if !data_dir.exists() {
        return Ok(Vec::new());
    }

    let mut keys = Vec::new();

    for entry in fs::read_dir(data_dir)
        .with_context(|| format!("Failed to read data directory: {}", data_dir.display()))?
    {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                tracing::debug!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };

        if !data_paths::is_record_file(&path) {
            continue;
        }

        match read_record(&path) {
            Ok(record) => keys.push(TrackedKeySummary::from(&record)),
            Err(e) => tracing::warn!("Skipping record {}: {:#}", path.display(), e),
        }
    }

    // Newest first
    keys.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));

    Ok(keys)
}

fn read_record(path: &Path) -> Result<TrackedRecord> {
    let content = fs::read_to_string(path).context("Failed to read record")?;
    serde_json::from_str(&content).context("Failed to parse record")
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
