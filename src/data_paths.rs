//! Storage paths for tracked-key records and the dashboard config.
//!
//! Layout inside a data directory (default `.cborg_data/`):
//! - `<identity>.json` - one record per tracked API key
//! - `<identity>.json.tmp` - in-flight write, renamed over the record
//! - `<identity>.lock` - advisory lock held while a record is updated

use crate::identity::KeyIdentity;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".cborg_data";

/// Extension of persisted records.
pub const RECORD_EXTENSION: &str = "json";

const CONFIG_DIR_NAME: &str = "cborg-dashboard";
const CONFIG_FILENAME: &str = "config.yaml";

/// Creates the data directory if it doesn't exist.
pub fn ensure_data_dir(data_dir: &Path) -> Result<()> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))
}

/// Returns the record path: `<data_dir>/<identity>.json`
pub fn record_path(data_dir: &Path, identity: &KeyIdentity) -> PathBuf {
    data_dir.join(format!("{}.{}", identity, RECORD_EXTENSION))
}

/// Returns the temp path a record is written to before being renamed into place.
pub fn record_temp_path(data_dir: &Path, identity: &KeyIdentity) -> PathBuf {
    record_path(data_dir, identity).with_extension("json.tmp")
}

/// Returns the lock path: `<data_dir>/<identity>.lock`
pub fn record_lock_path(data_dir: &Path, identity: &KeyIdentity) -> PathBuf {
    data_dir.join(format!("{}.lock", identity))
}

/// Returns true if the path names a persisted record (not a temp or lock file).
pub fn is_record_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == RECORD_EXTENSION)
}

/// Returns the default config path: `<config_dir>/cborg-dashboard/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
}

#[cfg(test)]
#[path = "tests/data_paths_tests.rs"]
mod tests;
