//! Data types for per-key model and spend tracking.

use super::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Persistent record stored per tracked API key.
///
/// Missing sections and fields read as empty so partially written or older
/// records keep whatever state they do carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedRecord {
    /// Redacted key for display only.
    #[serde(default = "unknown_preview")]
    pub api_key_preview: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub first_seen: DateTime<Utc>,
    /// Rewritten on every save.
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub models: ModelState,
    #[serde(default)]
    pub spend: SpendState,
}

fn unknown_preview() -> String {
    "Unknown".to_string()
}

impl TrackedRecord {
    /// Creates an empty record for a key seen for the first time.
    pub fn new(api_key_preview: &str) -> Self {
        let now = Utc::now();
        Self {
            api_key_preview: api_key_preview.to_string(),
            first_seen: now,
            last_updated: now,
            models: ModelState::default(),
            spend: SpendState::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelState {
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    pub last_check: Option<DateTime<Utc>>,
    /// Serialized as a sorted list.
    #[serde(default)]
    pub known_models: BTreeSet<String>,
    /// Models that first appeared at the most recent reconciliation.
    #[serde(default)]
    pub new_models: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpendState {
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    pub last_check: Option<DateTime<Utc>>,
    /// Oldest first.
    #[serde(default)]
    pub history: Vec<SpendRecord>,
}

/// A recorded change in spend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendRecord {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub timestamp: DateTime<Utc>,
    pub current_spend: f64,
    #[serde(default)]
    pub budget_limit: Option<f64>,
    #[serde(default)]
    pub remaining: Option<f64>,
    #[serde(default)]
    pub key_alias: Option<String>,
}

/// Point-in-time spend and budget read from the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpendSnapshot {
    pub current_spend: Option<f64>,
    pub budget_limit: Option<f64>,
    pub remaining: Option<f64>,
    pub key_alias: Option<String>,
    pub reset_date: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub model_spend: BTreeMap<String, f64>,
}

impl SpendSnapshot {
    /// Snapshot carrying only a current spend value.
    pub fn with_spend(current_spend: f64) -> Self {
        Self {
            current_spend: Some(current_spend),
            ..Self::default()
        }
    }
}

/// Result of reconciling the current model list against known models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelUpdate {
    pub new_models: Vec<String>,
    /// Sorted, deduplicated.
    pub all_models: Vec<String>,
    pub total_count: usize,
}

/// Summary of one tracked key for multi-key listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackedKeySummary {
    pub preview: String,
    pub first_seen: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub model_count: usize,
}

impl From<&TrackedRecord> for TrackedKeySummary {
    fn from(record: &TrackedRecord) -> Self {
        Self {
            preview: record.api_key_preview.clone(),
            first_seen: record.first_seen,
            last_updated: record.last_updated,
            model_count: record.models.known_models.len(),
        }
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
