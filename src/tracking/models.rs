//! Model list reconciliation: which models appeared since the last check.

use super::store::RecordStore;
use super::types::{ModelState, ModelUpdate};
use crate::identity::TrackedKey;
use anyhow::Result;
use chrono::Utc;
use std::collections::BTreeSet;

/// Reconciles the current model list for a key and persists the new known set.
///
/// Models missing from `current_models` are dropped from the known set
/// without being reported.
pub fn reconcile_models(
    store: &RecordStore,
    key: &TrackedKey,
    current_models: &[String],
) -> Result<ModelUpdate> {
    let update = store.update(key, |record| {
        apply_model_list(&mut record.models, current_models)
    })?;

    tracing::info!(
        "Reconciled {} models for {} ({} new)",
        update.total_count,
        key.identity,
        update.new_models.len()
    );

    Ok(update)
}

/// Applies a model list to stored state and returns the delta.
fn apply_model_list(state: &mut ModelState, current_models: &[String]) -> ModelUpdate {
    let current: BTreeSet<String> = current_models.iter().cloned().collect();

    // Keep first-seen order from the API response
    let mut seen = BTreeSet::new();
    let new_models: Vec<String> = current_models
        .iter()
        .filter(|model| !state.known_models.contains(*model))
        .filter(|model| seen.insert(model.as_str()))
        .cloned()
        .collect();

    let all_models: Vec<String> = current.iter().cloned().collect();

    state.known_models = current;
    state.new_models = new_models.clone();
    state.last_check = Some(Utc::now());

    ModelUpdate {
        total_count: all_models.len(),
        new_models,
        all_models,
    }
}

#[cfg(test)]
#[path = "tests/models_tests.rs"]
mod tests;
