//! One dashboard run: query the API, reconcile local state, build a report.

use super::report::{DashboardReport, ModelsView};
use crate::api_client::UsageSource;
use crate::identity::TrackedKey;
use crate::tracking::models::reconcile_models;
use crate::tracking::spend::record_spend;
use crate::tracking::store::RecordStore;

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(DashboardReport),
    /// The API could not be reached or returned no models.
    ConnectionFailed,
}

/// Runs the dashboard for one key.
///
/// Local storage failures never abort the run: a failed model update is
/// shown in the report and a failed spend save is only logged.
pub fn run_dashboard(
    source: &dyn UsageSource,
    store: &RecordStore,
    key: &TrackedKey,
) -> RunOutcome {
    if !source.test_connection() {
        return RunOutcome::ConnectionFailed;
    }

    let previous_check = store.last_model_check(key);
    let models = match source
        .list_model_ids()
        .and_then(|current| reconcile_models(store, key, &current))
    {
        Ok(update) => ModelsView::Updated {
            update,
            previous_check,
        },
        Err(e) => {
            tracing::error!("Model update failed: {:#}", e);
            ModelsView::Failed(format!("{:#}", e))
        }
    };

    let spend = source.spend_snapshot();
    if let Some(snapshot) = &spend {
        if let Err(e) = record_spend(store, key, snapshot) {
            tracing::error!("Failed to record spend: {:#}", e);
        }
    }

    RunOutcome::Completed(DashboardReport {
        key_preview: key.preview.clone(),
        models,
        spend,
    })
}

#[cfg(test)]
#[path = "tests/runner_tests.rs"]
mod tests;
