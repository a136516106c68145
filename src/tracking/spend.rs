//! Spend history recording with change-only appends and bounded retention.

use super::store::RecordStore;
use super::types::{SpendRecord, SpendSnapshot, SpendState};
use crate::identity::TrackedKey;
use anyhow::Result;
use chrono::Utc;

/// Maximum spend history entries kept per key (about a year of daily checks).
pub const MAX_SPEND_HISTORY: usize = 365;

/// Records a spend snapshot for a key.
///
/// A history entry is appended only when the snapshot carries a finite spend
/// value that differs from the last recorded one. `last_check` is updated and the
/// record saved either way. Returns whether an entry was appended.
pub fn record_spend(
    store: &RecordStore,
    key: &TrackedKey,
    snapshot: &SpendSnapshot,
) -> Result<bool> {
    let appended = store.update(key, |record| apply_snapshot(&mut record.spend, snapshot))?;

    if appended {
        tracing::info!("Recorded spend change for {}", key.identity);
    } else {
        tracing::debug!("Spend unchanged for {}, history not extended", key.identity);
    }

    Ok(appended)
}

fn apply_snapshot(state: &mut SpendState, snapshot: &SpendSnapshot) -> bool {
    let now = Utc::now();
    state.last_check = Some(now);

    // NaN and infinities can't round-trip through JSON
    let Some(current_spend) = snapshot.current_spend.filter(|spend| spend.is_finite()) else {
        return false;
    };

    let changed = state
        .history
        .last()
        .is_none_or(|last| last.current_spend != current_spend);
    if !changed {
        return false;
    }

    state.history.push(SpendRecord {
        timestamp: now,
        current_spend,
        budget_limit: snapshot.budget_limit,
        remaining: snapshot.remaining,
        key_alias: snapshot.key_alias.clone(),
    });

    // Trim history
    if state.history.len() > MAX_SPEND_HISTORY {
        let excess = state.history.len() - MAX_SPEND_HISTORY;
        state.history.drain(..excess);
    }

    true
}

#[cfg(test)]
#[path = "tests/spend_tests.rs"]
mod tests;
