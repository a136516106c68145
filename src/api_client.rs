//! HTTP client for the CBORG API.
//!
//! Model listing uses the OpenAI-compatible `/v1/models` endpoint; spend and
//! budget come from the LiteLLM-style `/key/info` endpoint.

use crate::tracking::types::SpendSnapshot;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.cborg.lbl.gov";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Remote state the dashboard reconciles against.
pub trait UsageSource {
    /// Lists the IDs of all models available to the key.
    fn list_model_ids(&self) -> Result<Vec<String>>;

    /// Reads current spend and budget, or `None` if unavailable.
    fn spend_snapshot(&self) -> Option<SpendSnapshot>;

    /// Returns true if the API answers with a non-empty model list.
    fn test_connection(&self) -> bool {
        match self.list_model_ids() {
            Ok(models) => !models.is_empty(),
            Err(e) => {
                tracing::warn!("Connection test failed: {:#}", e);
                false
            }
        }
    }
}

pub struct CborgClient {
    api_key: String,
    base_url: String,
    agent: ureq::Agent,
}

impl CborgClient {
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    fn get_json(&self, path: &str) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, path);
        let body: String = self
            .agent
            .get(&url)
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .call()
            .with_context(|| format!("Request to {} failed", path))?
            .body_mut()
            .read_to_string()
            .with_context(|| format!("Failed to read response from {}", path))?;

        serde_json::from_str(&body).with_context(|| format!("Invalid JSON from {}", path))
    }
}

impl UsageSource for CborgClient {
    fn list_model_ids(&self) -> Result<Vec<String>> {
        let response = self.get_json("/v1/models").context("Failed to fetch models")?;
        parse_model_ids(&response)
    }

    fn spend_snapshot(&self) -> Option<SpendSnapshot> {
        match self.get_json("/key/info") {
            Ok(response) => parse_key_info(&response),
            Err(e) => {
                tracing::warn!("Failed to fetch key info: {:#}", e);
                None
            }
        }
    }
}

/// Extracts model IDs from a `/v1/models` response.
pub fn parse_model_ids(response: &serde_json::Value) -> Result<Vec<String>> {
    let data = response["data"]
        .as_array()
        .context("Missing data array in models response")?;

    Ok(data
        .iter()
        .filter_map(|model| model["id"].as_str())
        .map(String::from)
        .collect())
}

/// Builds a spend snapshot from a `/key/info` response.
///
/// A missing `spend` counts as zero; an explicit `null` means unknown.
/// `remaining` is only derived when a non-zero budget is set.
pub fn parse_key_info(response: &serde_json::Value) -> Option<SpendSnapshot> {
    let info = response.get("info")?;
    if !info.is_object() {
        return None;
    }

    let current_spend = match info.get("spend") {
        None => Some(0.0),
        Some(value) => value.as_f64(),
    };
    let budget_limit = info["max_budget"].as_f64();
    let remaining = match (budget_limit, current_spend) {
        (Some(budget), Some(spend)) if budget != 0.0 => Some(budget - spend),
        _ => None,
    };

    let model_spend: BTreeMap<String, f64> = info["model_spend"]
        .as_object()
        .map(|spend| {
            spend
                .iter()
                .filter_map(|(model, value)| value.as_f64().map(|v| (model.clone(), v)))
                .collect()
        })
        .unwrap_or_default();

    Some(SpendSnapshot {
        current_spend,
        budget_limit,
        remaining,
        key_alias: info["key_alias"].as_str().map(String::from),
        reset_date: info["budget_reset_at"].as_str().map(String::from),
        created_at: info["created_at"].as_str().map(String::from),
        model_spend,
    })
}

#[cfg(test)]
#[path = "tests/api_client_tests.rs"]
mod tests;
