//! Plain-text rendering of dashboard runs and key listings.

use crate::tracking::types::{ModelUpdate, SpendSnapshot, TrackedKeySummary};
use chrono::{DateTime, Utc};

/// Outcome of the model step of a dashboard run.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelsView {
    Updated {
        update: ModelUpdate,
        /// When models were checked before this run, if ever.
        previous_check: Option<DateTime<Utc>>,
    },
    Failed(String),
}

/// Everything a single dashboard run displays.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    pub key_preview: String,
    pub models: ModelsView,
    /// `None` when spend information couldn't be retrieved.
    pub spend: Option<SpendSnapshot>,
}

/// How close spend is to the budget limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    Normal,
    Warning,
    Critical,
}

impl UsageLevel {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 90.0 {
            UsageLevel::Critical
        } else if percent >= 75.0 {
            UsageLevel::Warning
        } else {
            UsageLevel::Normal
        }
    }

    fn label(self) -> &'static str {
        match self {
            UsageLevel::Normal => "ok",
            UsageLevel::Warning => "warning",
            UsageLevel::Critical => "critical",
        }
    }
}

/// Percentage of the budget spent, or `None` without a positive budget.
pub fn usage_percent(current_spend: f64, budget_limit: Option<f64>) -> Option<f64> {
    budget_limit
        .filter(|budget| *budget > 0.0)
        .map(|budget| current_spend / budget * 100.0)
}

/// Formats a timestamp as relative time (e.g., "2m ago", "1h ago").
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);

    if duration.num_seconds() < 60 {
        "just now".to_string()
    } else if duration.num_minutes() < 60 {
        format!("{}m ago", duration.num_minutes())
    } else if duration.num_hours() < 24 {
        format!("{}h ago", duration.num_hours())
    } else {
        format!("{}d ago", duration.num_days())
    }
}

/// Renders the full dashboard report as plain text.
pub fn render_report(report: &DashboardReport, now: DateTime<Utc>) -> String {
    let mut lines = vec![
        "CBORG Dashboard".to_string(),
        format!("API Key: {}", report.key_preview),
        String::new(),
    ];

    match &report.models {
        ModelsView::Updated {
            update,
            previous_check,
        } => render_models(&mut lines, update, *previous_check, now),
        ModelsView::Failed(error) => {
            lines.push(format!("Error fetching models: {}", error));
            lines.push(String::new());
        }
    }

    match report.spend.as_ref().filter(|s| s.current_spend.is_some()) {
        Some(spend) => render_spend(&mut lines, spend),
        None => {
            lines.push("== Spending Information ==".to_string());
            lines.push("Unable to retrieve spending information".to_string());
            lines.push("This may indicate an API issue or permissions problem.".to_string());
        }
    }

    join_lines(&lines)
}

fn render_models(
    lines: &mut Vec<String>,
    update: &ModelUpdate,
    previous_check: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) {
    let last_check = previous_check
        .map(|ts| format_relative_time(ts, now))
        .unwrap_or_else(|| "First check".to_string());

    lines.push("== Model Summary ==".to_string());
    lines.push(format!("Total Models: {}", update.total_count));
    lines.push(format!("  New Models: {}", update.new_models.len()));
    lines.push(format!("  Last Check: {}", last_check));
    lines.push(String::new());

    if update.new_models.is_empty() {
        lines.push("No new models since last check".to_string());
    } else {
        lines.push("== New Models ==".to_string());
        lines.extend(numbered(&update.new_models));
    }
    lines.push(String::new());

    lines.push("== All Available Models ==".to_string());
    lines.extend(numbered(&update.all_models));
    lines.push(String::new());
}

fn render_spend(lines: &mut Vec<String>, spend: &SpendSnapshot) {
    let current = spend.current_spend.unwrap_or_default();

    lines.push("== Spending Information ==".to_string());
    lines.push(format!("Current Spend: ${:.2}", current));

    if let Some(budget) = spend.budget_limit.filter(|b| *b != 0.0) {
        lines.push(format!(" Budget Limit: ${:.2}", budget));
        if let Some(remaining) = spend.remaining {
            lines.push(format!("    Remaining: ${:.2}", remaining));
        }
        let percent = usage_percent(current, Some(budget)).unwrap_or_default();
        let level = UsageLevel::from_percent(percent);
        lines.push(format!("        Usage: {:.1}% ({})", percent, level.label()));
    }

    if let Some(alias) = &spend.key_alias {
        lines.push(format!("    Key Alias: {}", alias));
    }
    if let Some(reset) = &spend.reset_date {
        lines.push(format!("   Reset Date: {}", reset));
    }
}

fn numbered(models: &[String]) -> impl Iterator<Item = String> + '_ {
    models
        .iter()
        .enumerate()
        .map(|(i, model)| format!("{:>4}  {}", i + 1, model))
}

fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Renders one line per tracked key, most recently updated first.
pub fn render_key_list(keys: &[TrackedKeySummary], now: DateTime<Utc>) -> String {
    if keys.is_empty() {
        return "No tracked API keys\n".to_string();
    }

    let mut lines = vec![format!("Tracked API keys: {}", keys.len())];
    lines.extend(keys.iter().map(|key| {
        format!(
            "  {}  {} models  first seen {}  updated {}",
            key.preview,
            key.model_count,
            key.first_seen.format("%Y-%m-%d"),
            format_relative_time(key.last_updated, now)
        )
    }));
    join_lines(&lines)
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
