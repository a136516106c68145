use super::*;
use chrono::Duration;

fn update(new: &[&str], all: &[&str]) -> ModelUpdate {
    ModelUpdate {
        new_models: new.iter().map(|s| s.to_string()).collect(),
        all_models: all.iter().map(|s| s.to_string()).collect(),
        total_count: all.len(),
    }
}

#[test]
fn test_format_relative_time() {
    let now = Utc::now();
    assert_eq!(format_relative_time(now, now), "just now");
    assert_eq!(format_relative_time(now - Duration::seconds(59), now), "just now");
    assert_eq!(format_relative_time(now - Duration::minutes(5), now), "5m ago");
    assert_eq!(format_relative_time(now - Duration::hours(3), now), "3h ago");
    assert_eq!(format_relative_time(now - Duration::days(2), now), "2d ago");
}

#[test]
fn test_usage_percent() {
    assert_eq!(usage_percent(25.0, Some(100.0)), Some(25.0));
    assert_eq!(usage_percent(25.0, Some(0.0)), None);
    assert_eq!(usage_percent(25.0, None), None);
}

#[test]
fn test_usage_level_thresholds() {
    assert_eq!(UsageLevel::from_percent(10.0), UsageLevel::Normal);
    assert_eq!(UsageLevel::from_percent(74.9), UsageLevel::Normal);
    assert_eq!(UsageLevel::from_percent(75.0), UsageLevel::Warning);
    assert_eq!(UsageLevel::from_percent(89.9), UsageLevel::Warning);
    assert_eq!(UsageLevel::from_percent(90.0), UsageLevel::Critical);
    assert_eq!(UsageLevel::from_percent(120.0), UsageLevel::Critical);
}

#[test]
fn test_render_first_run() {
    let report = DashboardReport {
        key_preview: "sk-abcde...wxyz".to_string(),
        models: ModelsView::Updated {
            update: update(&["a", "b"], &["a", "b"]),
            previous_check: None,
        },
        spend: None,
    };

    let text = render_report(&report, Utc::now());
    assert!(text.contains("API Key: sk-abcde...wxyz"));
    assert!(text.contains("Total Models: 2"));
    assert!(text.contains("New Models: 2"));
    assert!(text.contains("Last Check: First check"));
    assert!(text.contains("== New Models =="));
    assert!(text.contains("Unable to retrieve spending information"));
}

#[test]
fn test_render_no_new_models() {
    let now = Utc::now();
    let report = DashboardReport {
        key_preview: "p".to_string(),
        models: ModelsView::Updated {
            update: update(&[], &["a"]),
            previous_check: Some(now - Duration::hours(2)),
        },
        spend: None,
    };

    let text = render_report(&report, now);
    assert!(text.contains("No new models since last check"));
    assert!(text.contains("Last Check: 2h ago"));
    assert!(!text.contains("== New Models =="));
}

#[test]
fn test_render_model_failure() {
    let report = DashboardReport {
        key_preview: "p".to_string(),
        models: ModelsView::Failed("timeout".to_string()),
        spend: Some(SpendSnapshot::with_spend(1.0)),
    };

    let text = render_report(&report, Utc::now());
    assert!(text.contains("Error fetching models: timeout"));
    assert!(text.contains("Current Spend: $1.00"));
}

#[test]
fn test_render_spend_with_budget() {
    let report = DashboardReport {
        key_preview: "p".to_string(),
        models: ModelsView::Failed("x".to_string()),
        spend: Some(SpendSnapshot {
            current_spend: Some(80.0),
            budget_limit: Some(100.0),
            remaining: Some(20.0),
            key_alias: Some("team".to_string()),
            reset_date: Some("2025-03-01".to_string()),
            ..SpendSnapshot::default()
        }),
    };

    let text = render_report(&report, Utc::now());
    assert!(text.contains("Budget Limit: $100.00"));
    assert!(text.contains("Remaining: $20.00"));
    assert!(text.contains("Usage: 80.0% (warning)"));
    assert!(text.contains("Key Alias: team"));
    assert!(text.contains("Reset Date: 2025-03-01"));
}

#[test]
fn test_render_spend_without_value_is_unavailable() {
    let report = DashboardReport {
        key_preview: "p".to_string(),
        models: ModelsView::Failed("x".to_string()),
        spend: Some(SpendSnapshot::default()),
    };

    let text = render_report(&report, Utc::now());
    assert!(text.contains("Unable to retrieve spending information"));
}

#[test]
fn test_render_key_list() {
    let now = Utc::now();
    let keys = vec![TrackedKeySummary {
        preview: "sk-abcde...wxyz".to_string(),
        first_seen: now - Duration::days(30),
        last_updated: now - Duration::minutes(10),
        model_count: 42,
    }];

    let text = render_key_list(&keys, now);
    assert!(text.contains("Tracked API keys: 1"));
    assert!(text.contains("sk-abcde...wxyz  42 models"));
    assert!(text.contains("updated 10m ago"));
}

#[test]
fn test_render_empty_key_list() {
    assert_eq!(render_key_list(&[], Utc::now()), "No tracked API keys\n");
}

#[test]
fn test_render_lists_models_numbered() {
    let report = DashboardReport {
        key_preview: "p".to_string(),
        models: ModelsView::Updated {
            update: update(&["c"], &["a", "b", "c"]),
            previous_check: None,
        },
        spend: None,
    };

    let text = render_report(&report, Utc::now());
    assert!(text.contains("== New Models ==\n   1  c\n"));
    assert!(text.contains("== All Available Models ==\n   1  a\n   2  b\n   3  c\n"));
    assert!(text.ends_with("permissions problem.\n"));
}
