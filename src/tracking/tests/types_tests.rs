use super::*;

#[test]
fn test_new_record_is_empty() {
    let record = TrackedRecord::new("sk-abcde...wxyz");
    assert_eq!(record.api_key_preview, "sk-abcde...wxyz");
    assert_eq!(record.first_seen, record.last_updated);
    assert!(record.models.last_check.is_none());
    assert!(record.models.known_models.is_empty());
    assert!(record.models.new_models.is_empty());
    assert!(record.spend.last_check.is_none());
    assert!(record.spend.history.is_empty());
}

#[test]
fn test_known_models_serialize_sorted() {
    let mut record = TrackedRecord::new("preview");
    record.models.known_models.insert("zeta".to_string());
    record.models.known_models.insert("alpha".to_string());
    record.models.known_models.insert("mid".to_string());

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json["models"]["known_models"],
        serde_json::json!(["alpha", "mid", "zeta"])
    );
}

#[test]
fn test_record_json_shape() {
    let record = TrackedRecord::new("preview");
    let json = serde_json::to_value(&record).unwrap();

    assert!(json["first_seen"].is_string());
    assert!(json["last_updated"].is_string());
    assert!(json["models"]["last_check"].is_null());
    assert!(json["spend"]["history"].as_array().unwrap().is_empty());
}

#[test]
fn test_record_deserializes_duplicate_known_models_as_set() {
    let json = r#"{
        "api_key_preview": "p",
        "first_seen": "2025-01-01T00:00:00Z",
        "last_updated": "2025-01-02T00:00:00Z",
        "models": {"last_check": null, "known_models": ["b", "a", "b"], "new_models": []},
        "spend": {"last_check": null, "history": []}
    }"#;
    let record: TrackedRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.models.known_models.len(), 2);
}

#[test]
fn test_summary_from_record() {
    let mut record = TrackedRecord::new("preview");
    record.models.known_models.insert("a".to_string());
    record.models.known_models.insert("b".to_string());

    let summary = TrackedKeySummary::from(&record);
    assert_eq!(summary.preview, "preview");
    assert_eq!(summary.model_count, 2);
    assert_eq!(summary.last_updated, record.last_updated);
}

#[test]
fn test_snapshot_with_spend() {
    let snapshot = SpendSnapshot::with_spend(5.0);
    assert_eq!(snapshot.current_spend, Some(5.0));
    assert!(snapshot.budget_limit.is_none());
    assert!(snapshot.model_spend.is_empty());
}
