use super::*;
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = DashboardConfig::default();
    assert_eq!(config.base_url, "https://api.cborg.lbl.gov");
    assert_eq!(config.data_dir, PathBuf::from(".cborg_data"));
    assert_eq!(config.api_key_env, "CBORG_API_KEY");
    assert_eq!(config.timeout(), Duration::from_secs(15));
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let yaml = r#"
data_dir: /var/lib/cborg
timeout_secs: 30
"#;
    let config: DashboardConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.data_dir, PathBuf::from("/var/lib/cborg"));
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_unknown_field_rejected() {
    let yaml = "data_directory: /tmp\n";
    assert!(serde_yaml::from_str::<DashboardConfig>(yaml).is_err());
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "base_url: http://localhost:4000\n").unwrap();

    let config = DashboardConfig::resolve(Some(path.as_path())).unwrap();
    assert_eq!(config.base_url, "http://localhost:4000");
}

#[test]
fn test_load_missing_explicit_file_errors() {
    let temp_dir = TempDir::new().unwrap();
    let result = DashboardConfig::resolve(Some(temp_dir.path().join("nope.yaml").as_path()));
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_api_key_from_env() {
    let config = DashboardConfig {
        api_key_env: "CBORG_DASHBOARD_TEST_KEY".to_string(),
        ..DashboardConfig::default()
    };

    std::env::set_var("CBORG_DASHBOARD_TEST_KEY", "  sk-from-env  ");
    let key = config.api_key();
    std::env::remove_var("CBORG_DASHBOARD_TEST_KEY");

    assert_eq!(key.unwrap(), "sk-from-env");
}

#[test]
#[serial]
fn test_api_key_missing() {
    let config = DashboardConfig {
        api_key_env: "CBORG_DASHBOARD_TEST_KEY".to_string(),
        ..DashboardConfig::default()
    };

    std::env::remove_var("CBORG_DASHBOARD_TEST_KEY");
    let err = config.api_key().unwrap_err();
    assert!(err.to_string().contains("CBORG_DASHBOARD_TEST_KEY"));
}
