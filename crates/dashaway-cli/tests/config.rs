use dashaway_cli::config::{
    DEFAULT_API_BASE, DEFAULT_HISTORY_CAPACITY, DEFAULT_TIMEOUT_SECS, DashawayConfig,
    apply_overrides_from, config_info, load_config_from, save_config_to,
};

#[test]
fn default_points_at_local_api() {
    let config = DashawayConfig::default();
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.timeout_secs, 60);
    assert_eq!(config.history_capacity, 50);
    assert!(config.access_token.is_none());
}

#[test]
fn save_then_load_preserves_fields() {
    let dir = tempfile::tempdir().unwrap();
    let config = DashawayConfig {
        api_base: "https://api.example.com".to_string(),
        access_token: Some("secret-token-value".to_string()),
        ..DashawayConfig::default()
    };

    let path = save_config_to(dir.path(), &config).unwrap();
    let loaded = load_config_from(&path).unwrap();

    assert_eq!(loaded, config);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = save_config_to(dir.path(), &DashawayConfig::default()).unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn unversioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "api_base": "http://legacy:8000", "created_at": "2025-01-01T00:00:00Z" }"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.api_base, "http://legacy:8000");
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);
}

#[test]
fn newer_config_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 99, "api_base": "x", "created_at": "2025-01-01T00:00:00Z" }"#,
    )
    .unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn zero_timeout_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 1, "api_base": "x", "timeout_secs": 0, "history_capacity": 50, "created_at": "2025-01-01T00:00:00Z" }"#,
    )
    .unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("timeout_secs must be at least 1"));

    let config = DashawayConfig {
        timeout_secs: 0,
        ..DashawayConfig::default()
    };
    assert!(save_config_to(dir.path(), &config).is_err());
}

#[test]
fn environment_overrides_api_base_and_token() {
    let mut config = DashawayConfig::default();
    apply_overrides_from(&mut config, |key| match key {
        "DASHAWAY_API_BASE" => Some("https://staging.example.com".to_string()),
        "DASHAWAY_TOKEN" => Some("env-token".to_string()),
        _ => None,
    });
    assert_eq!(config.api_base, "https://staging.example.com");
    assert_eq!(config.access_token.as_deref(), Some("env-token"));
}

#[test]
fn empty_environment_values_are_ignored() {
    let mut config = DashawayConfig::default();
    apply_overrides_from(&mut config, |_| Some(String::new()));
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert!(config.access_token.is_none());
}

#[test]
fn info_redacts_token() {
    let config = DashawayConfig {
        access_token: Some("abcd1234efgh5678".to_string()),
        ..DashawayConfig::default()
    };
    let info = config_info(&config);
    assert!(info.authenticated);
    assert_eq!(info.token_hint.as_deref(), Some("abcd...5678"));

    let short = DashawayConfig {
        access_token: Some("tiny".to_string()),
        ..DashawayConfig::default()
    };
    assert_eq!(config_info(&short).token_hint.as_deref(), Some("****"));
}
