//! Configuration loading, layering, and validation.

use std::collections::HashMap;
use std::io::Write;

use diag_core::config::{AuthScheme, CliOverrides, DiagConfig};
use diag_core::errors::{ConfigError, DiagErrorCode};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_cluster_conventions() {
    let config = DiagConfig::default();
    assert_eq!(
        config.cluster.diagnostics_path,
        "/system/health/v1/report/diagnostics/"
    );
    assert_eq!(config.cluster.token_env, "DCOS_ACS_TOKEN");
    assert_eq!(config.cluster.auth_scheme, AuthScheme::Acs);
    assert_eq!(config.download.chunk_size, 1024);
    assert!(config.transport.ssl_verify);
    assert!(config.transport.timeout().is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn partial_toml_keeps_defaults_for_missing_keys() {
    let config = DiagConfig::from_toml(
        r#"
        [cluster]
        url = "https://master.example.com"
        auth_scheme = "bearer"

        [download]
        chunk_size = 4096
        "#,
    )
    .unwrap();

    assert_eq!(config.cluster.url.as_deref(), Some("https://master.example.com"));
    assert_eq!(config.cluster.auth_scheme, AuthScheme::Bearer);
    assert_eq!(config.download.chunk_size, 4096);
    assert_eq!(config.cluster.token_env, "DCOS_ACS_TOKEN");
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = DiagConfig::from_toml("[cluster\nurl = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert_eq!(err.error_code(), "CONFIG_PARSE");
}

#[test]
fn explicit_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = DiagConfig::load_with_env(Some(&missing), None, env(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn env_overrides_file_and_cli_overrides_env() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[cluster]\nurl = \"https://from-file.example.com\"\n[transport]\nssl_verify = true"
    )
    .unwrap();

    let lookup = env(&[
        ("DCOS_URL", "https://from-env.example.com"),
        ("DIAG_SSL_VERIFY", "false"),
    ]);

    let config = DiagConfig::load_with_env(Some(file.path()), None, &lookup).unwrap();
    assert_eq!(
        config.cluster.url.as_deref(),
        Some("https://from-env.example.com")
    );
    assert!(!config.transport.ssl_verify);

    let cli = CliOverrides {
        cluster_url: Some("https://from-cli.example.com".into()),
        token: Some("cli-token".into()),
        log_level: Some("debug".into()),
        chunk_size: Some(8192),
    };
    let config = DiagConfig::load_with_env(Some(file.path()), Some(&cli), &lookup).unwrap();
    assert_eq!(
        config.cluster.url.as_deref(),
        Some("https://from-cli.example.com")
    );
    assert_eq!(config.cluster.token.as_deref(), Some("cli-token"));
    assert_eq!(config.observability.log_level, "debug");
    assert_eq!(config.download.chunk_size, 8192);
}

#[test]
fn blank_env_values_are_ignored() {
    let config = DiagConfig::load_with_env(
        None,
        None,
        env(&[("DCOS_URL", "   "), ("DIAG_SSL_VERIFY", "sometimes")]),
    )
    .unwrap();
    assert!(config.cluster.url.is_none());
    assert!(config.transport.ssl_verify);
}

#[test]
fn zero_chunk_size_rejected() {
    let cli = CliOverrides {
        chunk_size: Some(0),
        ..Default::default()
    };
    let err = DiagConfig::load_with_env(None, Some(&cli), env(&[])).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "download.chunk_size"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn zero_timeout_rejected() {
    let config = DiagConfig::from_toml("[transport]\ntimeout_secs = 0").unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn non_http_cluster_url_rejected() {
    let config = DiagConfig::from_toml("[cluster]\nurl = \"ftp://master\"").unwrap();
    let err = config.validate().unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_INVALID");
}

#[test]
fn unparseable_cluster_url_rejected() {
    for url in ["http://", "https://exa mple.com", "not a url"] {
        let config = DiagConfig::from_toml(&format!("[cluster]\nurl = \"{url}\"")).unwrap();
        match config.validate().unwrap_err() {
            ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "cluster.url", "{url}"),
            other => panic!("unexpected error for {url}: {other:?}"),
        }
    }

    let config = DiagConfig::from_toml("[cluster]\nurl = \"https://m.example.com:8443/\"").unwrap();
    assert!(config.validate().is_ok());
}

#[test]
fn unknown_log_level_rejected() {
    let config = DiagConfig::from_toml("[observability]\nlog_level = \"loud\"").unwrap();
    assert!(config.validate().is_err());

    let config = DiagConfig::from_toml("[observability]\nlog_level = \"WARN\"").unwrap();
    assert!(config.validate().is_ok());
}

#[test]
fn missing_cluster_url_names_the_env_var() {
    let err = DiagConfig::default().require_cluster_url().unwrap_err();
    assert!(err.to_string().contains("DCOS_URL"));
    assert_eq!(err.error_code(), "CONFIG_MISSING");
}
