//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, ClusterConfig, DownloadConfig, ObservabilityConfig, TransportConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`DCOS_URL`, `DIAG_SSL_VERIFY`)
/// 3. Config file (explicit path, else `diag.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DiagConfig {
    pub cluster: ClusterConfig,
    pub transport: TransportConfig,
    pub download: DownloadConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub cluster_url: Option<String>,
    pub token: Option<String>,
    pub log_level: Option<String>,
    pub chunk_size: Option<usize>,
}

impl DiagConfig {
    /// Load configuration from the process environment and an optional file.
    pub fn load(
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, cli_overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration, reading environment values through `lookup`.
    ///
    /// An explicit `config_path` must exist; the implicit `diag.toml` is
    /// skipped when absent.
    pub fn load_with_env<F>(
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Layer 3: config file
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let implicit = Path::new(defaults::DEFAULT_CONFIG_FILENAME);
                if implicit.exists() {
                    Self::from_file(implicit)?
                } else {
                    Self::default()
                }
            }
        };

        // Layer 2: environment variables
        config.apply_env_overrides(lookup);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment overrides. Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(defaults::CLUSTER_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.cluster.url = Some(url.trim().to_string());
        }
        if let Some(raw) = lookup(defaults::SSL_VERIFY_ENV) {
            match parse_bool(&raw) {
                Some(verify) => self.transport.ssl_verify = verify,
                None => tracing::warn!(
                    value = %raw,
                    "ignoring unrecognised {}",
                    defaults::SSL_VERIFY_ENV
                ),
            }
        }
    }

    /// Apply CLI overrides on top of everything else.
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(ref url) = cli.cluster_url {
            self.cluster.url = Some(url.clone());
        }
        if let Some(ref token) = cli.token {
            self.cluster.token = Some(token.clone());
        }
        if let Some(ref level) = cli.log_level {
            self.observability.log_level = level.clone();
        }
        if let Some(size) = cli.chunk_size {
            self.download.chunk_size = size;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref raw) = self.cluster.url {
            let invalid = |message: String| ConfigError::ValidationFailed {
                field: "cluster.url".to_string(),
                message,
            };
            let parsed = url::Url::parse(raw).map_err(|e| invalid(format!("`{raw}`: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(invalid(format!("`{raw}` must be an http:// or https:// URL")));
            }
            if parsed.host_str().map_or(true, str::is_empty) {
                return Err(invalid(format!("`{raw}` has no host")));
            }
        }
        if self.cluster.token_env.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "cluster.token_env".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.download.chunk_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "download.chunk_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.transport.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "transport.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.transport.connect_timeout_secs == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "transport.connect_timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let level = self.observability.log_level.to_ascii_lowercase();
        if !defaults::LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!(
                    "`{}` is not one of {}",
                    self.observability.log_level,
                    defaults::LOG_LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }

    /// The cluster URL, or an error naming the missing setting.
    pub fn require_cluster_url(&self) -> Result<&str, ConfigError> {
        self.cluster
            .url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingValue {
                field: format!("cluster.url (or {})", defaults::CLUSTER_URL_ENV),
            })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
