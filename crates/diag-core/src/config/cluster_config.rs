use serde::{Deserialize, Serialize};

use super::defaults;

/// How the access token is carried in the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    /// `Authorization: token=<token>`, the cluster ACS format.
    #[default]
    Acs,
    /// `Authorization: Bearer <token>`.
    Bearer,
}

/// Which cluster to talk to and how to authenticate against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Cluster root URL, e.g. `https://master.example.com`.
    pub url: Option<String>,
    /// Path of the diagnostics API, resolved against `url`.
    pub diagnostics_path: String,
    /// Header format for the access token.
    pub auth_scheme: AuthScheme,
    /// Literal access token. Takes precedence over `token_env`.
    pub token: Option<String>,
    /// Environment variable the access token is read from.
    pub token_env: String,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            url: None,
            diagnostics_path: defaults::DEFAULT_DIAGNOSTICS_PATH.to_string(),
            auth_scheme: AuthScheme::default(),
            token: None,
            token_env: defaults::DEFAULT_TOKEN_ENV.to_string(),
        }
    }
}
