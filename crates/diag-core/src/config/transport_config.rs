use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// HTTP transport configuration.
///
/// There is no timeout unless one is configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Whole-request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: Option<u64>,
    /// Verify the server's TLS certificate.
    pub ssl_verify: bool,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            connect_timeout_secs: None,
            ssl_verify: defaults::DEFAULT_SSL_VERIFY,
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl TransportConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}
