//! Access-token sources.

use std::fmt;

use diag_core::errors::{DiagError, DiagResult};

/// Supplies the access token a session authenticates with.
pub trait TokenProvider: Send + Sync {
    fn access_token(&self) -> DiagResult<String>;
}

/// A token known up front (API key, CLI flag, config file).
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn access_token(&self) -> DiagResult<String> {
        if self.0.trim().is_empty() {
            return Err(DiagError::Auth {
                reason: "access token is empty".to_string(),
            });
        }
        Ok(self.0.clone())
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticToken(<redacted>)")
    }
}

/// Reads the token from an environment variable each time it is asked.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl TokenProvider for EnvToken {
    fn access_token(&self) -> DiagResult<String> {
        match std::env::var(&self.var) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            Ok(_) => Err(DiagError::Auth {
                reason: format!("environment variable {} is empty", self.var),
            }),
            Err(_) => Err(DiagError::Auth {
                reason: format!("environment variable {} is not set", self.var),
            }),
        }
    }
}
