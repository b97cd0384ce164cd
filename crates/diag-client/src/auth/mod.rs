//! Credentials: where the access token comes from and how it is attached.

pub mod token_provider;

use std::fmt;

use diag_core::config::AuthScheme;

pub use token_provider::{EnvToken, StaticToken, TokenProvider};

/// An access token bound to the header format the cluster expects.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    scheme: AuthScheme,
    token: String,
}

impl Credential {
    pub fn new(scheme: AuthScheme, token: impl Into<String>) -> Self {
        Self {
            scheme,
            token: token.into(),
        }
    }

    /// Value of the `Authorization` header.
    pub fn header_value(&self) -> String {
        match self.scheme {
            AuthScheme::Acs => format!("token={}", self.token),
            AuthScheme::Bearer => format!("Bearer {}", self.token),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("scheme", &self.scheme)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_format_follows_scheme() {
        assert_eq!(
            Credential::new(AuthScheme::Acs, "abc").header_value(),
            "token=abc"
        );
        assert_eq!(
            Credential::new(AuthScheme::Bearer, "abc").header_value(),
            "Bearer abc"
        );
    }

    #[test]
    fn debug_redacts_token() {
        let printed = format!("{:?}", Credential::new(AuthScheme::Acs, "s3cr3t"));
        assert!(!printed.contains("s3cr3t"));
    }
}
