//! Top-level client error.

use super::error_code::{self, DiagErrorCode};
use super::{ConfigError, TransportError};

/// Everything a diagnostics-client operation can fail with.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum DiagError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-success status on an endpoint that requires one.
    #[error("HTTP {status} from {url}: {body}")]
    Http { url: String, status: u16, body: String },

    /// An expected response field was absent or had the wrong shape.
    #[error("malformed response: field `{field}` {reason}")]
    MalformedResponse { field: String, reason: String },

    #[error("precondition failed: {reason}")]
    Precondition { reason: String },

    #[error("invalid URL `{input}`: {reason}")]
    InvalidUrl { input: String, reason: String },

    #[error("failed to encode request body: {reason}")]
    Encode { reason: String },

    #[error("authentication failed: {reason}")]
    Auth { reason: String },

    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type DiagResult<T> = Result<T, DiagError>;

impl DiagError {
    /// Whether this is a [`DiagError::Http`] carrying the given status.
    pub fn is_status(&self, code: u16) -> bool {
        matches!(self, Self::Http { status, .. } if *status == code)
    }
}

impl DiagErrorCode for DiagError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(e) => e.error_code(),
            Self::Http { .. } => error_code::HTTP_STATUS,
            Self::MalformedResponse { .. } => error_code::MALFORMED_RESPONSE,
            Self::Precondition { .. } => error_code::PRECONDITION_FAILED,
            Self::InvalidUrl { .. } => error_code::INVALID_URL,
            Self::Encode { .. } => error_code::ENCODE_FAILED,
            Self::Auth { .. } => error_code::AUTH_FAILED,
            Self::Io { .. } => error_code::IO_FAILED,
            Self::Config(e) => e.error_code(),
        }
    }
}
