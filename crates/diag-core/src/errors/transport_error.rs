use super::error_code::{self, DiagErrorCode};

/// Network-level failures raised by an HTTP transport.
///
/// These are surfaced to the caller unchanged; nothing in the client retries them.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request to {url} failed: {reason}")]
    RequestFailed { url: String, reason: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("failed to read response body: {reason}")]
    BodyRead { reason: String },

    #[error("failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },
}

impl DiagErrorCode for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RequestFailed { .. } => error_code::TRANSPORT_REQUEST_FAILED,
            Self::Timeout { .. } => error_code::TRANSPORT_TIMEOUT,
            Self::BodyRead { .. } => error_code::TRANSPORT_BODY_READ,
            Self::ClientBuild { .. } => error_code::TRANSPORT_CLIENT_BUILD,
        }
    }
}
