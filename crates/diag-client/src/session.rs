//! Authenticated session: URL construction and credentialed requests.

use std::sync::Arc;

use diag_core::config::{defaults, AuthScheme};
use diag_core::errors::{DiagError, DiagResult};
use reqwest::Url;
use serde::Serialize;

use crate::auth::{Credential, TokenProvider};
use crate::resolver::BaseUrlResolver;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method};

/// Extra request inputs: a JSON body and additional headers.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    json: Option<Vec<u8>>,
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    /// Options carrying `body` serialized as JSON.
    pub fn json<T: Serialize + ?Sized>(body: &T) -> DiagResult<Self> {
        let bytes = serde_json::to_vec(body).map_err(|e| DiagError::Encode {
            reason: e.to_string(),
        })?;
        Ok(Self {
            json: Some(bytes),
            headers: Vec::new(),
        })
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A base URL plus the credential attached to every request.
///
/// Both are resolved once at construction and never change afterwards.
/// Cloning is cheap; the transport is shared.
#[derive(Debug, Clone)]
pub struct Session {
    base_url: Url,
    credential: Credential,
    transport: Arc<dyn HttpTransport>,
    chunk_size: usize,
}

impl Session {
    /// Resolve the base URL and access token and bind them to `transport`.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        resolver: &dyn BaseUrlResolver,
        tokens: &dyn TokenProvider,
        scheme: AuthScheme,
    ) -> DiagResult<Self> {
        let base_url = resolver.base_url()?;
        let credential = Credential::new(scheme, tokens.access_token()?);
        Ok(Self::from_parts(transport, base_url, credential))
    }

    /// Build a session from an already resolved URL and credential.
    pub fn from_parts(
        transport: Arc<dyn HttpTransport>,
        base_url: Url,
        credential: Credential,
    ) -> Self {
        Self {
            base_url,
            credential,
            transport,
            chunk_size: defaults::DEFAULT_CHUNK_SIZE,
        }
    }

    /// Set the write chunk size used by bundle downloads. Zero is ignored.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        if chunk_size > 0 {
            self.chunk_size = chunk_size;
        }
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Join `path` onto the base URL using standard relative-reference rules.
    ///
    /// `path` is not validated: a leading `/` replaces the whole base path,
    /// and a base without a trailing slash loses its last segment.
    pub fn create_url(&self, path: &str) -> DiagResult<Url> {
        self.base_url.join(path).map_err(|e| DiagError::InvalidUrl {
            input: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// GET `path`. The status code is left to the caller.
    pub fn get(&self, path: &str, options: RequestOptions) -> DiagResult<HttpResponse> {
        self.send(Method::Get, path, options)
    }

    /// POST to `path`. The status code is left to the caller.
    pub fn post(&self, path: &str, options: RequestOptions) -> DiagResult<HttpResponse> {
        self.send(Method::Post, path, options)
    }

    fn send(&self, method: Method, path: &str, options: RequestOptions) -> DiagResult<HttpResponse> {
        let url = self.create_url(path)?;
        tracing::debug!(%method, url = %url, "sending diagnostics request");

        let mut request = HttpRequest::new(method, url)
            .header("Authorization", self.credential.header_value());
        for (name, value) in options.headers {
            request = request.header(name, value);
        }
        if let Some(body) = options.json {
            request = request
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = self.transport.execute(request)?;
        tracing::debug!(status = response.status(), url = response.url(), "received response");
        Ok(response)
    }
}
