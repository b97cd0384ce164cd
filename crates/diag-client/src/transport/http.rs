//! Transport-agnostic HTTP request and response types.

use std::fmt;
use std::io::Read;

use diag_core::errors::{DiagError, DiagResult, TransportError};
use reqwest::Url;
use serde::de::DeserializeOwned;

/// HTTP methods used by the diagnostics API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved outgoing request.
#[derive(Clone)]
pub struct HttpRequest {
    method: Method,
    url: Url,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First header value with the given name (case-insensitive).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body_bytes(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

// Header values may hold the access token; only names are printed.
impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.headers.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &names)
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}

/// A response whose body has not been read yet.
///
/// The body is a streaming reader; nothing is buffered until a consumer
/// asks for it.
pub struct HttpResponse {
    status: u16,
    url: String,
    body: Box<dyn Read + Send>,
}

impl HttpResponse {
    pub fn new(status: u16, url: impl Into<String>, body: Box<dyn Read + Send>) -> Self {
        Self {
            status,
            url: url.into(),
            body,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Hand over the body reader.
    pub fn into_body(self) -> Box<dyn Read + Send> {
        self.body
    }

    /// Read the whole body into memory.
    pub fn bytes(self) -> Result<Vec<u8>, TransportError> {
        let mut bytes = Vec::new();
        let mut body = self.body;
        body.read_to_end(&mut bytes)
            .map_err(|e| TransportError::BodyRead {
                reason: e.to_string(),
            })?;
        Ok(bytes)
    }

    /// Read the whole body as text, replacing invalid UTF-8.
    pub fn text(self) -> Result<String, TransportError> {
        let bytes = self.bytes()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Turn a non-2xx response into [`DiagError::Http`], carrying the body.
    pub fn error_for_status(self) -> DiagResult<Self> {
        if self.is_success() {
            return Ok(self);
        }
        let status = self.status;
        let url = self.url.clone();
        let body = self.text().unwrap_or_default();
        Err(DiagError::Http { url, status, body })
    }

    /// Read and deserialize a JSON body. Invalid UTF-8 is malformed.
    pub fn json<T: DeserializeOwned>(self) -> DiagResult<T> {
        let bytes = self.bytes()?;
        serde_json::from_slice(&bytes).map_err(|e| DiagError::MalformedResponse {
            field: "<body>".to_string(),
            reason: format!("is not valid JSON: {e}"),
        })
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

/// Sends one request and returns the raw response.
///
/// Implementations must not retry and must not interpret status codes.
pub trait HttpTransport: Send + Sync + fmt::Debug {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
