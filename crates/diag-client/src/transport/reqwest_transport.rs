//! Blocking reqwest transport. No retries, no status interpretation.

use diag_core::config::TransportConfig;
use diag_core::errors::TransportError;

use super::http::{HttpRequest, HttpResponse, HttpTransport, Method};

/// [`HttpTransport`] over `reqwest::blocking`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Build a client from transport configuration.
    ///
    /// Without `timeout_secs` requests wait indefinitely.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone());

        if let Some(connect_timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(connect_timeout);
        }
        if !config.ssl_verify {
            tracing::warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e: reqwest::Error| TransportError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };
        let url = request.url().clone();

        let mut req = self.client.request(method, url.clone());
        for (name, value) in request.headers() {
            req = req.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body_bytes() {
            req = req.body(body.to_vec());
        }

        let resp = req.send().map_err(|e: reqwest::Error| {
            if e.is_timeout() {
                TransportError::Timeout {
                    url: url.to_string(),
                }
            } else {
                TransportError::RequestFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = resp.status().as_u16();
        let final_url = resp.url().to_string();
        Ok(HttpResponse::new(status, final_url, Box::new(resp)))
    }
}
