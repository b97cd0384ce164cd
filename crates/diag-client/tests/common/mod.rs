//! Shared helpers: an in-memory transport that records requests and
//! replays canned responses.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{self, Read};
use std::sync::{Arc, Mutex};

use diag_client::auth::StaticToken;
use diag_client::resolver::FixedUrl;
use diag_client::transport::{HttpRequest, HttpResponse, HttpTransport};
use diag_client::Session;
use diag_core::config::AuthScheme;
use diag_core::errors::TransportError;

pub const BASE: &str = "https://master.example.com/system/health/v1/report/diagnostics/";
pub const TOKEN: &str = "test-acs-token";

#[derive(Debug)]
enum Reply {
    Chunks {
        status: u16,
        chunks: Vec<Vec<u8>>,
        fail_after: bool,
    },
    Fail(String),
}

/// Reader that hands out one pre-cut chunk per `read` call.
pub struct ChunkedReader {
    chunks: VecDeque<Vec<u8>>,
    fail_after: bool,
}

impl ChunkedReader {
    pub fn new(chunks: Vec<Vec<u8>>, fail_after: bool) -> Self {
        Self {
            chunks: chunks.into(),
            fail_after,
        }
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        while let Some(mut chunk) = self.chunks.pop_front() {
            if chunk.is_empty() {
                continue;
            }
            let n = buf.len().min(chunk.len());
            buf[..n].copy_from_slice(&chunk[..n]);
            if n < chunk.len() {
                chunk.drain(..n);
                self.chunks.push_front(chunk);
            }
            return Ok(n);
        }
        if self.fail_after {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer hung up"));
        }
        Ok(0)
    }
}

#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push_chunks(status, vec![body.to_string().into_bytes()]);
    }

    pub fn push_text(&self, status: u16, body: &str) {
        self.push_chunks(status, vec![body.as_bytes().to_vec()]);
    }

    pub fn push_chunks(&self, status: u16, chunks: Vec<Vec<u8>>) {
        self.replies.lock().unwrap().push_back(Reply::Chunks {
            status,
            chunks,
            fail_after: false,
        });
    }

    /// A 200 response whose body errors after the given chunks.
    pub fn push_truncated(&self, chunks: Vec<Vec<u8>>) {
        self.replies.lock().unwrap().push_back(Reply::Chunks {
            status: 200,
            chunks,
            fail_after: true,
        });
    }

    pub fn push_failure(&self, reason: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Fail(reason.to_string()));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_paths(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r.url().path().to_string())
            .collect()
    }
}

impl HttpTransport for MockTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url().to_string();
        self.requests.lock().unwrap().push(request);
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Chunks {
                status,
                chunks,
                fail_after,
            }) => Ok(HttpResponse::new(
                status,
                url,
                Box::new(ChunkedReader::new(chunks, fail_after)),
            )),
            Some(Reply::Fail(reason)) => Err(TransportError::RequestFailed { url, reason }),
            None => Err(TransportError::RequestFailed {
                url,
                reason: "no canned response left".to_string(),
            }),
        }
    }
}

pub fn session(transport: &Arc<MockTransport>) -> Session {
    Session::new(
        transport.clone(),
        &FixedUrl::parse(BASE).unwrap(),
        &StaticToken::new(TOKEN),
        AuthScheme::Acs,
    )
    .unwrap()
}

pub fn path(suffix: &str) -> String {
    format!("/system/health/v1/report/diagnostics/{suffix}")
}
