//! Transport layer: the request/response types, the [`HttpTransport`] seam,
//! and its reqwest-backed implementation.

pub mod http;
pub mod reqwest_transport;

pub use http::{HttpRequest, HttpResponse, HttpTransport, Method};
pub use reqwest_transport::ReqwestTransport;
