//! Fontima Networking
//!
//! HTTP transport used to talk to the Google Fonts API and its font CDN.

pub mod client;

pub use client::{ClientConfig, HttpClient, HttpClientBuilder};

use std::future::Future;

/// Something that can perform the two GET flavours the optimizer needs.
///
/// Implementations must not retry on their own; retry policy belongs to the
/// caller. The futures are awaited one at a time by the pipeline.
pub trait Transport {
    /// GET `url` and return the whole response.
    fn get(&self, url: &str) -> impl Future<Output = Result<Response, NetError>> + Send;

    /// GET `url` and return only its declared `content-length`.
    fn content_length(&self, url: &str) -> impl Future<Output = Result<u64, NetError>> + Send;
}

/// HTTP Response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    /// Build a `200 OK` text response.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: vec![("content-type".to_string(), "text/css; charset=utf-8".to_string())],
            body: body.into().into_bytes(),
        }
    }

    /// Check if response is OK (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get header value (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Get body as text
    pub fn text(&self) -> Result<&str, NetError> {
        std::str::from_utf8(&self.body).map_err(|e| NetError::InvalidEncoding(e.to_string()))
    }
}

/// Network error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetError {
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("Missing content-length for {0}")]
    MissingContentLength(String),

    #[error("Unexpected response body: {0}")]
    UnexpectedBody(String),
}
