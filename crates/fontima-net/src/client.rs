//! HTTP Client
//!
//! Blocking `reqwest` client driven from async code through `smol`'s
//! blocking thread pool.

use std::time::Duration;

use crate::{NetError, Response, Transport};

/// The API only hands out WOFF2 sources to user agents it recognises as
/// modern browsers. Anything else gets TTF.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Request timeout
    pub request_timeout: Duration,
    /// Max redirects to follow (0 = disable)
    pub max_redirects: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.into(),
            connect_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(60),
            max_redirects: 10,
        }
    }
}

/// HTTP client builder
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    config: ClientConfig,
}

impl HttpClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_agent(mut self, ua: &str) -> Self {
        self.config.user_agent = ua.to_string();
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    pub fn max_redirects(mut self, max: usize) -> Self {
        self.config.max_redirects = max;
        self
    }

    pub fn build(self) -> Result<HttpClient, NetError> {
        HttpClient::with_config(self.config)
    }
}

/// HTTP client
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: ClientConfig,
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, NetError> {
        Self::builder().build()
    }

    /// Create a client builder
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// Create with custom config
    pub fn with_config(config: ClientConfig) -> Result<Self, NetError> {
        let redirects = if config.max_redirects == 0 {
            reqwest::redirect::Policy::none()
        } else {
            reqwest::redirect::Policy::limited(config.max_redirects)
        };

        let inner = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .redirect(redirects)
            .build()
            .map_err(|e| NetError::Network(e.to_string()))?;

        Ok(Self { config, inner })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Transport for HttpClient {
    async fn get(&self, url: &str) -> Result<Response, NetError> {
        tracing::debug!("HTTP GET {}", url);
        let client = self.inner.clone();
        let url = url.to_string();
        smol::unblock(move || blocking_get(&client, &url)).await
    }

    async fn content_length(&self, url: &str) -> Result<u64, NetError> {
        tracing::debug!("HTTP GET (content-length) {}", url);
        let client = self.inner.clone();
        let url = url.to_string();
        smol::unblock(move || blocking_content_length(&client, &url)).await
    }
}

fn send(client: &reqwest::blocking::Client, url: &str) -> Result<reqwest::blocking::Response, NetError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| NetError::InvalidUrl(format!("{url}: {e}")))?;
    client
        .get(parsed)
        .send()
        .map_err(|e| NetError::Network(e.to_string()))
}

fn blocking_get(client: &reqwest::blocking::Client, url: &str) -> Result<Response, NetError> {
    let response = send(client, url)?;
    let status = response.status().as_u16();

    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    let body = response
        .bytes()
        .map_err(|e| NetError::Network(e.to_string()))?
        .to_vec();

    tracing::debug!("HTTP {} {} ({} bytes)", status, url, body.len());
    Ok(Response { status, headers, body })
}

// The body is never read: dropping the response closes the connection.
fn blocking_content_length(client: &reqwest::blocking::Client, url: &str) -> Result<u64, NetError> {
    let response = send(client, url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(NetError::HttpError { status: status.as_u16() });
    }

    response
        .headers()
        .get(reqwest::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .ok_or_else(|| NetError::MissingContentLength(url.to_string()))
}
