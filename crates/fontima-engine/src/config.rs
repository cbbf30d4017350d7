//! Optimizer Configuration

use std::num::NonZeroUsize;

use fontima_net::ClientConfig;

/// Characters per `text=` request unless configured otherwise.
// Evaluated at compile time.
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = NonZeroUsize::new(1000).unwrap();

/// Optimizer configuration options
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum characters sent in one chunk request
    pub chunk_size: NonZeroUsize,

    /// HTTP client settings
    pub client: ClientConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            client: ClientConfig::default(),
        }
    }
}

impl Config {
    pub fn with_chunk_size(mut self, chunk_size: NonZeroUsize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_client(mut self, client: ClientConfig) -> Self {
        self.client = client;
        self
    }
}
