//! HTTP client with tracing.
//!
//! A thin wrapper over reqwest that pins the user agent and adds
//! request/response tracing. The default client sets no request timeout;
//! the pipeline relies on the transport's own defaults, and callers that
//! need a bound use [`HttpClient::with_timeout`].

use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::error::SourceError;

/// User agent string for Vitrine.
const USER_AGENT: &str = concat!("Vitrine/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client wrapper with tracing.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with no request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built. This should only occur
    /// if the system's TLS/SSL configuration is fundamentally broken,
    /// making network operations impossible. This is considered
    /// unrecoverable at runtime.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Creates a new HTTP client with a request timeout.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`HttpClient::new`].
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().unwrap_or_else(|e| {
            panic!(
                "Failed to create HTTP client: {e}. \
                This usually indicates a broken TLS/SSL configuration."
            )
        });

        Self { inner: client }
    }

    /// Performs a GET request.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get(&self, url: &str) -> Result<Response, SourceError> {
        debug!("GET request");

        let response = self.inner.get(url).send().await?;
        debug!(status = %response.status(), "Response received");
        Ok(response)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
