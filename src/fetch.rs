//! Fetch-client interface for pagination.
//!
//! The engine never performs network I/O itself. Subsequent article pages
//! are retrieved through this trait; the implementation owns redirects,
//! timeouts, decoding, and response policy, and surfaces policy violations
//! as [`FetchError`] values.

use async_trait::async_trait;

/// A successfully fetched and decoded page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects; used as the base URL for this page.
    pub url: String,

    /// Decoded document body.
    pub body: String,

    /// Content type reported by the server, if any.
    pub content_type: Option<String>,

    /// HTTP status code.
    pub status: u16,
}

/// Failures a fetch-client implementation reports.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Non-success HTTP status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// Response is not an HTML-like document.
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// Response body exceeded the client's size cap.
    #[error("response body exceeds {limit} bytes")]
    BodyTooLarge {
        /// The client's configured cap.
        limit: usize,
    },

    /// Transport-level failure (DNS, connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),
}

/// Asynchronous page fetcher used by the pagination merger.
///
/// Implementations must be cheap to call sequentially; the merger fetches
/// one page at a time because page N+1's URL is only known after page N is
/// extracted.
#[async_trait]
pub trait FetchClient: Send + Sync {
    /// Fetch and decode a single page.
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}
