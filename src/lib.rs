//! # rs-longform
//!
//! Generic article content extraction for arbitrary web pages.
//!
//! This library locates the main article body in unstructured HTML by
//! scoring paragraph-like nodes on class/id hints, punctuation density, and
//! text length, then cleans the winning candidate subtree and, for
//! multi-page articles, merges subsequent pages fetched through a
//! caller-supplied client.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_longform::extract;
//!
//! let html = r#"<html><body><article>
//! <p>Article prose, with commas, long enough to look like writing.</p>
//! </article></body></html>"#;
//!
//! let result = extract(html)?;
//! println!("{}", result.content_text);
//! # Ok::<(), rs_longform::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Candidate scoring**: comma and length heuristics with upward score
//!   propagation, so article wrappers win over navigation and ads
//! - **Retry ladder**: four progressively relaxed option sets until enough
//!   content is found
//! - **Cleaning**: junk tags, tracking pixels, duplicate headers, and
//!   link-dense blocks are stripped; relative URLs become absolute
//! - **Pagination**: next-page detection plus sequential fetching and
//!   merging, capped at 25 pages

mod error;
mod extract;
mod options;
mod result;

/// Pattern lists, tag sets, and scoring thresholds.
pub mod constants;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Content cleaning passes.
pub mod clean;

/// Fetch-client interface for pagination.
pub mod fetch;

/// Next-page URL detection heuristics.
pub mod next_page;

/// Multi-page article merging.
pub mod pagination;

/// Candidate filter and paragraph normalizer.
pub mod preprocess;

/// Content scoring and top-candidate selection.
pub mod score;

/// Declarative per-site extraction configs.
pub mod site_config;

/// URL resolution and next-page validation.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use fetch::{FetchClient, FetchError, FetchedPage};
pub use options::{ExtractionFlags, Options};
pub use pagination::CancelToken;
pub use result::{ExtractedContent, ParseResult};
pub use site_config::{ExtractorKind, SiteConfig};

/// Extracts the main article content from an HTML document using default
/// options.
///
/// # Example
///
/// ```rust
/// use rs_longform::extract;
///
/// let html = "<html><body><article><p>Content</p></article></body></html>";
/// let result = extract(html)?;
/// assert!(result.content_html.is_some());
/// # Ok::<(), rs_longform::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ExtractedContent> {
    extract_with_options(html, &Options::default())
}

/// Extracts the main article content with custom options.
///
/// # Example
///
/// ```rust
/// use rs_longform::{extract_with_options, Options};
///
/// let html = "<html><body><article><p>Content</p></article></body></html>";
/// let options = Options {
///     url: Some("https://example.com/story".to_string()),
///     title: Some("Story headline".to_string()),
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// # Ok::<(), rs_longform::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractedContent> {
    extract::extract_content(html, options)
}

/// Extracts an article and merges in all subsequent pages.
///
/// The first page's HTML is supplied directly; later pages are fetched
/// through `fetcher`, sequentially, up to the configured page cap. Fetch
/// failures on later pages degrade to a partial result rather than an
/// error.
///
/// # Example
///
/// ```rust,no_run
/// use rs_longform::{extract_all_pages, CancelToken, FetchClient, FetchError, FetchedPage, Options};
///
/// struct Client;
///
/// #[async_trait::async_trait]
/// impl FetchClient for Client {
///     async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
///         Err(FetchError::Network(format!("no transport for {url}")))
///     }
/// }
///
/// # async fn run() -> Result<(), rs_longform::Error> {
/// let html = "<html><body><article><p>Page one</p></article></body></html>";
/// let options = Options::for_url("https://example.com/story");
/// let result = extract_all_pages(html, &Client, &options, &CancelToken::new()).await?;
/// println!("{} pages, {} words", result.rendered_pages, result.word_count);
/// # Ok(())
/// # }
/// ```
pub async fn extract_all_pages(
    html: &str,
    fetcher: &dyn FetchClient,
    options: &Options,
    cancel: &CancelToken,
) -> Result<ParseResult> {
    pagination::extract_all_pages(html, fetcher, options, cancel).await
}
