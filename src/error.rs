//! Error types for rs-longform.
//!
//! This module defines the error types returned by extraction operations.
//! Note that "no article content found" is deliberately NOT an error: the
//! retry controller reports it through [`crate::ExtractedContent`] so callers
//! can distinguish a broken document from a document without an article.

use crate::fetch::FetchError;

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input HTML could not be processed at all (e.g. empty input).
    #[error("HTML parsing failed: {0}")]
    Parse(String),

    /// Fetching a page failed. Fatal only for the first page of a parse;
    /// pagination fetch failures degrade to partial results instead.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
