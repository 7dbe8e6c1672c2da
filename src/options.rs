//! Configuration options for content extraction.
//!
//! [`Options`] carries the per-parse configuration (base URL, known title,
//! pagination limits, extractor dispatch). [`ExtractionFlags`] is the small
//! transient option set the retry controller relaxes between attempts; it is
//! never persisted on `Options`.

use crate::constants::{MAX_PAGES, MINIMUM_CONTENT_LENGTH};
use crate::site_config::ExtractorKind;
use url::Url;

/// Configuration options for a parse.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_longform::Options;
///
/// let options = Options {
///     url: Some("https://example.com/story".to_string()),
///     title: Some("Story headline".to_string()),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Source URL of the document.
    ///
    /// Used as the base for rewriting relative `href`/`src` attributes and
    /// as the reference point for next-page detection. Without it, links
    /// stay relative and pagination is not attempted.
    pub url: Option<String>,

    /// The already-extracted article title, if known.
    ///
    /// Used only to drop headers inside the body that duplicate the title.
    pub title: Option<String>,

    /// Extractor dispatch: a declarative per-site configuration, or the
    /// generic scoring engine.
    pub extractor: ExtractorKind,

    /// Minimum plain-text length for content to be accepted without
    /// retrying with relaxed options.
    ///
    /// Default: `200`
    pub min_content_length: usize,

    /// Hard cap on pages visited for one article, first page included.
    ///
    /// Default: `25`
    pub max_pages: usize,
}

impl Options {
    /// Standard settings with a source URL.
    #[must_use]
    pub fn for_url(url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
            ..Self::standard()
        }
    }

    /// Standard settings.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            url: None,
            title: None,
            extractor: ExtractorKind::Generic,
            min_content_length: MINIMUM_CONTENT_LENGTH,
            max_pages: MAX_PAGES,
        }
    }

    /// The parsed base URL, when `url` is set and absolute.
    #[must_use]
    pub fn base_url(&self) -> Option<Url> {
        self.url
            .as_deref()
            .and_then(crate::url_utils::parse_absolute)
    }

    /// Effective minimum content length (zero is treated as the default).
    #[must_use]
    pub fn effective_min_length(&self) -> usize {
        if self.min_content_length == 0 {
            MINIMUM_CONTENT_LENGTH
        } else {
            self.min_content_length
        }
    }

    /// Effective page cap (zero is treated as the default).
    #[must_use]
    pub fn effective_max_pages(&self) -> usize {
        if self.max_pages == 0 {
            MAX_PAGES
        } else {
            self.max_pages
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::standard()
    }
}

/// The three independent switches the retry controller relaxes, in order,
/// when an attempt yields insufficient content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ExtractionFlags {
    /// Remove blacklisted class/id candidates before scoring.
    pub strip_unlikely_candidates: bool,

    /// Apply class/id hint weighting to paragraph scores.
    pub weight_nodes: bool,

    /// Prune containers by link density during cleaning.
    pub clean_conditionally: bool,
}

impl ExtractionFlags {
    /// All switches on - the first, strictest attempt.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            strip_unlikely_candidates: true,
            weight_nodes: true,
            clean_conditionally: true,
        }
    }

    /// The ordered attempt sequence: each entry relaxes one more switch.
    pub const RETRY_SEQUENCE: [Self; 4] = [
        Self::all(),
        Self {
            strip_unlikely_candidates: false,
            weight_nodes: true,
            clean_conditionally: true,
        },
        Self {
            strip_unlikely_candidates: false,
            weight_nodes: false,
            clean_conditionally: true,
        },
        Self {
            strip_unlikely_candidates: false,
            weight_nodes: false,
            clean_conditionally: false,
        },
    ];
}

impl Default for ExtractionFlags {
    fn default() -> Self {
        Self::all()
    }
}
