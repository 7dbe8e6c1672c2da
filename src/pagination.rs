//! Multi-page article merging.
//!
//! Fetches subsequent pages through the [`FetchClient`] collaborator,
//! extracts each with the same engine, and concatenates content in page
//! order. Fetches are sequential because page N+1's URL is only known after
//! page N is extracted. A hard page cap bounds latency and memory on
//! pathological sites, and a cooperative cancellation token is checked
//! before every fetch.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::dom;
use crate::error::Result;
use crate::extract;
use crate::fetch::FetchClient;
use crate::options::Options;
use crate::result::{count_words, ParseResult};

/// Cooperative cancellation flag for a running parse.
///
/// Cloning shares the flag; any clone can cancel. The pagination loop
/// checks it before each fetch; the synchronous scoring and cleaning
/// passes are bounded and run to completion.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// A fresh, un-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Extract the document and merge in all subsequent pages.
///
/// The first page's HTML is supplied by the caller; further pages come from
/// `fetcher`. Fetch or extraction failure on a later page stops pagination
/// but keeps everything accumulated so far (partial success). The page cap
/// counts the first page, so at most `max_pages - 1` fetches are issued.
pub async fn extract_all_pages(
    html: &str,
    fetcher: &dyn FetchClient,
    options: &Options,
    cancel: &CancelToken,
) -> Result<ParseResult> {
    let first = extract::extract_content(html, options)?;

    let mut combined_html = first.content_html.clone().unwrap_or_default();
    let mut warnings = first.warnings.clone();
    let mut total_pages = 1usize;
    let mut rendered_pages = usize::from(!combined_html.is_empty());
    let mut next_url = first.next_page_url.clone();

    let mut seen: HashSet<String> = HashSet::new();
    if let Some(url) = &options.url {
        seen.insert(url.clone());
    }

    let max_pages = options.effective_max_pages();

    while let Some(url) = next_url.take() {
        if total_pages >= max_pages {
            tracing::warn!(cap = max_pages, "page cap reached, stopping pagination");
            warnings.push(format!("stopped at page cap of {max_pages}"));
            break;
        }
        if cancel.is_cancelled() {
            tracing::debug!(%url, "pagination cancelled before fetch");
            warnings.push("pagination cancelled".to_string());
            break;
        }
        if !seen.insert(url.clone()) {
            break;
        }

        let page = match fetcher.fetch(&url).await {
            Ok(page) => page,
            Err(err) => {
                tracing::warn!(%url, error = %err, "fetch failed, keeping pages so far");
                warnings.push(format!("fetch failed for {url}: {err}"));
                break;
            }
        };
        total_pages += 1;

        let page_options = Options {
            url: Some(if page.url.is_empty() { url } else { page.url.clone() }),
            ..options.clone()
        };
        let extracted = match extract::extract_content(&page.body, &page_options) {
            Ok(extracted) => extracted,
            Err(err) => {
                tracing::warn!(error = %err, "page extraction failed, keeping pages so far");
                warnings.push(format!("extraction failed on page {total_pages}: {err}"));
                break;
            }
        };

        if let Some(chunk) = extracted.content_html {
            if !chunk.is_empty() {
                if !combined_html.is_empty() {
                    combined_html.push('\n');
                }
                combined_html.push_str(&chunk);
                rendered_pages += 1;
            }
        }

        next_url = extracted.next_page_url;
    }

    let content_text = dom::fragment_text(&combined_html);
    let word_count = count_words(&content_text);

    Ok(ParseResult {
        content_html: (!combined_html.is_empty()).then_some(combined_html),
        content_text,
        word_count,
        total_pages,
        rendered_pages,
        warnings,
    })
}
