//! Extraction orchestration.
//!
//! The retry controller runs the full pipeline - candidate filter,
//! paragraph normalization, scoring, top-candidate selection, cleaning -
//! up to four times over progressively relaxed option sets, each time on a
//! fresh re-parse of the original HTML so scores and removals never leak
//! between attempts.

use std::collections::HashSet;

use dom_query::Document;
use url::Url;

use crate::clean;
use crate::dom;
use crate::error::{Error, Result};
use crate::next_page;
use crate::options::{ExtractionFlags, Options};
use crate::preprocess;
use crate::result::{count_words, ExtractedContent};
use crate::score;
use crate::site_config::{self, ExtractorKind};
use crate::url_utils;

/// Extract article content from one page.
///
/// Tries the declarative site config when one is configured, then the
/// generic engine with the relaxed-options retry ladder. The result's
/// `content_html` is `None` only when no candidate element existed at all;
/// a final result below the length threshold is returned with a warning.
pub fn extract_content(html: &str, options: &Options) -> Result<ExtractedContent> {
    if html.trim().is_empty() {
        return Err(Error::Parse("empty document".to_string()));
    }

    let base_url = options.base_url();
    let title = options.title.as_deref();
    let min_length = options.effective_min_length();
    let mut warnings = Vec::new();

    let mut content = match &options.extractor {
        ExtractorKind::Site(config) => {
            let configured = site_config::extract_with_config(
                html,
                config,
                base_url.as_ref(),
                title,
                min_length,
            );
            if configured.is_none() {
                tracing::debug!(domain = %config.domain, "site config insufficient, using generic engine");
            }
            configured
        }
        ExtractorKind::Generic => None,
    };

    if content.is_none() {
        content = run_retry_ladder(html, base_url.as_ref(), title, min_length);
    }

    let content_text = content
        .as_deref()
        .map(dom::fragment_text)
        .unwrap_or_default();

    match &content {
        Some(_) if content_text.trim().chars().count() < min_length => {
            warnings.push(format!(
                "extracted content below minimum length of {min_length} characters"
            ));
        }
        None => warnings.push("no content candidate found".to_string()),
        Some(_) => {}
    }

    let next_page_url = base_url
        .as_ref()
        .and_then(|current| detect_next_page(html, current, options));

    let word_count = count_words(&content_text);

    Ok(ExtractedContent {
        content_html: content,
        content_text,
        word_count,
        next_page_url,
        warnings,
    })
}

/// Run the four-attempt retry ladder.
///
/// Returns the first sufficient result, or the last attempt's (possibly
/// short) result when every attempt fell below the threshold.
fn run_retry_ladder(
    html: &str,
    base_url: Option<&Url>,
    title: Option<&str>,
    min_length: usize,
) -> Option<String> {
    let mut last = None;

    for (index, flags) in ExtractionFlags::RETRY_SEQUENCE.iter().enumerate() {
        let attempt = index + 1;
        match extract_once(html, base_url, title, *flags) {
            Some(candidate_html) => {
                let text = dom::fragment_text(&candidate_html);
                let length = text.trim().chars().count();
                if length >= min_length {
                    tracing::debug!(attempt, chars = length, "content accepted");
                    return Some(candidate_html);
                }
                tracing::debug!(attempt, chars = length, "below threshold, relaxing options");
                last = Some(candidate_html);
            }
            None => tracing::debug!(attempt, "no candidate element"),
        }
    }

    last
}

/// One full pipeline run on a fresh working copy.
fn extract_once(
    html: &str,
    base_url: Option<&Url>,
    title: Option<&str>,
    flags: ExtractionFlags,
) -> Option<String> {
    let doc = dom::parse(html);

    if flags.strip_unlikely_candidates {
        preprocess::strip_unlikely_candidates(&doc);
    }
    preprocess::normalize_paragraphs(&doc);

    let scores = score::score_content(&doc, flags.weight_nodes);
    let candidate = score::find_top_candidate(&doc, &scores)?;

    if let Some(merged_html) = score::merge_with_siblings(&candidate, &scores) {
        let content_doc = Document::from(format!("<div>{merged_html}</div>"));
        let root = content_doc.select("body > div");
        clean::clean_content(&root, base_url, title, flags.clean_conditionally);
        Some(root.inner_html().to_string())
    } else {
        clean::clean_content(&candidate, base_url, title, flags.clean_conditionally);
        Some(candidate.inner_html().to_string())
    }
}

/// Detect and validate the next-page URL for this page.
fn detect_next_page(html: &str, current_url: &Url, options: &Options) -> Option<String> {
    let doc = dom::parse(html);

    if let ExtractorKind::Site(config) = &options.extractor {
        if let Some(href) = site_config::next_page_href(&doc, config) {
            let resolved = url_utils::absolutize(&href, current_url);
            if let Some(candidate) = url_utils::parse_absolute(&resolved) {
                if url_utils::is_valid_next_page(&candidate, current_url) {
                    return Some(candidate.to_string());
                }
            }
            tracing::debug!(domain = %config.domain, "configured next-page link failed validation");
        }
    }

    next_page::find_next_page_url(&doc, current_url, &HashSet::new())
}
