//! Next-page URL detection.
//!
//! Scores every same-host anchor as a potential "next page" link using
//! rel attributes, link text, pagination class hints, and page-number
//! progression. Multiple anchors pointing at the same target accumulate
//! score under one candidate. A candidate only wins above a confidence
//! floor; anything weaker reads as "no next page".

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use dom_query::{Document, Selection};
use regex::Regex;
use url::Url;

use crate::dom;
use crate::url_utils;

#[allow(clippy::expect_used)]
static NEXT_LINK_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(next(\s+page)?|more|older(\s+posts)?|[»›>])$").expect("NEXT_LINK_TEXT regex")
});

#[allow(clippy::expect_used)]
static PREV_LINK_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(prev|previous|first|last|back)\b").expect("PREV_LINK_HINT regex")
});

#[allow(clippy::expect_used)]
static PAGINATION_ATTR_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)pag(e|er|ing|ination)|next").expect("PAGINATION_ATTR_HINT regex")
});

#[allow(clippy::expect_used)]
static TRAILING_PAGE_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    // 1-3 digits so years in article slugs don't read as page numbers
    Regex::new(r"(?:^|/)(?:page[/-]?)?(\d{1,3})/?$").expect("TRAILING_PAGE_SEGMENT regex")
});

const REL_NEXT_BONUS: i32 = 60;
const EXACT_TEXT_BONUS: i32 = 50;
const CONTAINS_NEXT_BONUS: i32 = 20;
const PROGRESSION_BONUS: i32 = 50;
const ATTR_HINT_BONUS: i32 = 25;
const LONG_TEXT_PENALTY: i32 = 25;
const PREV_PENALTY: i32 = 65;
const COMMENT_PENALTY: i32 = 50;
const SCORE_FLOOR: i32 = 50;

/// Detect the next-page URL for the page at `current_url`.
///
/// `seen` holds normalized URLs of pages already visited in this pagination
/// chain; links back into the chain are never candidates.
#[must_use]
pub fn find_next_page_url(
    doc: &Document,
    current_url: &Url,
    seen: &HashSet<String>,
) -> Option<String> {
    let current_page = trailing_page_number(current_url).unwrap_or(1);
    let mut candidates: HashMap<String, i32> = HashMap::new();

    let anchors = doc.select("a[href]");
    for anchor in dom::elements(&anchors) {
        let Some(href) = dom::get_attribute(&anchor, "href") else {
            continue;
        };
        let resolved = url_utils::absolutize(&href, current_url);
        let Some(candidate) = url_utils::parse_absolute(&resolved) else {
            continue;
        };
        if !url_utils::is_valid_next_page(&candidate, current_url) {
            continue;
        }

        let normalized = normalize(&candidate);
        if seen.contains(&normalized) {
            continue;
        }

        *candidates.entry(normalized).or_insert(0) += score_link(&anchor, &candidate, current_page);
    }

    candidates
        .into_iter()
        .filter(|(_, score)| *score >= SCORE_FLOOR)
        .max_by_key(|(url, score)| (*score, std::cmp::Reverse(url.len())))
        .map(|(url, _)| url)
}

/// Score one anchor as a next-page candidate.
fn score_link(anchor: &Selection, candidate: &Url, current_page: u32) -> i32 {
    let mut score = 0;

    let text = dom::text_content(anchor).trim().to_lowercase();
    if text.chars().count() > 25 {
        score -= LONG_TEXT_PENALTY;
    }
    if NEXT_LINK_TEXT.is_match(&text) {
        score += EXACT_TEXT_BONUS;
    } else if text.contains("next") {
        score += CONTAINS_NEXT_BONUS;
    }
    if PREV_LINK_HINT.is_match(&text) {
        score -= PREV_PENALTY;
    }
    if let Ok(number) = text.parse::<u32>() {
        if number == current_page + 1 {
            score += PROGRESSION_BONUS;
        }
    }

    if let Some(rel) = dom::get_attribute(anchor, "rel") {
        let rel = rel.to_lowercase();
        if rel.split_whitespace().any(|token| token == "next") {
            score += REL_NEXT_BONUS;
        }
        if rel.contains("prev") {
            score -= PREV_PENALTY;
        }
    }

    let class = dom::get_attribute(anchor, "class").unwrap_or_default();
    let id = dom::get_attribute(anchor, "id").unwrap_or_default();
    let hints = format!("{class} {id}");
    if PAGINATION_ATTR_HINT.is_match(&hints) {
        score += ATTR_HINT_BONUS;
    }
    if PREV_LINK_HINT.is_match(&hints) {
        score -= PREV_PENALTY;
    }

    if trailing_page_number(candidate) == Some(current_page + 1) {
        score += PROGRESSION_BONUS;
    }
    if candidate.as_str().to_lowercase().contains("comment") {
        score -= COMMENT_PENALTY;
    }

    score
}

/// Page number the URL itself claims, from a `page`-style query parameter
/// or a trailing numeric path segment.
#[must_use]
pub fn trailing_page_number(url: &Url) -> Option<u32> {
    for (key, value) in url.query_pairs() {
        if matches!(key.as_ref(), "page" | "paged" | "p" | "pg") {
            if let Ok(number) = value.parse::<u32>() {
                return Some(number);
            }
        }
    }

    TRAILING_PAGE_SEGMENT
        .captures(url.path())
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u32>().ok())
}

/// Normalized candidate key: the URL without its fragment.
fn normalize(url: &Url) -> String {
    let mut url = url.clone();
    url.set_fragment(None);
    url.to_string()
}
