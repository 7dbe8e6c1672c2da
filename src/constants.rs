//! Compiled hint patterns, tag sets, and scoring thresholds.
//!
//! All patterns are compiled once at startup using `LazyLock` and are
//! read-only afterwards. The word lists are alternation patterns applied to
//! the concatenated `class` and `id` attributes of an element, matched
//! case-insensitively as substrings.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Candidate filter patterns
// =============================================================================

/// Matches class/id combinations of elements that are almost never article
/// content: navigation, ads, comment threads, share widgets, and similar.
pub static CANDIDATES_BLACKLIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)ad-break|adbox|advert|addthis|agegate|aux|blogger-labels|combx|comment|conversation|disqus|entry-unrelated|extra|foot|form|header|hidden|loader|login|menu|meta|nav|outbrain|pager|pagination|predicta|presence_control_external|popup|printfriendly|related|remove|remark|rss|share|shoutbox|sidebar|sociable|sponsor|taboola|tools",
    )
    .expect("CANDIDATES_BLACKLIST regex")
});

/// Matches class/id combinations that must survive the candidate filter even
/// when the blacklist also matches (e.g. "form" inside "platform-content").
pub static CANDIDATES_WHITELIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)and|article|body|blogindex|column|content|entry-content-asset|format|hfeed|hentry|hatom|main|page|posts|shadow",
    )
    .expect("CANDIDATES_WHITELIST regex")
});

/// Tags the candidate filter never removes, whatever their class/id says.
pub const PROTECTED_TAGS: &[&str] = &["html", "body", "article", "main"];

// =============================================================================
// Scoring hint patterns
// =============================================================================

/// Class/id fragments that suggest an element carries article text.
pub static POSITIVE_SCORE_HINTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)article|articlecontent|instapaper_body|blog|body|content|entry-content-asset|entry|hentry|main|Normal|page|pagination|permalink|post|story|text|[-_]copy|\Bcopy",
    )
    .expect("POSITIVE_SCORE_HINTS regex")
});

/// Class/id fragments that suggest boilerplate, chrome, or metadata.
pub static NEGATIVE_SCORE_HINTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)adbox|advert|author|bio|bookmark|bottom|byline|clear|com-|combx|comment|comment\B|contact|copy|credit|crumb|date|deck|excerpt|featured|foot|footer|footnote|graf|head|info|infotext|instapaper_ignore|jump|linebreak|link|masthead|media|meta|modal|outbrain|promo|pr_|related|respond|roundcontent|scroll|secondary|share|shopping|shoutbox|side|sidebar|sociable|sponsor|taboola|tags|tools|widget",
    )
    .expect("NEGATIVE_SCORE_HINTS regex")
});

/// Class fragments that suggest a photo or figure container.
pub static PHOTO_HINTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)figure|photo|image|caption").expect("PHOTO_HINTS regex")
});

/// Literal class used by blog templates for inline content assets.
pub static CONTENT_ASSET_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)entry-content-asset").expect("CONTENT_ASSET_HINT regex"));

/// (container, content) selector pairs of hNews / blog-publishing templates.
/// A match grants the matched content element's parent a flat score bonus.
pub const HNEWS_CONTENT_SELECTORS: &[(&str, &str)] = &[
    (".hentry", ".entry-content"),
    ("entry", ".entry-content"),
    (".entry", ".entry_content"),
    (".post", ".postbody"),
    (".post", ".post_body"),
    (".post", ".post-body"),
];

// =============================================================================
// Tag sets
// =============================================================================

/// Inline and void tags that can never become the top candidate, however
/// much score they accumulate.
pub const NON_TOP_CANDIDATE_TAGS: &[&str] = &[
    "br", "b", "i", "label", "hr", "area", "base", "basefont", "input", "img", "link", "meta",
];

/// Block-indicator selector: a `div` containing none of these is rewritten
/// to a `p` before scoring.
pub const DIV_TO_P_BLOCK_SELECTOR: &str = "a, blockquote, dl, div, img, p, pre, table";

/// Tags removed wholesale from the candidate subtree during cleaning.
pub const JUNK_TAG_SELECTOR: &str =
    "script, style, link, noscript, iframe, object, embed, form, input, button, textarea, select";

/// Container tags subject to conditional link-density pruning.
pub const CONDITIONAL_CLEAN_SELECTOR: &str = "table, ul, div";

/// Attributes preserved by the cleaning pass (`data-*` is kept as well).
pub const KEEP_ATTRS: &[&str] = &["href", "src", "alt", "title", "class", "id"];

// =============================================================================
// Scoring and cleaning thresholds
// =============================================================================

/// Flat bonus granted to the parent of an hNews content match.
pub const HNEWS_BONUS: i32 = 80;

/// Weight applied for a positive class/id hint match.
pub const POSITIVE_HINT_WEIGHT: i32 = 25;

/// Weight applied for a negative class/id hint match.
pub const NEGATIVE_HINT_WEIGHT: i32 = 25;

/// Weight applied for a photo-hint class match.
pub const PHOTO_HINT_WEIGHT: i32 = 10;

/// Weight applied for the content-asset class match.
pub const CONTENT_ASSET_WEIGHT: i32 = 25;

/// Floor score of any scored paragraph.
pub const PARAGRAPH_BASE_SCORE: i32 = 1;

/// One length point per this many characters of paragraph text.
pub const CHARS_PER_LENGTH_POINT: usize = 100;

/// Cap on the paragraph length bonus.
pub const LENGTH_BONUS_CAP: i32 = 3;

/// Fraction of the top candidate's score a direct sibling must reach to be
/// merged into the content container.
pub const SIBLING_SCORE_FRACTION: f64 = 0.2;

/// Link density above which a container is considered navigation-like.
pub const LINK_DENSITY_LIMIT: f64 = 0.5;

/// Containers with at least this much text survive link-density pruning
/// regardless of density.
pub const CONDITIONAL_TEXT_FLOOR: usize = 500;

/// Images with an explicit width or height below this are tracking pixels
/// or spacers and get removed.
pub const TINY_MEDIA_LIMIT: u32 = 10;

/// Minimum plain-text length for extracted content to be accepted.
pub const MINIMUM_CONTENT_LENGTH: usize = 200;

/// Hard cap on the number of pages a single article parse will touch.
pub const MAX_PAGES: usize = 25;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blacklist_matches_common_boilerplate_names() {
        assert!(CANDIDATES_BLACKLIST.is_match("sidebar-widget"));
        assert!(CANDIDATES_BLACKLIST.is_match("comment-thread"));
        assert!(CANDIDATES_BLACKLIST.is_match("main-nav"));
        assert!(CANDIDATES_BLACKLIST.is_match("SHARE-BUTTONS"));
        assert!(!CANDIDATES_BLACKLIST.is_match("storytext"));
    }

    #[test]
    fn whitelist_matches_content_containers() {
        assert!(CANDIDATES_WHITELIST.is_match("article-body"));
        assert!(CANDIDATES_WHITELIST.is_match("hentry"));
        assert!(CANDIDATES_WHITELIST.is_match("entry-content-asset"));
        assert!(!CANDIDATES_WHITELIST.is_match("disqus_thread"));
    }

    #[test]
    fn hints_are_case_insensitive() {
        assert!(POSITIVE_SCORE_HINTS.is_match("ARTICLE"));
        assert!(NEGATIVE_SCORE_HINTS.is_match("Sidebar"));
        assert!(PHOTO_HINTS.is_match("Figure"));
    }
}
