//! Pre-scoring document passes.
//!
//! Two destructive passes run on the working copy before scoring: the
//! candidate filter, which drops elements whose class/id marks them as
//! boilerplate, and the paragraph normalizer, which rewrites text-only
//! `div` elements to `p` so the scorer sees one uniform paragraph unit.

use dom_query::Document;

use crate::constants::{
    CANDIDATES_BLACKLIST, CANDIDATES_WHITELIST, DIV_TO_P_BLOCK_SELECTOR, PROTECTED_TAGS,
};
use crate::dom;

/// Remove elements whose combined class/id matches the blacklist.
///
/// Whitelisted combinations are kept unconditionally, and the structural
/// tags `html`, `body`, `article`, `main` always survive. Mutates the
/// document in place; callers hand in a working copy, never an original.
pub fn strip_unlikely_candidates(doc: &Document) {
    let all = doc.select("*");
    for element in dom::elements(&all) {
        let class = dom::get_attribute(&element, "class").unwrap_or_default();
        let id = dom::get_attribute(&element, "id").unwrap_or_default();
        let combined = format!("{class} {id}");
        if combined.trim().is_empty() {
            continue;
        }

        if CANDIDATES_WHITELIST.is_match(&combined) {
            continue;
        }
        if !CANDIDATES_BLACKLIST.is_match(&combined) {
            continue;
        }

        let tag = dom::tag_name(&element).unwrap_or_default();
        if PROTECTED_TAGS.contains(&tag.as_str()) {
            continue;
        }
        element.remove();
    }
}

/// Rewrite `div` elements without block-level descendants into `p`.
///
/// Runs in document order, so a wrapper `div` sees its inner `div`s before
/// they are rewritten and correctly stays a `div`.
pub fn normalize_paragraphs(doc: &Document) {
    let all_divs = doc.select("div");
    for div in dom::elements(&all_divs) {
        if !div.select(DIV_TO_P_BLOCK_SELECTOR).exists() {
            div.rename("p");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blacklisted_elements_are_removed() {
        let doc = dom::parse(
            r#"<html><body>
                <div class="sidebar">widgets</div>
                <div id="storytext"><p>Real text.</p></div>
            </body></html>"#,
        );
        strip_unlikely_candidates(&doc);

        assert!(!doc.select(".sidebar").exists());
        assert!(doc.select("#storytext").exists());
    }

    #[test]
    fn whitelist_overrides_blacklist() {
        // "article-sidebar" hits both lists; the whitelist wins.
        let doc = dom::parse(r#"<html><body><div class="article-sidebar">kept</div></body></html>"#);
        strip_unlikely_candidates(&doc);
        assert!(doc.select(".article-sidebar").exists());
    }

    #[test]
    fn protected_tags_survive_blacklist_match() {
        let doc = dom::parse(
            r#"<html><body class="advertisement">
                <article class="advertisement"><p>text</p></article>
                <main class="sponsor"><p>text</p></main>
            </body></html>"#,
        );
        strip_unlikely_candidates(&doc);

        assert!(doc.select("body").exists());
        assert!(doc.select("article").exists());
        assert!(doc.select("main").exists());
    }

    #[test]
    fn filter_is_idempotent() {
        let html = r#"<html><body>
            <nav class="menu">links</nav>
            <div class="share">buttons</div>
            <div id="content"><p>body</p></div>
        </body></html>"#;

        let once = dom::parse(html);
        strip_unlikely_candidates(&once);
        let after_once = once.html().to_string();

        strip_unlikely_candidates(&once);
        assert_eq!(once.html().to_string(), after_once);
    }

    #[test]
    fn bare_div_becomes_paragraph() {
        let doc = dom::parse(r#"<html><body><div>just text</div></body></html>"#);
        normalize_paragraphs(&doc);

        assert!(!doc.select("div").exists());
        assert_eq!(doc.select("p").text(), "just text".into());
    }

    #[test]
    fn div_with_block_descendants_stays_div() {
        let doc = dom::parse(
            r#"<html><body><div id="wrap"><p>inner paragraph</p></div></body></html>"#,
        );
        normalize_paragraphs(&doc);

        assert!(doc.select("div#wrap").exists());
        assert_eq!(doc.select("p").length(), 1);
    }

    #[test]
    fn nested_bare_div_converts_but_wrapper_does_not() {
        let doc = dom::parse(
            r#"<html><body><div id="outer"><div id="inner">text only</div></div></body></html>"#,
        );
        normalize_paragraphs(&doc);

        assert!(doc.select("div#outer").exists());
        assert!(doc.select("p#inner").exists());
    }
}
