//! Declarative per-site extraction configs and extractor dispatch.
//!
//! A [`SiteConfig`] is pure data: ordered CSS selectors naming where a
//! specific site keeps its article body, what to strip from it, and where
//! its pagination links live. The engine consumes the selectors and nothing
//! else; selector maintenance lives outside this crate.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::clean;
use crate::dom::{self, Document};

/// Extractor dispatch for one parse: a site-specific declarative config, or
/// the generic scoring engine.
#[derive(Debug, Clone, Default)]
pub enum ExtractorKind {
    /// Use the generic scoring engine.
    #[default]
    Generic,

    /// Try the site's declarative selectors first, falling back to the
    /// generic engine when they yield insufficient content.
    Site(SiteConfig),
}

/// Declarative extraction rules for one domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Domain these rules apply to, e.g. `"blog.example.com"`.
    pub domain: String,

    /// Selectors for the article body, tried in order.
    #[serde(default)]
    pub content_selectors: Vec<String>,

    /// Selectors removed from a matched body before cleaning.
    #[serde(default)]
    pub strip_selectors: Vec<String>,

    /// Selectors whose first match's `href` is the next-page link.
    #[serde(default)]
    pub next_page_selectors: Vec<String>,
}

/// Extract content using a site's declarative selectors.
///
/// Returns the cleaned inner HTML of the first content selector that yields
/// at least `min_length` characters of text, or `None` so the caller falls
/// back to the generic engine. Invalid selectors are treated as no-match.
pub(crate) fn extract_with_config(
    html: &str,
    config: &SiteConfig,
    base_url: Option<&Url>,
    title: Option<&str>,
    min_length: usize,
) -> Option<String> {
    let doc = dom::parse(html);

    for selector in &config.content_selectors {
        let Some(found) = doc.try_select(selector) else {
            tracing::debug!(domain = %config.domain, selector = %selector, "selector invalid or unmatched");
            continue;
        };
        if !found.exists() {
            continue;
        }

        // Re-root the match so strips and cleaning stay contained.
        let content_doc = Document::from(format!("<div>{}</div>", found.html()));
        let root = content_doc.select("body > div");

        for strip in &config.strip_selectors {
            if let Some(junk) = root.try_select(strip) {
                junk.remove();
            }
        }

        clean::clean_content(&root, base_url, title, true);

        let inner = root.inner_html().to_string();
        let text = dom::fragment_text(&inner);
        if text.trim().chars().count() >= min_length {
            return Some(inner);
        }
        tracing::debug!(domain = %config.domain, selector = %selector, "matched but below length threshold");
    }

    None
}

/// First next-page `href` produced by the config's pagination selectors.
pub(crate) fn next_page_href(doc: &Document, config: &SiteConfig) -> Option<String> {
    for selector in &config.next_page_selectors {
        let Some(found) = doc.try_select(selector) else {
            continue;
        };
        if let Some(href) = dom::get_attribute(&found, "href") {
            if !href.trim().is_empty() {
                return Some(href);
            }
        }
    }
    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn story_config() -> SiteConfig {
        SiteConfig {
            domain: "example.com".to_string(),
            content_selectors: vec!["div.story-body".to_string()],
            strip_selectors: vec![".promo".to_string()],
            next_page_selectors: vec!["a.load-more".to_string()],
        }
    }

    #[test]
    fn deserializes_from_json_with_defaults() {
        let cfg: SiteConfig =
            serde_json::from_str(r#"{"domain": "example.com", "content_selectors": [".body"]}"#)
                .unwrap();
        assert_eq!(cfg.domain, "example.com");
        assert_eq!(cfg.content_selectors, vec![".body".to_string()]);
        assert!(cfg.strip_selectors.is_empty());
        assert!(cfg.next_page_selectors.is_empty());
    }

    #[test]
    fn config_extraction_applies_strip_selectors() {
        let body = "Configured content sentence, long enough to count. ".repeat(8);
        let html = format!(
            r#"<html><body>
                <div class="story-body"><p>{body}</p><p class="promo">Subscribe now!</p></div>
            </body></html>"#
        );

        let content = extract_with_config(&html, &story_config(), None, None, 100).unwrap();
        assert!(content.contains("Configured content sentence"));
        assert!(!content.contains("Subscribe now!"));
    }

    #[test]
    fn config_extraction_rejects_short_matches() {
        let html = r#"<html><body><div class="story-body"><p>Too short.</p></div></body></html>"#;
        assert!(extract_with_config(html, &story_config(), None, None, 100).is_none());
    }

    #[test]
    fn invalid_selector_is_treated_as_no_match() {
        let cfg = SiteConfig {
            domain: "example.com".to_string(),
            content_selectors: vec!["div:::nope".to_string()],
            ..SiteConfig::default()
        };
        let html = r#"<html><body><div><p>Anything</p></div></body></html>"#;
        assert!(extract_with_config(html, &cfg, None, None, 1).is_none());
    }

    #[test]
    fn next_page_href_uses_first_matching_selector() {
        let doc = dom::parse(
            r#"<html><body><a class="load-more" href="/story?page=2">More</a></body></html>"#,
        );
        assert_eq!(
            next_page_href(&doc, &story_config()),
            Some("/story?page=2".to_string())
        );
    }
}
