//! DOM operations adapter.
//!
//! Thin wrappers over the `dom_query` crate so the extraction passes read in
//! terms of the operations they actually need: parse, deep-copy, tag/text
//! inspection, attribute enumeration, and node identity for the score table.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Deep-copy a document by re-serializing and re-parsing it.
///
/// Every retry attempt works on its own copy so scores and removals never
/// leak between attempts.
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html().to_string())
}

/// Get tag name (lowercase) of the first node in the selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_lowercase())
}

/// Node identity of the first node in the selection, used as the score-table key.
#[inline]
#[must_use]
pub fn node_id(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|node| node.id)
}

/// Get all text content of node and descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Plain text of an HTML fragment.
///
/// Used for length checks and word counts on already-serialized content.
#[must_use]
pub fn fragment_text(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    Document::from(html).select("body").text().to_string()
}

/// Materialize each matched node as its own single-node selection.
///
/// Collecting up front keeps iteration safe while passes mutate the tree.
#[must_use]
pub fn elements<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Get an attribute value as an owned string.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all attributes of the first node as key-value pairs.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_inspect() {
        let doc = parse(r#"<div id="main" class="container">content</div>"#);
        let div = doc.select("div");

        assert_eq!(tag_name(&div), Some("div".to_string()));
        assert_eq!(get_attribute(&div, "id"), Some("main".to_string()));
        assert_eq!(text_content(&div), "content".into());
    }

    #[test]
    fn clone_is_independent() {
        let doc = parse(r#"<div id="original">content</div>"#);
        let cloned = clone_document(&doc);

        cloned.select("#original").set_attr("id", "copy");
        assert!(doc.select("#original").exists());
        assert!(cloned.select("#copy").exists());
        assert!(!cloned.select("#original").exists());
    }

    #[test]
    fn node_id_is_stable_across_lookups() {
        let doc = parse("<div><p>one</p><p>two</p></div>");
        let first = node_id(&doc.select("p"));
        let again = node_id(&doc.select("p"));
        assert_eq!(first, again);
        assert!(first.is_some());
    }

    #[test]
    fn fragment_text_flattens_markup() {
        assert_eq!(fragment_text("<p>a <b>b</b></p><p>c</p>"), "a bc");
        assert_eq!(fragment_text("   "), "");
    }

    #[test]
    fn attributes_enumerate_in_full() {
        let doc = parse(r#"<a href="/x" class="link" data-k="v">t</a>"#);
        let attrs = get_all_attributes(&doc.select("a"));
        assert_eq!(attrs.len(), 3);
        assert!(attrs.iter().any(|(k, v)| k == "data-k" && v == "v"));
    }
}
