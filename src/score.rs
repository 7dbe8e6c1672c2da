//! Content scoring, top-candidate selection, and sibling merging.
//!
//! Scores live in a side table keyed by node identity, scoped to one
//! extraction attempt and discarded with it. Two injection passes run:
//! a flat bonus for known blog/hNews container patterns, then per-paragraph
//! scoring that propagates upward so article wrappers accumulate score from
//! their paragraph children.

use std::collections::HashMap;

use dom_query::{Document, NodeId, Selection};

use crate::constants::{
    CHARS_PER_LENGTH_POINT, CONTENT_ASSET_HINT, CONTENT_ASSET_WEIGHT, HNEWS_BONUS,
    HNEWS_CONTENT_SELECTORS, LENGTH_BONUS_CAP, NEGATIVE_HINT_WEIGHT, NEGATIVE_SCORE_HINTS,
    NON_TOP_CANDIDATE_TAGS, PARAGRAPH_BASE_SCORE, PHOTO_HINTS, PHOTO_HINT_WEIGHT,
    POSITIVE_HINT_WEIGHT, POSITIVE_SCORE_HINTS, SIBLING_SCORE_FRACTION,
};
use crate::dom;

/// Per-attempt score side table.
///
/// Every entry starts implicitly at 0 and accumulates additively. Dropping
/// the table resets all scores, so a fresh attempt on a fresh document copy
/// satisfies the scores-start-at-zero invariant by construction.
#[derive(Debug, Default)]
pub struct ScoreMap {
    scores: HashMap<NodeId, i32>,
}

impl ScoreMap {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current score of a node (0 when never scored).
    #[must_use]
    pub fn get(&self, id: NodeId) -> i32 {
        self.scores.get(&id).copied().unwrap_or(0)
    }

    /// Whether a node has been touched by any scoring pass.
    #[must_use]
    pub fn is_scored(&self, id: NodeId) -> bool {
        self.scores.contains_key(&id)
    }

    /// Add to a node's score.
    pub fn add(&mut self, id: NodeId, delta: i32) {
        *self.scores.entry(id).or_insert(0) += delta;
    }

    /// Set a node's score outright.
    pub fn set(&mut self, id: NodeId, score: i32) {
        self.scores.insert(id, score);
    }
}

/// Class/id hint weight of a single node.
///
/// The id is consulted first for the positive/negative hints; the class is
/// only consulted for those when the id produced nothing. The photo and
/// content-asset bonuses always come from the class.
#[must_use]
pub fn node_weight(element: &Selection) -> i32 {
    let mut score = 0;

    if let Some(id) = dom::get_attribute(element, "id") {
        if POSITIVE_SCORE_HINTS.is_match(&id) {
            score += POSITIVE_HINT_WEIGHT;
        }
        if NEGATIVE_SCORE_HINTS.is_match(&id) {
            score -= NEGATIVE_HINT_WEIGHT;
        }
    }

    if let Some(class) = dom::get_attribute(element, "class") {
        if score == 0 {
            if POSITIVE_SCORE_HINTS.is_match(&class) {
                score += POSITIVE_HINT_WEIGHT;
            }
            if NEGATIVE_SCORE_HINTS.is_match(&class) {
                score -= NEGATIVE_HINT_WEIGHT;
            }
        }
        if PHOTO_HINTS.is_match(&class) {
            score += PHOTO_HINT_WEIGHT;
        }
        if CONTENT_ASSET_HINT.is_match(&class) {
            score += CONTENT_ASSET_WEIGHT;
        }
    }

    score
}

/// Content score of one paragraph's text: a floor of 1, one point per
/// comma, and a capped length bonus. Comma density and length correlate
/// with prose over boilerplate.
#[must_use]
pub fn paragraph_score(text: &str) -> i32 {
    let commas = i32::try_from(text.matches(',').count()).unwrap_or(i32::MAX);
    let length_points =
        i32::try_from(text.chars().count() / CHARS_PER_LENGTH_POINT).unwrap_or(i32::MAX);
    PARAGRAPH_BASE_SCORE + commas + length_points.min(LENGTH_BONUS_CAP)
}

/// Run both score-injection passes over the document.
pub fn score_content(doc: &Document, weight_nodes: bool) -> ScoreMap {
    let mut scores = ScoreMap::new();

    // Pass 1: flat bonus to the parents of known blog-template content
    // containers.
    for (container, content) in HNEWS_CONTENT_SELECTORS {
        let matched = doc.select(&format!("{container} {content}"));
        for element in dom::elements(&matched) {
            let parent = element.parent();
            if let Some(parent_id) = dom::node_id(&parent) {
                scores.add(parent_id, HNEWS_BONUS);
            }
        }
    }

    // Pass 2: per-paragraph scoring with upward propagation.
    let paragraphs = doc.select("p, pre");
    for paragraph in dom::elements(&paragraphs) {
        let Some(id) = dom::node_id(&paragraph) else {
            continue;
        };
        if scores.get(id) != 0 {
            continue;
        }

        let weight = if weight_nodes {
            node_weight(&paragraph)
        } else {
            0
        };
        let text = dom::text_content(&paragraph);
        let content_score = paragraph_score(text.trim());

        scores.set(id, weight);

        let parent = paragraph.parent();
        if let Some(parent_id) = dom::node_id(&parent) {
            scores.add(parent_id, content_score);
            let grandparent = parent.parent();
            if let Some(grandparent_id) = dom::node_id(&grandparent) {
                scores.add(grandparent_id, content_score / 2);
            }
        }
    }

    scores
}

/// Pick the highest-scoring eligible element, falling back to `body`.
///
/// Inline and void tags never qualify, whatever score propagation gave
/// them. Returns `None` only for documents without a body element.
#[must_use]
pub fn find_top_candidate<'a>(doc: &'a Document, scores: &ScoreMap) -> Option<Selection<'a>> {
    let mut best_score = i32::MIN;
    let mut best: Option<Selection<'a>> = None;

    let all = doc.select("*");
    for node in all.nodes() {
        if !scores.is_scored(node.id) {
            continue;
        }
        let tag = node
            .node_name()
            .map(|name| name.to_lowercase())
            .unwrap_or_default();
        if NON_TOP_CANDIDATE_TAGS.contains(&tag.as_str()) {
            continue;
        }

        let score = scores.get(node.id);
        if score > best_score {
            best_score = score;
            best = Some(Selection::from(*node));
        }
    }

    best.or_else(|| {
        let body = doc.select("body");
        body.exists().then_some(body)
    })
}

/// Merge qualifying siblings into a combined content container.
///
/// Direct siblings scoring at least 20% of the top candidate's score are
/// kept with the candidate, in document order. Returns the concatenated
/// outer HTML of the merged parts when at least one sibling qualified;
/// `None` means the candidate stands alone.
#[must_use]
pub fn merge_with_siblings(candidate: &Selection, scores: &ScoreMap) -> Option<String> {
    let candidate_id = dom::node_id(candidate)?;
    let top_score = scores.get(candidate_id);
    if top_score <= 0 {
        return None;
    }
    let threshold = f64::from(top_score) * SIBLING_SCORE_FRACTION;

    let parent = candidate.parent();
    if !parent.exists() {
        return None;
    }

    let mut parts: Vec<String> = Vec::new();
    let mut merged_any = false;
    let siblings = parent.children();
    for sibling in dom::elements(&siblings) {
        let Some(sibling_id) = dom::node_id(&sibling) else {
            continue;
        };
        if sibling_id == candidate_id {
            parts.push(sibling.html().to_string());
            continue;
        }
        let sibling_score = scores.get(sibling_id);
        if sibling_score > 0 && f64::from(sibling_score) >= threshold {
            parts.push(sibling.html().to_string());
            merged_any = true;
        }
    }

    merged_any.then(|| parts.concat())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_score_is_monotonic_in_commas() {
        let mut previous = 0;
        for commas in 0..6 {
            let text = format!("word{}", ", word".repeat(commas));
            let score = paragraph_score(&text);
            assert!(score >= 1 + i32::try_from(commas).unwrap_or(0));
            assert!(score >= previous);
            previous = score;
        }
    }

    #[test]
    fn paragraph_length_bonus_caps_at_three() {
        let long = "a".repeat(1000);
        assert_eq!(paragraph_score(&long), 1 + 3);
        let medium = "a".repeat(250);
        assert_eq!(paragraph_score(&medium), 1 + 2);
    }

    #[test]
    fn node_weight_id_takes_precedence_over_class() {
        let doc = dom::parse(r#"<p id="sidebar" class="article">x</p>"#);
        // id is negative; class hints are skipped for the +/-25 because the
        // id already produced a score.
        assert_eq!(node_weight(&doc.select("p")), -25);
    }

    #[test]
    fn node_weight_photo_and_asset_bonuses_always_apply() {
        let doc = dom::parse(r#"<p id="story" class="photo entry-content-asset">x</p>"#);
        // +25 id positive, +10 photo, +25 asset
        assert_eq!(node_weight(&doc.select("p")), 60);
    }

    #[test]
    fn scores_propagate_to_parent_and_grandparent() {
        let doc = dom::parse(
            r#"<html><body><div id="grand"><div id="parent"><p>one, two, three</p></div></div></body></html>"#,
        );
        let scores = score_content(&doc, true);

        let p_id = dom::node_id(&doc.select("p")).unwrap();
        let parent_id = dom::node_id(&doc.select("#parent")).unwrap();
        let grand_id = dom::node_id(&doc.select("#grand")).unwrap();

        // content score: 1 + 2 commas + 0 length
        assert_eq!(scores.get(parent_id), 3);
        assert_eq!(scores.get(grand_id), 1);
        assert_eq!(scores.get(p_id), 0);
    }

    #[test]
    fn hnews_container_parent_gets_flat_bonus() {
        let doc = dom::parse(
            r#"<html><body>
                <div id="outer" class="hentry"><div class="entry-content"><p>text</p></div></div>
            </body></html>"#,
        );
        let scores = score_content(&doc, true);
        let outer_id = dom::node_id(&doc.select("#outer")).unwrap();
        assert!(scores.get(outer_id) >= 80);
    }

    #[test]
    fn top_candidate_prefers_paragraph_rich_container() {
        let para = "Sentence with some, length and, commas to score. ".repeat(3);
        let doc = dom::parse(&format!(
            r#"<html><body>
                <div id="noise"><p>tiny</p></div>
                <div id="rich"><p>{para}</p><p>{para}</p><p>{para}</p></div>
            </body></html>"#
        ));
        let scores = score_content(&doc, true);
        let top = find_top_candidate(&doc, &scores).unwrap();
        assert_eq!(dom::get_attribute(&top, "id"), Some("rich".to_string()));
    }

    #[test]
    fn top_candidate_falls_back_to_body() {
        let doc = dom::parse(r#"<html><body><p>no scores here</p></body></html>"#);
        let scores = ScoreMap::new();
        let top = find_top_candidate(&doc, &scores).unwrap();
        assert_eq!(dom::tag_name(&top), Some("body".to_string()));
    }

    #[test]
    fn sibling_merge_includes_only_high_scoring_siblings() {
        let doc = dom::parse(
            r#"<html><body><div id="parent">
                <div id="main">main</div>
                <div id="strong">strong</div>
                <div id="weak">weak</div>
            </div></body></html>"#,
        );
        let mut scores = ScoreMap::new();
        let main_id = dom::node_id(&doc.select("#main")).unwrap();
        let strong_id = dom::node_id(&doc.select("#strong")).unwrap();
        let weak_id = dom::node_id(&doc.select("#weak")).unwrap();
        scores.set(main_id, 100);
        scores.set(strong_id, 30);
        scores.set(weak_id, 5);

        let candidate = doc.select("#main");
        let merged = merge_with_siblings(&candidate, &scores).unwrap();
        assert!(merged.contains(r#"id="main""#));
        assert!(merged.contains(r#"id="strong""#));
        assert!(!merged.contains(r#"id="weak""#));
    }

    #[test]
    fn sibling_merge_returns_none_when_candidate_stands_alone() {
        let doc = dom::parse(
            r#"<html><body><div id="parent"><div id="main">m</div><div id="other">o</div></div></body></html>"#,
        );
        let mut scores = ScoreMap::new();
        let main_id = dom::node_id(&doc.select("#main")).unwrap();
        scores.set(main_id, 100);

        let candidate = doc.select("#main");
        assert!(merge_with_siblings(&candidate, &scores).is_none());
    }
}
