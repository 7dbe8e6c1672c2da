//! Content cleaning passes.
//!
//! Sequential destructive passes over the candidate subtree: tracking-pixel
//! removal, URL absolutization, junk-tag removal, header handling, optional
//! link-density pruning, empty-paragraph removal, and an attribute strip.
//! All passes mutate the attempt's working document only.

use dom_query::Selection;
use url::Url;

use crate::constants::{
    CONDITIONAL_CLEAN_SELECTOR, CONDITIONAL_TEXT_FLOOR, JUNK_TAG_SELECTOR, KEEP_ATTRS,
    LINK_DENSITY_LIMIT, TINY_MEDIA_LIMIT,
};
use crate::dom;
use crate::url_utils;

/// Run all cleaning passes over the candidate subtree, in order.
pub fn clean_content(
    root: &Selection,
    base_url: Option<&Url>,
    title: Option<&str>,
    clean_conditionally: bool,
) {
    remove_tiny_media(root);
    absolutize_urls(root, base_url);
    remove_junk_tags(root);
    normalize_h1(root);
    remove_title_headers(root, title);
    if clean_conditionally {
        prune_link_dense_containers(root);
    }
    remove_empty_paragraphs(root);
    strip_attributes(root);
}

/// Ratio of anchor text to total text within an element.
#[must_use]
pub fn link_density(element: &Selection) -> f64 {
    let text = dom::text_content(element);
    let text_length = text.trim().chars().count();
    if text_length == 0 {
        return 0.0;
    }

    let links = element.select("a");
    let mut link_length = 0usize;
    for link in dom::elements(&links) {
        let link_text = dom::text_content(&link);
        link_length += link_text.trim().chars().count();
    }

    link_length as f64 / text_length as f64
}

/// Drop images with an explicit width or height attribute below the tiny
/// media limit; these are tracking pixels and spacer gifs.
fn remove_tiny_media(root: &Selection) {
    let images = root.select("img");
    for image in dom::elements(&images) {
        let tiny = ["width", "height"].iter().any(|dimension| {
            dom::get_attribute(&image, dimension)
                .and_then(|value| value.trim().parse::<u32>().ok())
                .is_some_and(|pixels| pixels < TINY_MEDIA_LIMIT)
        });
        if tiny {
            image.remove();
        }
    }
}

/// Rewrite relative `href` and `src` attributes (including `source`
/// elements) to absolute URLs against the page's base URL.
fn absolutize_urls(root: &Selection, base_url: Option<&Url>) {
    let Some(base) = base_url else {
        return;
    };

    for attribute in ["href", "src"] {
        let linked = root.select(&format!("[{attribute}]"));
        for element in dom::elements(&linked) {
            if let Some(value) = dom::get_attribute(&element, attribute) {
                let resolved = url_utils::absolutize(&value, base);
                if resolved != value {
                    element.set_attr(attribute, &resolved);
                }
            }
        }
    }
}

/// Remove scripts, styles, embeds, and form controls outright.
fn remove_junk_tags(root: &Selection) {
    root.select(JUNK_TAG_SELECTOR).remove();
}

/// Handle `h1` elements: fewer than three are duplicate titles and get
/// removed; three or more mark genuine section structure and are demoted
/// to `h2`.
fn normalize_h1(root: &Selection) {
    let h1s = root.select("h1");
    let count = h1s.length();
    if count == 0 {
        return;
    }
    if count < 3 {
        h1s.remove();
    } else {
        for header in dom::elements(&h1s) {
            header.rename("h2");
        }
    }
}

/// Remove any header whose text equals the already-extracted article title,
/// so the title is not duplicated inside the body.
fn remove_title_headers(root: &Selection, title: Option<&str>) {
    let Some(title) = title else {
        return;
    };
    let target = title.trim().to_lowercase();
    if target.is_empty() {
        return;
    }

    let headers = root.select("h1, h2, h3, h4, h5, h6");
    for header in dom::elements(&headers) {
        let text = dom::text_content(&header);
        if text.trim().to_lowercase() == target {
            header.remove();
        }
    }
}

/// Remove link-dense, low-content containers.
///
/// Both conditions must hold: link density above the limit AND total text
/// under the floor. Link-heavy but substantive containers stay.
fn prune_link_dense_containers(root: &Selection) {
    let containers = root.select(CONDITIONAL_CLEAN_SELECTOR);
    for container in dom::elements(&containers) {
        let text = dom::text_content(&container);
        let text_length = text.trim().chars().count();
        if text_length >= CONDITIONAL_TEXT_FLOOR {
            continue;
        }
        if link_density(&container) > LINK_DENSITY_LIMIT {
            container.remove();
        }
    }
}

/// Remove paragraphs with no text and no element children.
fn remove_empty_paragraphs(root: &Selection) {
    let paragraphs = root.select("p");
    for paragraph in dom::elements(&paragraphs) {
        let text = dom::text_content(&paragraph);
        if text.trim().is_empty() && paragraph.children().length() == 0 {
            paragraph.remove();
        }
    }
}

/// Strip every attribute not in the keep list, `data-*` excepted,
/// recursively over the subtree.
fn strip_attributes(root: &Selection) {
    strip_element_attributes(root);
    let descendants = root.select("*");
    for element in dom::elements(&descendants) {
        strip_element_attributes(&element);
    }
}

fn strip_element_attributes(element: &Selection) {
    for (name, _) in dom::get_all_attributes(element) {
        if KEEP_ATTRS.contains(&name.as_str()) || name.starts_with("data-") {
            continue;
        }
        element.remove_attr(&name);
    }
}
