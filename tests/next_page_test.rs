//! Next-page detection and validation through the public API.

use rs_longform::{extract_with_options, ExtractorKind, Options, SiteConfig};

fn article(extra: &str) -> String {
    let para = "Story text sentence, with commas, filling out the page body. ".repeat(6);
    format!(
        r#"<html><body>
            <article><p>{para}</p><p>{para}</p></article>
            {extra}
        </body></html>"#
    )
}

fn options() -> Options {
    Options::for_url("https://example.com/serial/intro")
}

#[test]
fn rel_next_anchor_is_detected_and_absolutized() {
    let html = article(r#"<a rel="next" href="/serial/intro?page=2">Continue reading</a>"#);
    let result = extract_with_options(&html, &options()).unwrap();
    assert_eq!(
        result.next_page_url,
        Some("https://example.com/serial/intro?page=2".to_string())
    );
}

#[test]
fn numbered_pagination_is_detected() {
    let html = article(
        r#"<div class="pager">
            <a class="page-link" href="/serial/intro/2">2</a>
            <a class="page-link" href="/serial/intro/3">3</a>
        </div>"#,
    );
    let result = extract_with_options(&html, &options()).unwrap();
    assert_eq!(
        result.next_page_url,
        Some("https://example.com/serial/intro/2".to_string())
    );
}

#[test]
fn off_host_and_fragment_links_are_rejected() {
    let html = article(
        r##"<a rel="next" href="https://mirror.example.org/serial/intro/2">Next</a>
            <a rel="next" href="#comments">Next</a>"##,
    );
    let result = extract_with_options(&html, &options()).unwrap();
    assert_eq!(result.next_page_url, None);
}

#[test]
fn detection_requires_a_known_page_url() {
    let html = article(r#"<a rel="next" href="/serial/intro?page=2">Next</a>"#);
    let result = extract_with_options(&html, &Options::default()).unwrap();
    assert_eq!(result.next_page_url, None);
}

#[test]
fn site_config_next_page_selector_wins_over_heuristics() {
    let html = article(
        r#"<a rel="next" href="/serial/intro?page=2">Next</a>
           <a class="continue-slot" href="/serial/intro/part-two">Keep reading</a>"#,
    );
    let config = SiteConfig {
        domain: "example.com".to_string(),
        next_page_selectors: vec!["a.continue-slot".to_string()],
        ..SiteConfig::default()
    };
    let opts = Options {
        extractor: ExtractorKind::Site(config),
        ..options()
    };

    let result = extract_with_options(&html, &opts).unwrap();
    assert_eq!(
        result.next_page_url,
        Some("https://example.com/serial/intro/part-two".to_string())
    );
}

#[test]
fn invalid_configured_next_page_falls_back_to_heuristics() {
    let html = article(
        r##"<a rel="next" href="/serial/intro?page=2">Next</a>
            <a class="continue-slot" href="#more">Keep reading</a>"##,
    );
    let config = SiteConfig {
        domain: "example.com".to_string(),
        next_page_selectors: vec!["a.continue-slot".to_string()],
        ..SiteConfig::default()
    };
    let opts = Options {
        extractor: ExtractorKind::Site(config),
        ..options()
    };

    let result = extract_with_options(&html, &opts).unwrap();
    assert_eq!(
        result.next_page_url,
        Some("https://example.com/serial/intro?page=2".to_string())
    );
}
