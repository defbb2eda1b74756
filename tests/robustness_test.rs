use seo_score::{analyze, analyze_bytes};
use std::time::{Duration, Instant};

fn assert_sane(html: &str) {
    let report = analyze(html);
    assert!(report.score.total <= 100, "score out of range for {html:?}");
    assert!(report.score.earned <= report.score.possible);
    assert!(report.data.images.missing_alt <= report.data.images.total);
}

#[test]
fn analyze_does_not_panic_on_malformed_html() {
    for html in [
        "<p>text<div>more",
        "<p><div></p></div>",
        "<html><body><article>content",
        "<div class=\"test id=broken>",
        "&amp text &lt;",
        "<title>unclosed",
        "<meta name=\"description\" content=>",
        "<a href=\"http://[::1\">bad ipv6</a>",
        "<a href=\"https://\">no host</a>",
        "<img alt>",
        "</h1></h2><h1>",
    ] {
        assert_sane(html);
    }
}

#[test]
fn empty_input_scores_baseline() {
    let report = analyze("");

    assert!(report.data.title.is_none());
    assert_eq!(report.data.word_count, 0);
    assert!(report.data.keywords.is_empty());
    assert_eq!(report.score.total, 20);
}

#[test]
fn binary_garbage_does_not_panic() {
    let bytes: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let report = analyze_bytes(&bytes);
    assert!(report.score.total <= 100);
}

#[test]
fn many_missing_alts_floor_at_zero_points() {
    let html = format!("<body>{}</body>", "<img src=x>".repeat(500));
    let report = analyze(&html);

    assert_eq!(report.data.images.missing_alt, 500);
    assert_sane(&html);
}

#[test]
fn deeply_nested_document_completes_quickly() {
    let depth = 500;
    let html = format!(
        "{}<p>deep text</p>{}",
        "<div>".repeat(depth),
        "</div>".repeat(depth)
    );

    let started = Instant::now();
    let report = analyze(&html);

    assert_eq!(report.data.word_count, 2);
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[test]
fn large_page_completes_quickly() {
    let paragraph = "<p>search engines reward useful content with clear headings</p>";
    let html = format!("<body><h1>Big</h1>{}</body>", paragraph.repeat(20_000));

    let started = Instant::now();
    let report = analyze(&html);

    assert_eq!(report.data.word_count, 1 + 8 * 20_000);
    assert!(started.elapsed() < Duration::from_secs(30));
}
