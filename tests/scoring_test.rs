use seo_score::{analyze, analyze_with_options, CheckId, CheckStatus, Options};

const TITLE: &str = "Complete Guide to On-Page SEO Scoring for Small Websites";
const DESCRIPTION: &str = "Learn how titles, meta descriptions, headings, image alt text and canonical tags add up to an on-page SEO score you can act on today.";

/// Builds a page that passes every check, with `head_extra` and `body_extra`
/// spliced in.
fn page(head_extra: &str, body_extra: &str) -> String {
    let filler = "lorem ipsum dolor sit amet ".repeat(70);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>{TITLE}</title>
    <meta name="description" content="{DESCRIPTION}">
    <link rel="canonical" href="https://example.com/guide">
    {head_extra}
</head>
<body>
    <h1>On-Page SEO Scoring</h1>
    <h2>Why it matters</h2>
    <p>{filler}</p>
    <p>Good on-page seo starts with the title. Check your on-page seo often. Measure on-page seo.</p>
    <img src="/chart.png" alt="Chart of scores">
    {body_extra}
</body>
</html>"#
    )
}

fn missing_alt_images(n: usize) -> String {
    "<img src=\"/x.png\">".repeat(n)
}

#[test]
fn complete_page_scores_100() {
    let report = analyze(&page("", ""));

    assert_eq!(report.score.total, 100);
    assert_eq!(report.score.earned, 100);
    assert_eq!(report.score.possible, 100);
    assert!(report.score.recommendations().next().is_none());
    assert!(report.todo_list().is_empty());
}

#[test]
fn bare_page_scores_robots_and_images_only() {
    let report = analyze("<html><body><p>Hello</p></body></html>");

    // Indexable (5) and no images missing alt text (15).
    assert_eq!(report.score.total, 20);
    assert_eq!(report.score.recommendations().count(), 6);
}

#[test]
fn noindex_loses_robots_points() {
    let report = analyze(&page(r#"<meta name="robots" content="noindex, follow">"#, ""));

    assert_eq!(report.score.total, 95);
    let robots = report.score.check(CheckId::Robots).expect("robots check");
    assert_eq!(robots.status, CheckStatus::Fail);
    assert!(robots.recommendation.is_some());
}

#[test]
fn image_alt_points_are_graduated() {
    assert_eq!(analyze(&page("", &missing_alt_images(3))).score.total, 95);
    assert_eq!(analyze(&page("", &missing_alt_images(5))).score.total, 95);
    assert_eq!(analyze(&page("", &missing_alt_images(7))).score.total, 90);
    assert_eq!(analyze(&page("", &missing_alt_images(10))).score.total, 90);
    assert_eq!(analyze(&page("", &missing_alt_images(11))).score.total, 85);
}

#[test]
fn second_h1_only_partially_meets_heading_structure() {
    let report = analyze(&page("", "<h1>Another top heading</h1>"));

    let headings = report
        .score
        .check(CheckId::HeadingStructure)
        .expect("heading check");
    assert_eq!(headings.status, CheckStatus::Partial);
    assert_eq!(headings.earned, 2);
    assert_eq!(report.score.total, 97);

    // The H1 check itself still passes.
    let h1 = report.score.check(CheckId::H1).expect("h1 check");
    assert_eq!(h1.status, CheckStatus::Pass);
}

#[test]
fn short_description_earns_partial_points() {
    let html = page("", "").replace(DESCRIPTION, "Too short.");
    let report = analyze(&html);

    let check = report
        .score
        .check(CheckId::MetaDescription)
        .expect("description check");
    assert_eq!(check.status, CheckStatus::Partial);
    assert_eq!(check.earned, 10);
    assert_eq!(report.score.total, 90);
    assert!(check
        .recommendation
        .as_deref()
        .is_some_and(|r| r.starts_with("Expand")));
}

#[test]
fn long_title_fails_title_check() {
    let long_title = format!("{TITLE} - and a very long suffix");
    let report = analyze(&page("", "").replace(TITLE, &long_title));

    let check = report.score.check(CheckId::Title).expect("title check");
    assert_eq!(check.status, CheckStatus::Fail);
    assert!(check
        .recommendation
        .as_deref()
        .is_some_and(|r| r.starts_with("Shorten")));
    assert_eq!(report.score.total, 80);
}

#[test]
fn og_description_counts_as_meta_description() {
    let html = page("", "").replace(
        r#"<meta name="description""#,
        r#"<meta property="og:description""#,
    );
    let report = analyze(&html);

    assert_eq!(report.data.meta_description.as_deref(), Some(DESCRIPTION));
    assert_eq!(report.score.total, 100);
}

#[test]
fn custom_thresholds_change_the_outcome() {
    let options = Options {
        min_word_count: 1000,
        title_length: 10..=40,
        ..Options::default()
    };
    let report = analyze_with_options(&page("", ""), &options);

    assert_eq!(report.score.total, 70);
}

#[test]
fn focus_keyword_well_placed_keeps_full_score() {
    let options = Options {
        focus_keyword: Some("On-Page SEO".to_string()),
        ..Options::default()
    };
    let report = analyze_with_options(&page("", ""), &options);

    let focus = report.data.focus_keyword.as_ref().expect("focus keyword");
    assert_eq!(focus.keyword, "on-page seo");
    assert_eq!(focus.occurrences, 4);
    assert!(focus.in_title);
    assert!(focus.in_description);
    assert!(focus.in_h1);

    assert_eq!(report.score.possible, 110);
    assert_eq!(report.score.earned, 110);
    assert_eq!(report.score.total, 100);
}

#[test]
fn stuffed_focus_keyword_earns_nothing() {
    let options = Options {
        focus_keyword: Some("lorem ipsum".to_string()),
        ..Options::default()
    };
    let report = analyze_with_options(&page("", ""), &options);

    let check = report
        .score
        .check(CheckId::FocusKeyword)
        .expect("focus keyword check");
    assert_eq!(check.earned, 0);
    assert_eq!(check.status, CheckStatus::Fail);
    // 100 of 110 points.
    assert_eq!(report.score.total, 91);
}

#[test]
fn blank_focus_keyword_is_ignored() {
    let options = Options {
        focus_keyword: Some("   ".to_string()),
        ..Options::default()
    };
    let report = analyze_with_options(&page("", ""), &options);

    assert!(report.data.focus_keyword.is_none());
    assert!(report.score.check(CheckId::FocusKeyword).is_none());
    assert_eq!(report.score.possible, 100);
}

#[test]
fn checks_are_reported_in_fixed_order() {
    let report = analyze("<html></html>");
    let ids: Vec<CheckId> = report.score.checks.iter().map(|c| c.id).collect();

    assert_eq!(
        ids,
        vec![
            CheckId::Title,
            CheckId::MetaDescription,
            CheckId::H1,
            CheckId::WordCount,
            CheckId::ImageAlt,
            CheckId::Canonical,
            CheckId::Robots,
            CheckId::HeadingStructure,
        ]
    );
}
