//! SEO score calculation.
//!
//! Each check awards points for one on-page signal. The total is the share
//! of available points earned, scaled to 0-100. Without a focus keyword the
//! checks are worth exactly 100 points, so the total equals the points
//! earned.

use crate::result::{Check, CheckId, CheckStatus, SeoData, SeoScore};
use crate::Options;

/// Points for a title within the recommended length.
pub const TITLE_POINTS: u32 = 20;
/// Points for a meta description within the recommended length.
pub const DESCRIPTION_POINTS: u32 = 20;
/// Points for a meta description of any other length.
pub const DESCRIPTION_PARTIAL_POINTS: u32 = 10;
pub const H1_POINTS: u32 = 15;
pub const WORD_COUNT_POINTS: u32 = 10;
pub const IMAGE_ALT_POINTS: u32 = 15;
pub const CANONICAL_POINTS: u32 = 10;
pub const ROBOTS_POINTS: u32 = 5;
pub const HEADING_STRUCTURE_POINTS: u32 = 5;
pub const FOCUS_KEYWORD_POINTS: u32 = 10;

/// Keyword density (percent) considered natural.
pub const FOCUS_DENSITY_RANGE: std::ops::RangeInclusive<f64> = 0.5..=3.0;

/// Calculate the score and its per-check breakdown.
///
/// # Examples
///
/// ```
/// use seo_score::scoring::calculate_seo_score;
/// use seo_score::{Options, SeoData};
///
/// let score = calculate_seo_score(&SeoData::default(), &Options::default());
/// // An empty page is still indexable and has no images missing alt text.
/// assert_eq!(score.total, 20);
/// ```
#[must_use]
pub fn calculate_seo_score(data: &SeoData, options: &Options) -> SeoScore {
    let mut checks = vec![
        check_title(data, options),
        check_description(data, options),
        check_h1(data),
        check_word_count(data, options),
        check_image_alt(data),
        check_canonical(data),
        check_robots(data),
        check_heading_structure(data),
    ];

    if let Some(focus) = check_focus_keyword(data) {
        checks.push(focus);
    }

    let earned: u32 = checks.iter().map(|c| c.earned).sum();
    let possible: u32 = checks.iter().map(|c| c.max).sum();

    SeoScore {
        total: normalize(earned, possible),
        earned,
        possible,
        checks,
    }
}

/// Scale `earned / possible` to 0-100, rounding to the nearest integer.
#[must_use]
pub fn normalize(earned: u32, possible: u32) -> u8 {
    if possible == 0 {
        return 0;
    }
    let pct = (f64::from(earned) * 100.0 / f64::from(possible)).round();
    pct.clamp(0.0, 100.0) as u8
}

fn pass(id: CheckId, max: u32, message: String) -> Check {
    Check {
        id,
        earned: max,
        max,
        status: CheckStatus::Pass,
        message,
        recommendation: None,
    }
}

fn partial(id: CheckId, earned: u32, max: u32, message: String, recommendation: String) -> Check {
    Check {
        id,
        earned,
        max,
        status: CheckStatus::Partial,
        message,
        recommendation: Some(recommendation),
    }
}

fn fail(id: CheckId, max: u32, message: String, recommendation: String) -> Check {
    Check {
        id,
        earned: 0,
        max,
        status: CheckStatus::Fail,
        message,
        recommendation: Some(recommendation),
    }
}

fn check_title(data: &SeoData, options: &Options) -> Check {
    let range = &options.title_length;
    let len = data.title_length();

    if data.title.is_none() {
        return fail(
            CheckId::Title,
            TITLE_POINTS,
            "Title not found".to_string(),
            format!(
                "Add a <title> of {}-{} characters",
                range.start(),
                range.end()
            ),
        );
    }

    if range.contains(&len) {
        pass(
            CheckId::Title,
            TITLE_POINTS,
            format!("Title length is {len} characters"),
        )
    } else {
        let direction = if len < *range.start() { "Lengthen" } else { "Shorten" };
        fail(
            CheckId::Title,
            TITLE_POINTS,
            format!("Title length is {len} characters"),
            format!(
                "{direction} the title to {}-{} characters",
                range.start(),
                range.end()
            ),
        )
    }
}

fn check_description(data: &SeoData, options: &Options) -> Check {
    let range = &options.description_length;
    let len = data.description_length();

    if data.meta_description.is_none() {
        return fail(
            CheckId::MetaDescription,
            DESCRIPTION_POINTS,
            "Meta description not found".to_string(),
            format!(
                "Add a meta description of {}-{} characters",
                range.start(),
                range.end()
            ),
        );
    }

    if range.contains(&len) {
        pass(
            CheckId::MetaDescription,
            DESCRIPTION_POINTS,
            format!("Meta description length is {len} characters"),
        )
    } else {
        let direction = if len < *range.start() { "Expand" } else { "Trim" };
        partial(
            CheckId::MetaDescription,
            DESCRIPTION_PARTIAL_POINTS,
            DESCRIPTION_POINTS,
            format!("Meta description length is {len} characters"),
            format!(
                "{direction} the meta description to {}-{} characters",
                range.start(),
                range.end()
            ),
        )
    }
}

fn check_h1(data: &SeoData) -> Check {
    match data.h1 {
        Some(_) => pass(CheckId::H1, H1_POINTS, "H1 found".to_string()),
        None => fail(
            CheckId::H1,
            H1_POINTS,
            "H1 not found".to_string(),
            "Add an <h1> describing the page topic".to_string(),
        ),
    }
}

fn check_word_count(data: &SeoData, options: &Options) -> Check {
    let words = data.word_count;
    let message = format!("Page has {words} words");

    if words >= options.min_word_count {
        pass(CheckId::WordCount, WORD_COUNT_POINTS, message)
    } else {
        fail(
            CheckId::WordCount,
            WORD_COUNT_POINTS,
            message,
            format!(
                "Add content: at least {} words are recommended",
                options.min_word_count
            ),
        )
    }
}

/// Graduated: 15 points with no missing alt text, 10 up to 5 missing,
/// 5 up to 10 missing.
fn check_image_alt(data: &SeoData) -> Check {
    let missing = data.images.missing_alt;
    let message = format!(
        "{missing} of {} images missing ALT text",
        data.images.total
    );
    let recommendation = format!("Add ALT text to {missing} images");

    match missing {
        0 => pass(CheckId::ImageAlt, IMAGE_ALT_POINTS, message),
        1..=5 => partial(CheckId::ImageAlt, 10, IMAGE_ALT_POINTS, message, recommendation),
        6..=10 => partial(CheckId::ImageAlt, 5, IMAGE_ALT_POINTS, message, recommendation),
        _ => fail(CheckId::ImageAlt, IMAGE_ALT_POINTS, message, recommendation),
    }
}

fn check_canonical(data: &SeoData) -> Check {
    match data.canonical.as_deref() {
        Some(href) => pass(
            CheckId::Canonical,
            CANONICAL_POINTS,
            format!("Canonical URL is {href}"),
        ),
        None => fail(
            CheckId::Canonical,
            CANONICAL_POINTS,
            "Canonical tag not found".to_string(),
            "Add <link rel=\"canonical\"> pointing at the preferred URL".to_string(),
        ),
    }
}

fn check_robots(data: &SeoData) -> Check {
    let directives = data.robots.content.as_deref().unwrap_or("none set");

    if data.robots.is_indexable() {
        pass(
            CheckId::Robots,
            ROBOTS_POINTS,
            format!("Page is indexable (robots: {directives})"),
        )
    } else {
        fail(
            CheckId::Robots,
            ROBOTS_POINTS,
            format!("Page blocks indexing (robots: {directives})"),
            "Remove noindex from the robots meta tag if the page should rank".to_string(),
        )
    }
}

/// Full points for exactly one h1 followed by at least one h2.
fn check_heading_structure(data: &SeoData) -> Check {
    let h = &data.headings;
    let message = format!("{} H1, {} H2, {} H3", h.h1, h.h2, h.h3);

    if h.h1 == 1 && h.h2 >= 1 {
        return pass(CheckId::HeadingStructure, HEADING_STRUCTURE_POINTS, message);
    }

    let recommendation = if h.h1 > 1 {
        "Use a single <h1> and demote the others to <h2>".to_string()
    } else if h.h1 == 0 {
        "Structure the page with one <h1> and <h2> subheadings".to_string()
    } else {
        "Break up content with <h2> subheadings".to_string()
    };

    if h.total() > 0 {
        partial(
            CheckId::HeadingStructure,
            2,
            HEADING_STRUCTURE_POINTS,
            message,
            recommendation,
        )
    } else {
        fail(
            CheckId::HeadingStructure,
            HEADING_STRUCTURE_POINTS,
            message,
            recommendation,
        )
    }
}

/// Title +4, description +3, natural density +3. Skipped without a focus keyword.
fn check_focus_keyword(data: &SeoData) -> Option<Check> {
    let focus = data.focus_keyword.as_ref()?;
    let mut earned = 0;
    let mut missing = Vec::new();

    if focus.in_title {
        earned += 4;
    } else {
        missing.push("the title");
    }

    if focus.in_description {
        earned += 3;
    } else {
        missing.push("the meta description");
    }

    let density_ok = FOCUS_DENSITY_RANGE.contains(&focus.density);
    if density_ok {
        earned += 3;
    }

    let message = format!(
        "\"{}\" appears {} times ({:.2}% density)",
        focus.keyword, focus.occurrences, focus.density
    );

    if earned == FOCUS_KEYWORD_POINTS {
        return Some(pass(CheckId::FocusKeyword, FOCUS_KEYWORD_POINTS, message));
    }

    let mut advice = Vec::new();
    if !missing.is_empty() {
        advice.push(format!("Use \"{}\" in {}", focus.keyword, missing.join(" and ")));
    }
    if !density_ok {
        let verb = if focus.density < *FOCUS_DENSITY_RANGE.start() {
            "Mention the keyword more often"
        } else {
            "Reduce keyword repetition"
        };
        advice.push(format!(
            "{verb} (aim for {:.1}-{:.1}% density)",
            FOCUS_DENSITY_RANGE.start(),
            FOCUS_DENSITY_RANGE.end()
        ));
    }
    let recommendation = advice.join("; ");

    Some(if earned == 0 {
        fail(CheckId::FocusKeyword, FOCUS_KEYWORD_POINTS, message, recommendation)
    } else {
        partial(CheckId::FocusKeyword, earned, FOCUS_KEYWORD_POINTS, message, recommendation)
    })
}
