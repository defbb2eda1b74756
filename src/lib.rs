//! # seo-score
//!
//! On-page SEO analysis: fetch a page, parse its HTML once, extract the
//! signals search engines look at, and compute a heuristic 0-100 score with
//! a recommendation for every check that did not pass.
//!
//! ## Quick Start
//!
//! ```rust
//! use seo_score::analyze;
//!
//! let html = r#"<html><head><title>My Page</title></head>
//! <body><h1>Welcome</h1><p>Some content.</p></body></html>"#;
//!
//! let report = analyze(html);
//! println!("Score: {} / 100", report.score.total);
//! for check in report.score.recommendations() {
//!     println!("{}: {:?}", check.id.label(), check.recommendation);
//! }
//! ```
//!
//! ## Checks
//!
//! - **Title**: length within 50-60 characters
//! - **Meta description**: present, ideally 120-160 characters (Open Graph fallback)
//! - **H1**: present
//! - **Word count**: at least 300 words of body text
//! - **Image ALT**: graduated by the number of images missing alt text
//! - **Canonical**, **robots** and **heading structure**
//! - **Focus keyword** (optional): placement and density
//!
//! Broken-link checking, keyword density tables and CSV/JSON export are
//! available on top of the score.

mod error;
mod extract;
mod options;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Report rendering (text, Markdown) and export (CSV, JSON).
pub mod export;

/// HTTP page fetching and broken-link checking.
pub mod fetch;

/// Keyword frequency and density analysis.
pub mod keywords;

/// Head-level metadata extraction (title, meta tags, canonical).
pub mod metadata;

/// Weighted checks and the 0-100 score.
pub mod scoring;

/// URL validation, resolution and link classification.
pub mod url_utils;

use chrono::Utc;
use tracing::warn;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{extract_from_document, extract_seo_data};
pub use fetch::{fetch_page, FetchedPage, LinkChecker};
pub use options::{Options, DEFAULT_USER_AGENT};
pub use result::{
    Check, CheckId, CheckStatus, DescriptionSource, FocusKeyword, HeadingCounts, ImageStats,
    KeywordStat, LinkCheck, LinkStats, OpenGraph, RobotsDirectives, SeoData, SeoReport,
    SeoScore,
};

/// Analyzes an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use seo_score::analyze;
///
/// let report = analyze("<html><body><h1>Hello</h1></body></html>");
/// assert_eq!(report.data.h1.as_deref(), Some("Hello"));
/// assert!(report.score.total <= 100);
/// ```
#[must_use]
pub fn analyze(html: &str) -> SeoReport {
    analyze_with_options(html, &Options::default())
}

/// Analyzes an HTML document with custom options.
///
/// `options.url` is used as the page URL for link classification and
/// canonical resolution. No network access happens here; link checking
/// is only done by [`analyze_url`].
///
/// # Example
///
/// ```rust
/// use seo_score::{analyze_with_options, Options};
///
/// let html = r#"<html><body><a href="/about">About</a></body></html>"#;
/// let options = Options {
///     url: Some("https://example.com/".to_string()),
///     ..Options::default()
/// };
/// let report = analyze_with_options(html, &options);
/// assert_eq!(report.data.links.internal, 1);
/// ```
#[must_use]
pub fn analyze_with_options(html: &str, options: &Options) -> SeoReport {
    let mut warnings = Vec::new();

    let url = match options.url.as_deref() {
        Some(raw) => {
            let parsed = url_utils::parse_page_url(raw);
            if parsed.is_none() {
                warnings.push(format!("Ignoring invalid page URL: {raw}"));
            }
            parsed.map(|u| u.to_string())
        }
        None => None,
    };

    let data = extract::extract_seo_data(html, options);
    let score = scoring::calculate_seo_score(&data, options);

    SeoReport {
        url,
        data,
        score,
        warnings,
        ..SeoReport::default()
    }
}

/// Analyzes HTML bytes with automatic encoding detection.
///
/// # Character Encoding
///
/// The encoding is detected from `<meta charset>` or
/// `<meta http-equiv="Content-Type">`, defaulting to UTF-8. Invalid
/// characters are replaced with � rather than causing errors.
#[must_use]
pub fn analyze_bytes(html: &[u8]) -> SeoReport {
    analyze_bytes_with_options(html, &Options::default())
}

/// Analyzes HTML bytes with custom options and automatic encoding detection.
#[must_use]
pub fn analyze_bytes_with_options(html: &[u8], options: &Options) -> SeoReport {
    let html_str = encoding::transcode_to_utf8(html);
    analyze_with_options(&html_str, options)
}

/// Fetches `url` and analyzes the response.
///
/// The final URL after redirects becomes the page URL. When
/// `options.check_links` is set, the links found on the page are checked
/// afterwards; a failure to set up the link checker is reported as a
/// warning rather than an error.
///
/// # Errors
///
/// Returns `Error::InvalidUrl` for URLs that are not http(s),
/// `Error::HttpStatus` for 4xx/5xx responses and `Error::Fetch` for
/// transport failures.
pub fn analyze_url(url: &str, options: &Options) -> Result<SeoReport> {
    let page = fetch::fetch_page(url, options)?;
    let fetched_at = Utc::now();

    let page_options = Options {
        url: Some(page.url.to_string()),
        ..options.clone()
    };

    let mut report = analyze_with_options(&page.body, &page_options);
    report.fetched_at = Some(fetched_at);
    report.http_status = Some(page.status);

    if let Some(content_type) = page.content_type.as_deref() {
        if !content_type.to_ascii_lowercase().contains("html") {
            report
                .warnings
                .push(format!("Response Content-Type is {content_type}, not HTML"));
        }
    }

    if options.check_links {
        match LinkChecker::new(options) {
            Ok(checker) => {
                report.link_checks = checker.check_all(&report.data.links.urls);
            }
            Err(err) => {
                warn!(error = %err, "link checker unavailable");
                report.warnings.push(format!("Link check skipped: {err}"));
            }
        }
    }

    Ok(report)
}
