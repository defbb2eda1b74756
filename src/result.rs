//! Result types for SEO analysis output.
//!
//! This module defines the structured output of an analysis: the fields
//! extracted from the page, the score breakdown and link check results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where the meta description was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionSource {
    /// `<meta name="description">`
    Meta,
    /// `<meta property="og:description">` fallback.
    OpenGraph,
}

/// Number of headings per level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub h5: usize,
    pub h6: usize,
}

impl HeadingCounts {
    /// Total number of headings of any level.
    #[must_use]
    pub fn total(&self) -> usize {
        self.h1 + self.h2 + self.h3 + self.h4 + self.h5 + self.h6
    }
}

/// Image alt-text coverage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageStats {
    /// Number of `<img>` elements.
    pub total: usize,
    /// Images whose `alt` is absent, empty or whitespace.
    pub missing_alt: usize,
}

/// Parsed `<meta name="robots">` directives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotsDirectives {
    /// Raw `content` attribute.
    pub content: Option<String>,
    pub noindex: bool,
    pub nofollow: bool,
}

impl RobotsDirectives {
    /// Whether search engines may index the page.
    #[must_use]
    pub fn is_indexable(&self) -> bool {
        !self.noindex
    }
}

/// Open Graph tags relevant to link previews.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraph {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl OpenGraph {
    /// True when at least one Open Graph tag was found.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.title.is_some() || self.description.is_some() || self.image.is_some()
    }
}

/// Internal/external link breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStats {
    /// Links pointing at the same host.
    pub internal: usize,
    /// Links pointing at another host.
    pub external: usize,
    /// Links carrying `rel="nofollow"`.
    pub nofollow: usize,
    /// Unique absolute http(s) URLs in document order.
    pub urls: Vec<String>,
}

/// One row of the keyword frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordStat {
    pub word: String,
    pub count: usize,
    /// Share of all body words, in percent.
    pub density: f64,
}

/// Focus keyword placement and density.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FocusKeyword {
    pub keyword: String,
    /// Occurrences of the keyword (or phrase) in the body text.
    pub occurrences: usize,
    /// Share of body words covered by the keyword, in percent.
    pub density: f64,
    pub in_title: bool,
    pub in_description: bool,
    pub in_h1: bool,
    pub in_url: bool,
}

/// Fields extracted from one HTML document.
///
/// Missing values are `None` or zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoData {
    /// Trimmed `<title>` text.
    pub title: Option<String>,

    /// Meta description (or Open Graph fallback).
    pub meta_description: Option<String>,

    /// Tag the description was read from.
    pub description_source: Option<DescriptionSource>,

    /// Text of the first non-empty `<h1>`.
    pub h1: Option<String>,

    pub headings: HeadingCounts,

    /// Whitespace-separated words in the visible body text.
    pub word_count: usize,

    pub images: ImageStats,

    /// Absolute canonical URL.
    pub canonical: Option<String>,

    pub robots: RobotsDirectives,

    /// `<html lang>` value.
    pub language: Option<String>,

    /// Viewport meta content.
    pub viewport: Option<String>,

    /// Entries of `<meta name="keywords">`.
    pub meta_keywords: Vec<String>,

    pub open_graph: OpenGraph,

    /// Number of `<script type="application/ld+json">` blocks.
    pub structured_data_blocks: usize,

    pub links: LinkStats,

    /// Most frequent non-stop-words.
    pub keywords: Vec<KeywordStat>,

    /// Only set when a focus keyword was configured.
    pub focus_keyword: Option<FocusKeyword>,
}

impl SeoData {
    /// Title length in chars, 0 when missing.
    #[must_use]
    pub fn title_length(&self) -> usize {
        self.title.as_deref().map_or(0, |t| t.chars().count())
    }

    /// Meta description length in chars, 0 when missing.
    #[must_use]
    pub fn description_length(&self) -> usize {
        self.meta_description
            .as_deref()
            .map_or(0, |d| d.chars().count())
    }
}

/// Identifies a scoring check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    Title,
    MetaDescription,
    H1,
    WordCount,
    ImageAlt,
    Canonical,
    Robots,
    HeadingStructure,
    FocusKeyword,
}

impl CheckId {
    /// Human readable name used in tables.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::MetaDescription => "Meta Description",
            Self::H1 => "H1",
            Self::WordCount => "Word Count",
            Self::ImageAlt => "Image ALT",
            Self::Canonical => "Canonical",
            Self::Robots => "Robots",
            Self::HeadingStructure => "Heading Structure",
            Self::FocusKeyword => "Focus Keyword",
        }
    }
}

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Partial,
    Fail,
}

impl CheckStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Partial => "partial",
            Self::Fail => "fail",
        }
    }
}

/// A weighted check and the points it earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub id: CheckId,
    pub earned: u32,
    pub max: u32,
    pub status: CheckStatus,
    /// What was observed.
    pub message: String,
    /// What to change. `None` when the check passed.
    pub recommendation: Option<String>,
}

/// Score with its per-check breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoScore {
    /// Normalized score in `0..=100`.
    pub total: u8,
    pub earned: u32,
    pub possible: u32,
    pub checks: Vec<Check>,
}

impl SeoScore {
    /// Checks that did not pass, in scoring order.
    pub fn recommendations(&self) -> impl Iterator<Item = &Check> {
        self.checks
            .iter()
            .filter(|c| c.status != CheckStatus::Pass)
    }

    /// Looks up a check by id.
    #[must_use]
    pub fn check(&self, id: CheckId) -> Option<&Check> {
        self.checks.iter().find(|c| c.id == id)
    }
}

/// Result of probing one link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCheck {
    pub url: String,
    /// Final HTTP status, if a response arrived.
    pub status: Option<u16>,
    /// Transport error, if the request failed.
    pub error: Option<String>,
    pub broken: bool,
}

/// Full analysis of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoReport {
    /// Analyzed URL (final URL after redirects when fetched).
    pub url: Option<String>,

    /// Time the page was fetched. `None` for local HTML.
    pub fetched_at: Option<DateTime<Utc>>,

    /// HTTP status of the page response.
    pub http_status: Option<u16>,

    pub data: SeoData,

    pub score: SeoScore,

    /// Empty unless link checking was enabled.
    pub link_checks: Vec<LinkCheck>,

    /// Non-fatal issues encountered during analysis.
    pub warnings: Vec<String>,
}

impl SeoReport {
    /// Links that returned an error status or could not be reached.
    pub fn broken_links(&self) -> impl Iterator<Item = &LinkCheck> {
        self.link_checks.iter().filter(|l| l.broken)
    }

    /// Actionable to-do items: one per recommendation and per broken link.
    #[must_use]
    pub fn todo_list(&self) -> Vec<String> {
        let mut items: Vec<String> = self
            .score
            .recommendations()
            .filter_map(|c| c.recommendation.clone())
            .collect();

        for link in self.broken_links() {
            let reason = match (link.status, link.error.as_deref()) {
                (Some(status), _) => format!("HTTP {status}"),
                (None, Some(err)) => err.to_string(),
                (None, None) => "unreachable".to_string(),
            };
            items.push(format!("Fix or remove broken link {} ({reason})", link.url));
        }

        items
    }
}
