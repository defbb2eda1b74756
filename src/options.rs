//! Configuration options for fetching and scoring.
//!
//! The `Options` struct controls how pages are fetched and which thresholds
//! the scoring checks use.

use std::ops::RangeInclusive;
use std::time::Duration;

/// User agent sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("seo-score/", env!("CARGO_PKG_VERSION"));

/// Configuration options for SEO analysis.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use seo_score::Options;
///
/// let options = Options {
///     focus_keyword: Some("rust crates".to_string()),
///     check_links: true,
///     ..Options::default()
/// };
/// assert_eq!(options.min_word_count, 300);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// URL of the analyzed page.
    ///
    /// Used as the base for resolving relative links and the canonical
    /// href, and for separating internal from external links. When a page
    /// is fetched, the final URL after redirects replaces this value.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Timeout for each HTTP request.
    ///
    /// Default: 10 seconds
    pub timeout: Duration,

    /// `User-Agent` header value.
    ///
    /// Default: `seo-score/<version>`
    pub user_agent: String,

    /// Maximum number of redirects followed per request.
    ///
    /// Default: `10`
    pub max_redirects: usize,

    /// Keyword or phrase the page is expected to rank for.
    ///
    /// When set, an extra scoring check looks for it in the title,
    /// description and body.
    ///
    /// Default: `None`
    pub focus_keyword: Option<String>,

    /// Check every link on the page for a 4xx/5xx response.
    ///
    /// Only honored by `analyze_url`.
    ///
    /// Default: `false`
    pub check_links: bool,

    /// Upper bound on the number of links checked.
    ///
    /// Default: `50`
    pub max_links_checked: usize,

    /// Number of entries kept in the keyword frequency table.
    ///
    /// Default: `10`
    pub top_keywords: usize,

    /// Shortest word (in chars) that counts as a keyword candidate.
    ///
    /// Default: `3`
    pub min_keyword_length: usize,

    /// Title length (chars) that earns full points.
    ///
    /// Default: `50..=60`
    pub title_length: RangeInclusive<usize>,

    /// Meta description length (chars) that earns full points.
    ///
    /// Default: `120..=160`
    pub description_length: RangeInclusive<usize>,

    /// Minimum number of body words for the content check.
    ///
    /// Default: `300`
    pub min_word_count: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: 10,
            focus_keyword: None,
            check_links: false,
            max_links_checked: 50,
            top_keywords: 10,
            min_keyword_length: 3,
            title_length: 50..=60,
            description_length: 120..=160,
            min_word_count: 300,
        }
    }
}

impl Options {
    /// Returns the focus keyword if it contains anything besides whitespace.
    #[must_use]
    pub fn focus_keyword(&self) -> Option<&str> {
        self.focus_keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_thresholds() {
        let opts = Options::default();

        assert!(opts.url.is_none());
        assert_eq!(opts.timeout, Duration::from_secs(10));
        assert!(opts.user_agent.starts_with("seo-score/"));
        assert_eq!(opts.max_redirects, 10);
        assert!(opts.focus_keyword.is_none());
        assert!(!opts.check_links);
        assert_eq!(opts.max_links_checked, 50);
        assert_eq!(opts.top_keywords, 10);
        assert_eq!(opts.min_keyword_length, 3);
        assert_eq!(opts.title_length, 50..=60);
        assert_eq!(opts.description_length, 120..=160);
        assert_eq!(opts.min_word_count, 300);
    }

    #[test]
    fn test_blank_focus_keyword_is_ignored() {
        let opts = Options {
            focus_keyword: Some("   ".to_string()),
            ..Options::default()
        };
        assert_eq!(opts.focus_keyword(), None);
    }

    #[test]
    fn test_focus_keyword_is_trimmed() {
        let opts = Options {
            focus_keyword: Some("  rust  ".to_string()),
            ..Options::default()
        };
        assert_eq!(opts.focus_keyword(), Some("rust"));
    }

    #[test]
    fn test_custom_thresholds() {
        let opts = Options {
            title_length: 30..=65,
            min_word_count: 600,
            ..Options::default()
        };

        assert_eq!(opts.title_length, 30..=65);
        assert_eq!(opts.min_word_count, 600);
        assert_eq!(opts.description_length, 120..=160);
    }
}
