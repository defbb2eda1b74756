//! Single-pass SEO field extraction.
//!
//! Parses the HTML once, reads head-level metadata, then strips
//! non-content elements and collects body signals (headings, images,
//! links, words, keywords).

use dom_query::Document;
use tracing::debug;
use url::Url;

use crate::dom;
use crate::keywords::{self, KeywordContext};
use crate::metadata;
use crate::result::{HeadingCounts, ImageStats, LinkStats, SeoData};
use crate::url_utils::{self, LinkTarget};
use crate::Options;

/// Extract all SEO fields from an HTML string.
#[must_use]
pub fn extract_seo_data(html: &str, options: &Options) -> SeoData {
    let doc = dom::parse(html);
    let base = options.url.as_deref().and_then(url_utils::parse_page_url);
    extract_from_document(&doc, base.as_ref(), options)
}

/// Extract all SEO fields from a parsed document.
///
/// The document is modified: `script`, `style`, `noscript` and `template`
/// elements are removed once the head-level metadata has been read.
#[must_use]
pub fn extract_from_document(doc: &Document, base: Option<&Url>, options: &Options) -> SeoData {
    let mut data = metadata::extract_metadata(doc, SeoData::default(), base);

    dom::strip_non_content(doc);

    data.h1 = first_h1(doc);
    data.headings = count_headings(doc);
    data.images = image_stats(doc);
    data.links = link_stats(doc, base);

    let body_text = dom::body_text(doc);
    data.word_count = body_text.split_whitespace().count();

    let tokens = keywords::tokenize(&body_text);
    data.keywords =
        keywords::keyword_frequency(&tokens, options.min_keyword_length, options.top_keywords);

    if let Some(keyword) = options.focus_keyword() {
        let page_url = base.map(Url::as_str);
        let ctx = KeywordContext {
            title: data.title.as_deref(),
            description: data.meta_description.as_deref(),
            h1: data.h1.as_deref(),
            url: page_url,
        };
        data.focus_keyword = keywords::analyze_focus_keyword(keyword, &tokens, &ctx);
    }

    debug!(
        words = data.word_count,
        images = data.images.total,
        links = data.links.urls.len(),
        "extracted page fields"
    );

    data
}

/// Text of the first `<h1>` that has any.
#[must_use]
pub fn first_h1(doc: &Document) -> Option<String> {
    dom::each(doc, "h1").find_map(|h1| dom::trimmed_text(&h1))
}

/// Count headings per level.
#[must_use]
pub fn count_headings(doc: &Document) -> HeadingCounts {
    HeadingCounts {
        h1: dom::count(doc, "h1"),
        h2: dom::count(doc, "h2"),
        h3: dom::count(doc, "h3"),
        h4: dom::count(doc, "h4"),
        h5: dom::count(doc, "h5"),
        h6: dom::count(doc, "h6"),
    }
}

/// Count images and those without usable alt text.
#[must_use]
pub fn image_stats(doc: &Document) -> ImageStats {
    let mut stats = ImageStats::default();
    for img in dom::each(doc, "img") {
        stats.total += 1;
        if dom::get_trimmed_attribute(&img, "alt").is_none() {
            stats.missing_alt += 1;
        }
    }
    stats
}

/// Classify links and collect the unique absolute URLs for link checking.
#[must_use]
pub fn link_stats(doc: &Document, base: Option<&Url>) -> LinkStats {
    let mut stats = LinkStats::default();

    for link in dom::each(doc, "a[href]") {
        let href = dom::get_attribute(&link, "href").unwrap_or_default();

        let url = match url_utils::classify_link(&href, base) {
            LinkTarget::Skip => continue,
            LinkTarget::Internal(url) => {
                stats.internal += 1;
                url
            }
            LinkTarget::External(url) => {
                stats.external += 1;
                Some(url)
            }
        };

        if dom::attribute_has_token(&link, "rel", "nofollow") {
            stats.nofollow += 1;
        }

        if let Some(url) = url {
            let url = url_utils::without_fragment(url).to_string();
            if !stats.urls.contains(&url) {
                stats.urls.push(url);
            }
        }
    }

    stats
}
