//! Metadata extraction module.
//!
//! Head-level SEO fields: title, meta tags, canonical link, document
//! language and structured data blocks.

pub mod meta_tags;

use dom_query::Document;
use url::Url;

use crate::dom;
use crate::result::SeoData;
use crate::url_utils;

pub use meta_tags::{examine_meta, parse_robots};

/// Extract all head-level metadata from a document.
///
/// Orchestrates the individual extractors in order:
/// 1. `<title>` element
/// 2. HTML meta tags (description, robots, Open Graph, ...)
/// 3. canonical link
/// 4. `<html lang>` and JSON-LD block count
///
/// # Arguments
/// * `doc` - The HTML document (scripts not yet stripped)
/// * `original` - Data collected so far
/// * `base` - Page URL used to resolve the canonical href
#[must_use]
pub fn extract_metadata(doc: &Document, original: SeoData, base: Option<&Url>) -> SeoData {
    let mut data = original;

    if data.title.is_none() {
        data.title = examine_title_element(doc);
    }

    data = meta_tags::examine_meta(doc, data);

    if data.canonical.is_none() {
        data.canonical = extract_canonical(doc, base);
    }

    if data.language.is_none() {
        data.language = dom::first(doc, "html").and_then(|html| dom::get_trimmed_attribute(&html, "lang"));
    }

    data.structured_data_blocks = count_json_ld(doc);

    data
}

/// Text of the document `<title>`.
///
/// Prefers the title inside `<head>` so that SVG `<title>` elements in the
/// body are not mistaken for it.
#[must_use]
pub fn examine_title_element(doc: &Document) -> Option<String> {
    dom::first(doc, "head title")
        .or_else(|| dom::first(doc, "title"))
        .and_then(|title| dom::trimmed_text(&title))
}

/// `href` of the first `<link rel="canonical">`, resolved against `base`.
///
/// Without a base, the raw href is returned as written.
#[must_use]
pub fn extract_canonical(doc: &Document, base: Option<&Url>) -> Option<String> {
    let link = dom::each(doc, "link[rel]")
        .find(|link| dom::attribute_has_token(link, "rel", "canonical"))?;

    let href = dom::get_trimmed_attribute(&link, "href")?;

    Some(
        url_utils::resolve_href(&href, base)
            .map_or(href, |url| url.to_string()),
    )
}

/// Number of JSON-LD structured data blocks.
#[must_use]
pub fn count_json_ld(doc: &Document) -> usize {
    dom::each(doc, "script[type]")
        .filter(|script| {
            dom::get_attribute(script, "type")
                .is_some_and(|t| t.trim().eq_ignore_ascii_case("application/ld+json"))
        })
        .count()
}
