//! HTML Meta Tag Extraction
//!
//! Reads `<meta>` tags into the SEO fields: description (with Open Graph
//! fallback), robots directives, viewport, keywords and Open Graph preview
//! tags.

use dom_query::Document;

use crate::dom;
use crate::result::{DescriptionSource, RobotsDirectives, SeoData};

/// Examine HTML meta tags for SEO fields.
///
/// The first non-empty value of each field wins. `<meta name="robots">`
/// takes precedence over `<meta name="googlebot">` regardless of order.
#[must_use]
pub fn examine_meta(doc: &Document, original: SeoData) -> SeoData {
    let mut result = original;
    let mut googlebot: Option<String> = None;

    for meta in dom::each(doc, "meta") {
        let Some(content) = dom::get_trimmed_attribute(&meta, "content") else {
            continue;
        };

        // Tags like `name="twitter:description" property="og:description"`
        // count under both keys.
        let keys = ["name", "property"]
            .into_iter()
            .filter_map(|attr| dom::get_trimmed_attribute(&meta, attr))
            .map(|key| key.to_lowercase());

        for name in keys {
            apply_meta(&mut result, &mut googlebot, &name, &content);
        }
    }

    if result.robots.content.is_none() {
        if let Some(content) = googlebot {
            result.robots = parse_robots(&content);
        }
    }

    // Open Graph description stands in for a missing meta description.
    if result.meta_description.is_none() {
        if let Some(og) = result.open_graph.description.clone() {
            result.meta_description = Some(og);
            result.description_source = Some(DescriptionSource::OpenGraph);
        }
    }

    result
}

/// Record one `<meta>` key/content pair unless the field is already set.
fn apply_meta(result: &mut SeoData, googlebot: &mut Option<String>, name: &str, content: &str) {
    let content = content.to_string();
    match name {
        "description" => {
            if result.meta_description.is_none() {
                result.meta_description = Some(content);
                result.description_source = Some(DescriptionSource::Meta);
            }
        }

        "og:description" => {
            if result.open_graph.description.is_none() {
                result.open_graph.description = Some(content);
            }
        }

        "og:title" => {
            if result.open_graph.title.is_none() {
                result.open_graph.title = Some(content);
            }
        }

        "og:image" | "og:image:url" | "og:image:secure_url" => {
            if result.open_graph.image.is_none() {
                result.open_graph.image = Some(content);
            }
        }

        "robots" => {
            if result.robots.content.is_none() {
                result.robots = parse_robots(&content);
            }
        }

        "googlebot" => {
            if googlebot.is_none() {
                *googlebot = Some(content);
            }
        }

        "viewport" => {
            if result.viewport.is_none() {
                result.viewport = Some(content);
            }
        }

        "keywords" => {
            if result.meta_keywords.is_empty() {
                result.meta_keywords = parse_tag_list(&content);
            }
        }

        _ => {}
    }
}

/// Parse a robots `content` value such as `"noindex, follow"`.
///
/// `none` is shorthand for `noindex, nofollow`.
#[must_use]
pub fn parse_robots(content: &str) -> RobotsDirectives {
    let mut robots = RobotsDirectives {
        content: Some(content.trim().to_string()),
        ..RobotsDirectives::default()
    };

    for directive in content.split([',', ' ']).map(str::trim) {
        if directive.eq_ignore_ascii_case("noindex") {
            robots.noindex = true;
        } else if directive.eq_ignore_ascii_case("nofollow") {
            robots.nofollow = true;
        } else if directive.eq_ignore_ascii_case("none") {
            robots.noindex = true;
            robots.nofollow = true;
        }
    }

    robots
}

/// Parse a comma or semicolon-separated list of keywords.
fn parse_tag_list(content: &str) -> Vec<String> {
    content
        .split([',', ';'])
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_meta_tags() {
        let html = r#"<!DOCTYPE html>
        <html>
        <head>
            <meta name="description" content="  A test article.  ">
            <meta name="keywords" content="test, article; example,">
            <meta name="viewport" content="width=device-width, initial-scale=1">
        </head>
        <body></body>
        </html>"#;

        let doc = Document::from(html);
        let data = examine_meta(&doc, SeoData::default());

        assert_eq!(data.meta_description, Some("A test article.".to_string()));
        assert_eq!(data.description_source, Some(DescriptionSource::Meta));
        assert_eq!(data.meta_keywords, vec!["test", "article", "example"]);
        assert_eq!(
            data.viewport,
            Some("width=device-width, initial-scale=1".to_string())
        );
    }

    #[test]
    fn test_open_graph_description_fallback() {
        let html = r#"<html><head>
            <meta property="og:title" content="OG Title">
            <meta property="og:description" content="OG Description">
            <meta property="og:image" content="https://example.com/og.png">
        </head><body></body></html>"#;

        let doc = Document::from(html);
        let data = examine_meta(&doc, SeoData::default());

        assert_eq!(data.meta_description, Some("OG Description".to_string()));
        assert_eq!(data.description_source, Some(DescriptionSource::OpenGraph));
        assert_eq!(data.open_graph.title, Some("OG Title".to_string()));
        assert_eq!(
            data.open_graph.image,
            Some("https://example.com/og.png".to_string())
        );
    }

    #[test]
    fn test_name_and_property_both_match() {
        let html = r#"<html><head>
            <meta name="twitter:description" property="og:description" content="Shared">
            <meta name="description" property="og:title" content="Both">
        </head></html>"#;

        let doc = Document::from(html);
        let data = examine_meta(&doc, SeoData::default());

        assert_eq!(data.open_graph.description, Some("Shared".to_string()));
        assert_eq!(data.open_graph.title, Some("Both".to_string()));
        assert_eq!(data.meta_description, Some("Both".to_string()));
        assert_eq!(data.description_source, Some(DescriptionSource::Meta));
    }

    #[test]
    fn test_meta_description_preferred_over_open_graph() {
        let html = r#"<html><head>
            <meta property="og:description" content="OG Description">
            <meta name="description" content="Meta Description">
        </head></html>"#;

        let doc = Document::from(html);
        let data = examine_meta(&doc, SeoData::default());

        assert_eq!(data.meta_description, Some("Meta Description".to_string()));
        assert_eq!(data.description_source, Some(DescriptionSource::Meta));
    }

    #[test]
    fn test_empty_description_counts_as_missing() {
        let html = r#"<html><head><meta name="description" content="   "></head></html>"#;

        let doc = Document::from(html);
        let data = examine_meta(&doc, SeoData::default());

        assert!(data.meta_description.is_none());
        assert!(data.description_source.is_none());
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let html = r#"<html><head><META NAME="Description" CONTENT="Upper"></head></html>"#;

        let doc = Document::from(html);
        let data = examine_meta(&doc, SeoData::default());

        assert_eq!(data.meta_description, Some("Upper".to_string()));
    }

    #[test]
    fn test_robots_directives() {
        let robots = parse_robots("NOINDEX, follow");
        assert!(robots.noindex);
        assert!(!robots.nofollow);
        assert!(!robots.is_indexable());

        let robots = parse_robots("none");
        assert!(robots.noindex);
        assert!(robots.nofollow);

        let robots = parse_robots("index,follow");
        assert!(robots.is_indexable());
        assert_eq!(robots.content, Some("index,follow".to_string()));
    }

    #[test]
    fn test_robots_preferred_over_googlebot() {
        let html = r#"<html><head>
            <meta name="googlebot" content="noindex">
            <meta name="robots" content="index, follow">
        </head></html>"#;

        let doc = Document::from(html);
        let data = examine_meta(&doc, SeoData::default());

        assert!(data.robots.is_indexable());
        assert_eq!(data.robots.content, Some("index, follow".to_string()));
    }

    #[test]
    fn test_googlebot_used_without_robots() {
        let html = r#"<html><head><meta name="googlebot" content="noindex"></head></html>"#;

        let doc = Document::from(html);
        let data = examine_meta(&doc, SeoData::default());

        assert!(data.robots.noindex);
    }

    #[test]
    fn test_preserves_existing_fields() {
        let html = r#"<html><head><meta name="description" content="New"></head></html>"#;

        let original = SeoData {
            meta_description: Some("Existing".to_string()),
            description_source: Some(DescriptionSource::Meta),
            ..SeoData::default()
        };

        let doc = Document::from(html);
        let data = examine_meta(&doc, original);

        assert_eq!(data.meta_description, Some("Existing".to_string()));
    }
}
