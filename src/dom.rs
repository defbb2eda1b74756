//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by the extraction pass.
//! Keeps attribute and text access in one place so the extractors read
//! as plain lookups.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

/// Elements whose text never counts as page content.
pub const NON_CONTENT_TAGS: &str = "script, style, noscript, template";

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value, trimmed, or `None` if it is blank.
#[must_use]
pub fn get_trimmed_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Check whether a space-separated attribute (like `rel`) contains `token`,
/// ignoring ASCII case.
#[must_use]
pub fn attribute_has_token(sel: &Selection, name: &str, token: &str) -> bool {
    sel.attr(name).is_some_and(|value| {
        value
            .split_ascii_whitespace()
            .any(|t| t.eq_ignore_ascii_case(token))
    })
}

// === Text Content ===

/// Trimmed text of a selection, or `None` if it has no visible text.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> Option<String> {
    let text = sel.text();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

// === Querying ===

/// Iterate over every element matching `selector` as its own selection.
///
/// `dom_query` selections hold all matches at once; most extractors need to
/// inspect them one by one.
pub fn each<'a>(doc: &'a Document, selector: &str) -> impl Iterator<Item = Selection<'a>> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect::<Vec<_>>()
        .into_iter()
}

/// First element matching `selector`, if any.
#[must_use]
pub fn first<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
}

/// Count of elements matching `selector`.
#[inline]
#[must_use]
pub fn count(doc: &Document, selector: &str) -> usize {
    doc.select(selector).length()
}

// === Tree Manipulation ===

/// Remove script, style and similar elements so that text queries only see
/// rendered content.
pub fn strip_non_content(doc: &Document) {
    doc.select(NON_CONTENT_TAGS).remove();
}

/// Visible body text, one space between text nodes so that adjacent
/// elements like `<p>a</p><p>b</p>` do not merge words.
///
/// Falls back to the whole document if there is no body.
#[must_use]
pub fn body_text(doc: &Document) -> String {
    let body = doc.select("body");
    let root = if body.is_empty() { doc.select("html") } else { body };

    let Some(root_node) = root.nodes().first() else {
        return String::new();
    };

    let mut out = String::new();
    for node in root_node.descendants() {
        if node.is_text() {
            out.push_str(&node.text());
            out.push(' ');
        }
    }
    out
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
