//! URL Utility Functions
//!
//! Validation of user-supplied page URLs, resolution of hrefs found in the
//! document, and internal/external link classification.

use url::Url;

/// Prefixes of hrefs that never point at a crawlable page.
const NON_NAVIGABLE_SCHEMES: &[&str] = &["javascript:", "mailto:", "tel:", "data:"];

/// How an `<a href>` relates to the analyzed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Same host as the page. Carries the absolute URL when one could be built.
    Internal(Option<Url>),
    /// Different host.
    External(Url),
    /// Fragment-only, script or contact link.
    Skip,
}

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    // Must start with http:// or https://
    let lower = s.to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Parse a URL typed by a user.
///
/// Bare hosts such as `example.com/page` get `https://` prepended.
/// Returns `None` for anything that still is not an absolute http(s) URL.
#[must_use]
pub fn parse_page_url(input: &str) -> Option<Url> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let (true, parsed) = is_absolute_url(input) {
        return parsed.filter(has_no_credentials);
    }

    // Something with an explicit other scheme is not a web page.
    if input.contains("://") || has_foreign_scheme(input) {
        return None;
    }

    let (is_abs, parsed) = is_absolute_url(&format!("https://{input}"));
    if is_abs {
        parsed
            .filter(has_no_credentials)
            .filter(|u| u.host_str().is_some_and(|h| h.contains('.') || h == "localhost"))
    } else {
        None
    }
}

/// Resolve an href against an optional base URL.
///
/// Returns `None` for empty, fragment-only and non-navigable hrefs, and for
/// relative hrefs when no base is known.
#[must_use]
pub fn resolve_href(href: &str, base: Option<&Url>) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') || is_non_navigable(href) {
        return None;
    }

    if let (true, parsed) = is_absolute_url(href) {
        return parsed;
    }

    let resolved = base?.join(href).ok()?;
    match resolved.scheme() {
        "http" | "https" => Some(resolved),
        _ => None,
    }
}

/// Classify an href as internal, external or not a page link.
///
/// Hosts are compared after stripping a leading `www.`. Without a base
/// URL, relative hrefs count as internal and absolute ones as external.
#[must_use]
pub fn classify_link(href: &str, base: Option<&Url>) -> LinkTarget {
    let trimmed = href.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || is_non_navigable(trimmed) {
        return LinkTarget::Skip;
    }

    let (is_abs, parsed) = is_absolute_url(trimmed);
    if is_abs {
        return parsed.map_or(LinkTarget::Skip, |url| classify_absolute(url, base));
    }

    // Protocol-relative: another host unless it resolves to the page's own.
    if trimmed.starts_with("//") {
        let scheme = base.map_or("https", Url::scheme);
        return match is_absolute_url(&format!("{scheme}:{trimmed}")) {
            (true, Some(url)) => classify_absolute(url, base),
            _ => LinkTarget::Skip,
        };
    }

    // Other explicit schemes (ftp:, ...) are not pages.
    if has_scheme(trimmed) {
        return LinkTarget::Skip;
    }

    LinkTarget::Internal(resolve_href(trimmed, base))
}

/// Whether two URLs share a host, ignoring case and a leading `www.`.
#[must_use]
pub fn same_site(a: &Url, b: &Url) -> bool {
    match (a.host_str(), b.host_str()) {
        (Some(ha), Some(hb)) => normalize_host(ha) == normalize_host(hb),
        _ => false,
    }
}

/// Lowercase a host and strip a trailing dot and leading `www.`.
#[must_use]
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('.').to_ascii_lowercase();
    host.strip_prefix("www.").unwrap_or(&host).to_string()
}

/// Remove the fragment so the same page is only checked once.
#[must_use]
pub fn without_fragment(mut url: Url) -> Url {
    url.set_fragment(None);
    url
}

fn classify_absolute(url: Url, base: Option<&Url>) -> LinkTarget {
    match base {
        Some(base) if same_site(&url, base) => LinkTarget::Internal(Some(url)),
        _ => LinkTarget::External(url),
    }
}

fn has_no_credentials(url: &Url) -> bool {
    url.username().is_empty() && url.password().is_none()
}

/// `mailto:x@example.com` parses with its own scheme; `example.com:8080/`
/// also parses, but what follows the colon is a port.
fn has_foreign_scheme(input: &str) -> bool {
    let Ok(parsed) = Url::parse(input) else {
        return false;
    };
    let rest = input.get(parsed.scheme().len() + 1..).unwrap_or_default();
    !rest.starts_with(|c: char| c.is_ascii_digit())
}

fn is_non_navigable(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    NON_NAVIGABLE_SCHEMES.iter().any(|p| lower.starts_with(p))
}

fn has_scheme(href: &str) -> bool {
    // Only hrefs with their own scheme parse without a base.
    Url::parse(href).is_ok()
}
