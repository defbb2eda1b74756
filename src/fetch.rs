//! HTTP retrieval.
//!
//! One blocking GET for the page itself, plus a sequential link checker
//! that reuses the same client configuration.

use std::time::{Duration, Instant};

use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use tracing::{debug, info, warn};
use url::Url;

use crate::encoding;
use crate::error::{Error, Result};
use crate::result::LinkCheck;
use crate::url_utils;
use crate::Options;

/// A downloaded page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects.
    pub url: Url,
    /// HTTP status of the final response.
    pub status: u16,
    /// Raw `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Body decoded to UTF-8.
    pub body: String,
    /// Time from sending the request to reading the whole body.
    pub elapsed: Duration,
}

/// Build the blocking client shared by page fetches and link checks.
pub fn build_client(options: &Options) -> Result<Client> {
    Client::builder()
        .timeout(options.timeout)
        .user_agent(options.user_agent.clone())
        .redirect(Policy::limited(options.max_redirects))
        .build()
        .map_err(|e| Error::Fetch(e.to_string()))
}

/// Fetch a page, failing on transport errors and 4xx/5xx responses.
///
/// Bare hosts like `example.com` are fetched over https.
pub fn fetch_page(url: &str, options: &Options) -> Result<FetchedPage> {
    let client = build_client(options)?;
    fetch_with_client(&client, url)
}

/// Fetch a page with an existing client.
pub fn fetch_with_client(client: &Client, url: &str) -> Result<FetchedPage> {
    let parsed = url_utils::parse_page_url(url).ok_or_else(|| Error::InvalidUrl(url.to_string()))?;

    info!(url = %parsed, "fetching page");
    let started = Instant::now();

    let response = client.get(parsed).send()?.error_for_status()?;

    let status = response.status().as_u16();
    let final_url = response.url().clone();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let bytes = response.bytes()?;
    let body = encoding::decode_body(&bytes, content_type.as_deref());
    let elapsed = started.elapsed();

    debug!(
        status,
        bytes = bytes.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        final_url = %final_url,
        "page fetched"
    );

    Ok(FetchedPage {
        url: final_url,
        status,
        content_type,
        body,
        elapsed,
    })
}

/// Checks links for error responses, one request at a time.
pub struct LinkChecker {
    client: Client,
    limit: usize,
}

impl LinkChecker {
    /// Create a checker honoring the timeout, user agent and link limit of `options`.
    pub fn new(options: &Options) -> Result<Self> {
        Ok(Self {
            client: build_client(options)?,
            limit: options.max_links_checked,
        })
    }

    /// Check up to the configured number of unique http(s) URLs, in order.
    pub fn check_all<I, S>(&self, urls: I) -> Vec<LinkCheck>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: Vec<String> = Vec::new();
        let mut results = Vec::new();

        for url in urls {
            if results.len() >= self.limit {
                break;
            }
            let url = url.as_ref().trim();
            if seen.iter().any(|s| s == url) {
                continue;
            }
            seen.push(url.to_string());

            let (true, Some(_)) = url_utils::is_absolute_url(url) else {
                continue;
            };
            results.push(self.check(url));
        }

        let broken = results.iter().filter(|r| r.broken).count();
        info!(checked = results.len(), broken, "link check finished");
        results
    }

    /// Check a single URL.
    ///
    /// Sends HEAD first and falls back to GET when the server rejects HEAD
    /// or the HEAD request fails.
    #[must_use]
    pub fn check(&self, url: &str) -> LinkCheck {
        let head = self.client.head(url).send();

        let response = match head {
            Ok(resp) if !head_unsupported(resp.status()) => Ok(resp),
            Ok(resp) => {
                debug!(url, status = resp.status().as_u16(), "HEAD rejected, retrying with GET");
                self.client.get(url).send()
            }
            Err(err) => {
                debug!(url, error = %err, "HEAD failed, retrying with GET");
                self.client.get(url).send()
            }
        };

        link_result(url, response)
    }
}

fn head_unsupported(status: StatusCode) -> bool {
    status == StatusCode::METHOD_NOT_ALLOWED || status == StatusCode::NOT_IMPLEMENTED
}

fn link_result(url: &str, response: reqwest::Result<Response>) -> LinkCheck {
    match response {
        Ok(resp) => {
            let status = resp.status();
            let broken = status.is_client_error() || status.is_server_error();
            if broken {
                warn!(url, status = status.as_u16(), "broken link");
            }
            LinkCheck {
                url: url.to_string(),
                status: Some(status.as_u16()),
                error: None,
                broken,
            }
        }
        Err(err) => {
            warn!(url, error = %err, "link unreachable");
            LinkCheck {
                url: url.to_string(),
                status: None,
                error: Some(err.to_string()),
                broken: true,
            }
        }
    }
}
