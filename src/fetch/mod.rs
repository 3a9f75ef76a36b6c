//! Page fetching: URL normalization, the primary GET, and transport facts.
//!
//! The fetcher is the only component that touches the network. It records
//! transport-level facts (status code, final URL after redirects, scheme)
//! into an immutable [`FetchResult`]. Non-2xx responses are captured, not
//! errored: only transport-level failure (connection refused, DNS failure,
//! timeout) aborts with a [`FetchError`].

mod probes;
mod request;

pub use probes::ProbeFindings;

use log::debug;
use reqwest::redirect::Policy;
use url::Url;

use crate::config::{AuditConfig, MAX_REDIRECT_HOPS, MAX_URL_LENGTH};
use crate::error::FetchError;

/// Transport-level facts about the primary fetch, created once per run.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// The input as given, normalized to include a scheme.
    pub requested_url: String,
    /// URL after following redirects; always scheme-qualified.
    pub final_url: String,
    /// HTTP status code, set even on non-2xx responses.
    pub status_code: u16,
    /// Raw HTML body text.
    pub body: String,
    /// Whether `final_url` differs from `requested_url`, ignoring a
    /// trailing slash.
    pub was_redirected: bool,
}

/// HTTP client configured for audit runs.
///
/// Wraps a `reqwest::Client` with the audit's timeout, user agent, and
/// redirect policy. One client serves the primary fetch and all probes.
pub struct AuditClient {
    client: reqwest::Client,
}

impl AuditClient {
    /// Builds the client from an [`AuditConfig`].
    pub fn new(config: &AuditConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .redirect(Policy::limited(MAX_REDIRECT_HOPS))
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the primary page.
    ///
    /// Normalizes the input (prepending `https://` when no scheme is
    /// present), issues a GET with browser-like headers, follows redirects
    /// transparently, and captures status/final URL/body.
    ///
    /// # Errors
    ///
    /// Fails only on invalid input URLs and transport-level failures. A
    /// reachable server returning 404 or 500 yields `Ok` with that status.
    pub async fn fetch(&self, raw_url: &str) -> Result<FetchResult, FetchError> {
        let requested = normalize_url(raw_url)?;
        debug!("Fetching {}", requested);

        let response = request::with_browser_headers(self.client.get(requested.clone()))
            .send()
            .await
            .map_err(|e| FetchError::classify(requested.as_str(), e))?;

        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::classify(final_url.as_str(), e))?;

        let requested_url = requested.to_string();
        let was_redirected =
            final_url.trim_end_matches('/') != requested_url.trim_end_matches('/');
        debug!(
            "Fetched {} -> {} (status {}, {} bytes)",
            requested_url,
            final_url,
            status_code,
            body.len()
        );

        Ok(FetchResult {
            requested_url,
            final_url,
            status_code,
            body,
            was_redirected,
        })
    }
}

/// Validates and normalizes a URL.
///
/// Adds an `https://` prefix when no scheme is present, then requires the
/// result to parse as an http(s) URL. Rejects inputs longer than
/// [`MAX_URL_LENGTH`].
pub fn normalize_url(raw_url: &str) -> Result<Url, FetchError> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err(FetchError::InvalidUrl {
            url: raw_url.to_string(),
            reason: "empty input".to_string(),
        });
    }
    if trimmed.len() > MAX_URL_LENGTH {
        // Truncate on a char boundary; byte slicing would panic on
        // multibyte input.
        let preview: String = trimmed.chars().take(50).collect();
        return Err(FetchError::InvalidUrl {
            url: format!("{preview}..."),
            reason: format!("exceeds maximum length of {} characters", MAX_URL_LENGTH),
        });
    }

    let candidate = if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        format!("https://{trimmed}")
    } else {
        trimmed.to_string()
    };

    let parsed = Url::parse(&candidate).map_err(|e| FetchError::InvalidUrl {
        url: raw_url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(FetchError::InvalidUrl {
            url: raw_url.to_string(),
            reason: format!("unsupported scheme '{scheme}'"),
        }),
    }
}
