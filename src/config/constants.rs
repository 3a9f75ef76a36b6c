//! Configuration constants.
//!
//! This module defines all fixed design parameters used throughout the
//! application: network timeouts, verdict thresholds, and probe paths.
//! Verdict thresholds are deliberately constants rather than call-time
//! parameters; every audit run scores against the same policy.

use std::time::Duration;

/// Per-request HTTP timeout.
///
/// Applies to the primary fetch and to each auxiliary probe independently.
/// Probes are short-lived and bounded by the same limit.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// Maximum redirect hops followed before giving up.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Maximum URL length to prevent abuse via extremely long URLs.
/// Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Default User-Agent string for HTTP requests.
///
/// Many sites serve degraded or blocked responses to obvious bot agents,
/// which would skew every on-page signal. Users can override this via the
/// `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Verdict thresholds (character counts)
/// Minimum title length for a passing verdict.
pub const TITLE_MIN_LENGTH: usize = 50;
/// Maximum title length for a passing verdict.
pub const TITLE_MAX_LENGTH: usize = 70;
/// Minimum meta description length for a passing verdict.
pub const META_DESCRIPTION_MIN_LENGTH: usize = 120;
/// Maximum meta description length for a passing verdict.
pub const META_DESCRIPTION_MAX_LENGTH: usize = 320;

/// Number of ranked keywords reported by the top-keywords check.
pub const TOP_KEYWORD_COUNT: usize = 10;

/// Tokens at or below this length are dropped during keyword extraction.
/// A coarse stop-word approximation; common words like "this" and "from"
/// survive it. Intentionally not replaced with a real stop-word list.
pub const KEYWORD_MIN_LENGTH_EXCLUSIVE: usize = 3;

/// Literal substrings whose presence in the raw HTML marks an analytics
/// integration (Google Analytics / gtag loaders).
pub const ANALYTICS_MARKERS: [&str; 3] = ["gtag(", "google-analytics.com", "analytics.js"];

/// Synthetic path used by the custom-404 probe.
///
/// Assumed never legitimately routable. Sites using client-side routing
/// that answer 200 for every path will always score "no custom 404" here,
/// even if the server handles true 404s properly. Known limitation.
pub const SYNTHETIC_404_PATH: &str = "/seo-audit-missing-page-probe-3f9c1b7e";

/// Path probed for a robots.txt file.
pub const ROBOTS_TXT_PATH: &str = "/robots.txt";

/// Path probed for an XML sitemap.
pub const SITEMAP_PATH: &str = "/sitemap.xml";
