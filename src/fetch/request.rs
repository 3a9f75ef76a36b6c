//! HTTP request decoration.
//!
//! Applies a realistic browser header set to outgoing requests. Sites that
//! fingerprint headers may serve stripped-down pages (or block outright) to
//! obvious bots, which would corrupt every on-page signal the audit reads.

/// Applies standard browser-like headers to a request builder.
///
/// Used for the primary fetch and all auxiliary probes so the whole run
/// presents one consistent fingerprint.
pub(crate) fn with_browser_headers(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    builder
        .header(
            reqwest::header::ACCEPT,
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
        )
        .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
        .header(reqwest::header::CACHE_CONTROL, "max-age=0")
}
