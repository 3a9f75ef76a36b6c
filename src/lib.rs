//! seo_audit library: on-page SEO extraction and scoring.
//!
//! This library fetches a target page, parses it, runs a fixed catalogue of
//! independent on-page checks (title, meta description, headings, image alt
//! coverage, structured data, social tags, analytics presence,
//! redirect/HTTPS/404 behavior, and more), and scores each raw observation
//! into a pass/warning/missing verdict with a fixed recommendation.
//!
//! Data flows strictly one way: fetch -> parse -> extract -> evaluate ->
//! [`AuditReport`]. Every value is created fresh per run and immutable once
//! built; nothing persists across invocations.
//!
//! # Example
//!
//! ```no_run
//! use seo_audit::{config::AuditConfig, run_audit, AuditClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AuditClient::new(&AuditConfig::default())?;
//! let report = run_audit("example.com", &client, None).await?;
//! for check in &report.checks {
//!     println!("{}: {:?}", check.name, check.verdict);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod enrich;
mod error;
mod extract;
mod fetch;
mod parse;
mod report;
mod verdict;

// Re-export public API
pub use enrich::Elaborator;
pub use error::{EnrichmentError, FetchError};
pub use fetch::{normalize_url, AuditClient, FetchResult, ProbeFindings};
pub use parse::{HeadingLevel, MetaTag, ParsedDocument, RawImage};
pub use report::{
    AuditReport, Check, CheckResult, ImageRef, KeywordCount, Observation, Verdict,
};
pub use verdict::evaluate;

use log::{info, warn};
use url::Url;

/// Runs a full audit of one URL.
///
/// Fetches the page, runs the auxiliary probes concurrently, extracts every
/// catalogue observation, evaluates each under the fixed verdict policy,
/// and optionally offers each finding to an injected [`Elaborator`].
///
/// # Arguments
///
/// * `url` - Target URL; `https://` is assumed when no scheme is given
/// * `client` - The configured HTTP client
/// * `elaborator` - Optional free-text enrichment collaborator
///
/// # Errors
///
/// Fails only when the input URL is invalid or the *primary* fetch hits a
/// transport-level failure. Auxiliary probe failures degrade their own
/// check, enrichment failures drop the elaboration, and malformed HTML
/// degrades to absent observations; none of those abort the run.
pub async fn run_audit(
    url: &str,
    client: &AuditClient,
    elaborator: Option<&dyn Elaborator>,
) -> Result<AuditReport, FetchError> {
    let fetched = client.fetch(url).await?;
    info!(
        "Fetched {} (status {}, redirected: {})",
        fetched.final_url, fetched.status_code, fetched.was_redirected
    );

    let probes = match Url::parse(&fetched.final_url) {
        Ok(base) => client.run_probes(&base).await,
        Err(e) => {
            // Should not happen for a URL reqwest just resolved; degrade
            // the probe checks rather than aborting.
            warn!("Could not derive probe base from {}: {e}", fetched.final_url);
            ProbeFindings::default()
        }
    };

    // The parsed DOM is not Send; keep it scoped between awaits so the
    // returned future stays spawnable.
    let observations = {
        let document = ParsedDocument::parse(&fetched.body);
        extract::run_checks(&document, &fetched, &probes)
    };

    let mut checks = Vec::with_capacity(observations.len());
    for (check, observation) in observations {
        let mut result = verdict::evaluate(check, observation);
        if let Some(elaborator) = elaborator {
            match elaborator.elaborate(check, &result.observation).await {
                Ok(text) => result.elaboration = Some(text),
                Err(e) => warn!("Elaboration skipped for {}: {e}", check.as_str()),
            }
        }
        checks.push(result);
    }

    Ok(AuditReport {
        requested_url: fetched.requested_url,
        final_url: fetched.final_url,
        status_code: fetched.status_code,
        was_redirected: fetched.was_redirected,
        checks,
    })
}
