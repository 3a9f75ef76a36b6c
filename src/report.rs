//! Report data model: the check catalogue, observations, verdicts, and the
//! aggregate audit report.
//!
//! Every check has a fixed, named slot in the catalogue; the report is an
//! ordered sequence of one result per check, never an open-ended mapping.
//! All types here are immutable once produced and serializable so an
//! external rendering collaborator can consume them.

use serde::Serialize;
use strum_macros::EnumIter;

/// The fixed catalogue of audit checks, in report order.
///
/// Adding a check means adding a variant here plus its extractor and verdict
/// rule; existing checks are never touched, since no extractor depends on
/// another's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter)]
pub enum Check {
    /// `<title>` text and length
    Title,
    /// `<meta name="description">` text and length
    MetaDescription,
    /// `<link rel="canonical">` href
    CanonicalUrl,
    /// All `<h1>` heading texts, in document order
    H1Headings,
    /// All `<h2>` heading texts, in document order
    H2Headings,
    /// Images whose `alt` attribute is absent or blank
    ImagesMissingAlt,
    /// Total number of `<img>` elements
    ImageCount,
    /// Open Graph / Twitter Card meta tag presence
    SocialMetaTags,
    /// Most frequent words in the visible page text
    TopKeywords,
    /// Analytics loader presence in the raw HTML
    Analytics,
    /// `<link rel~="icon">` presence
    Favicon,
    /// `<meta name="google-site-verification">` presence
    SearchConsoleVerification,
    /// Whether the final URL is served over HTTPS
    Https,
    /// `<script type="application/ld+json">` presence
    StructuredData,
    /// robots.txt probe result
    RobotsTxt,
    /// sitemap.xml probe result
    Sitemap,
    /// Whether an unknown path answers with a proper 404
    Custom404,
    /// `noindex` directive in `<meta name="robots">`
    Noindex,
    /// `nofollow` directive in `<meta name="robots">`
    Nofollow,
}

impl Check {
    /// Human-readable check name, used in report output and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Check::Title => "Title Tag",
            Check::MetaDescription => "Meta Description",
            Check::CanonicalUrl => "Canonical URL",
            Check::H1Headings => "H1 Headings",
            Check::H2Headings => "H2 Headings",
            Check::ImagesMissingAlt => "Image Alt Attributes",
            Check::ImageCount => "Image Count",
            Check::SocialMetaTags => "Social Meta Tags",
            Check::TopKeywords => "Top Keywords",
            Check::Analytics => "Analytics",
            Check::Favicon => "Favicon",
            Check::SearchConsoleVerification => "Search Console Verification",
            Check::Https => "HTTPS",
            Check::StructuredData => "Structured Data",
            Check::RobotsTxt => "Robots.txt",
            Check::Sitemap => "XML Sitemap",
            Check::Custom404 => "Custom 404 Page",
            Check::Noindex => "Noindex Directive",
            Check::Nofollow => "Nofollow Directive",
        }
    }
}

/// An image reported by the missing-alt check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    /// Image URL resolved against the page's final URL.
    pub absolute_url: String,
    /// File extension of the image path, lowercased; empty when absent.
    pub file_extension: String,
}

/// One entry in the ranked top-keywords list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    /// The lowercased token.
    pub word: String,
    /// How many times it occurred in the visible text.
    pub count: usize,
}

/// One raw, typed fact extracted from the fetched page by a single check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Observation {
    /// Extracted text; `None` is the explicit "missing" sentinel.
    Text(Option<String>),
    /// A boolean presence fact.
    Presence(bool),
    /// Images flagged by a check.
    Images(Vec<ImageRef>),
    /// Ranked keyword frequencies.
    Keywords(Vec<KeywordCount>),
    /// Heading texts in document order.
    Headings(Vec<String>),
    /// A plain count.
    Count(usize),
}

impl Observation {
    /// One-line rendering of the observation for terminal output.
    pub fn summary(&self) -> String {
        match self {
            Observation::Text(Some(text)) => format!("\"{}\" ({} chars)", text, text.chars().count()),
            Observation::Text(None) => "missing".to_string(),
            Observation::Presence(true) => "present".to_string(),
            Observation::Presence(false) => "absent".to_string(),
            Observation::Images(images) => match images.len() {
                0 => "none".to_string(),
                1 => images[0].absolute_url.clone(),
                n => format!("{} images ({}, ...)", n, images[0].absolute_url),
            },
            Observation::Keywords(keywords) => keywords
                .iter()
                .map(|k| format!("{} ({})", k.word, k.count))
                .collect::<Vec<_>>()
                .join(", "),
            Observation::Headings(headings) => match headings.len() {
                0 => "none".to_string(),
                _ => headings.join(" | "),
            },
            Observation::Count(n) => n.to_string(),
        }
    }
}

/// The Pass/Warning/Missing classification derived from an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// The check is satisfied.
    Pass,
    /// The signal exists but falls outside policy, or actively hurts.
    Warning,
    /// The signal is absent.
    Missing,
}

/// The outcome of one check: observation, verdict, and fixed texts.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Which catalogue slot this result fills.
    pub check: Check,
    /// Human-readable check name.
    pub name: &'static str,
    /// The raw extracted fact.
    pub observation: Observation,
    /// Classification of the observation under fixed policy.
    pub verdict: Verdict,
    /// Fixed description of what a failing observation means.
    pub issue: &'static str,
    /// Fixed remediation advice, independent of the observation's value.
    pub recommendation: &'static str,
    /// Optional free-text elaboration from an external collaborator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elaboration: Option<String>,
}

/// The aggregate result of one audit run.
///
/// Fetch failure never produces a partial report; `run_audit` returns an
/// error instead. A successful run always carries the full check catalogue.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// The input URL after scheme normalization.
    pub requested_url: String,
    /// URL after following redirects.
    pub final_url: String,
    /// HTTP status of the primary fetch (recorded even when non-2xx).
    pub status_code: u16,
    /// Whether the final URL differs from the requested one (ignoring a
    /// trailing slash).
    pub was_redirected: bool,
    /// One result per catalogue check, in catalogue order.
    pub checks: Vec<CheckResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn catalogue_starts_with_title_and_covers_all_checks() {
        let checks: Vec<Check> = Check::iter().collect();
        assert_eq!(checks.first(), Some(&Check::Title));
        assert_eq!(checks.len(), 19);
    }

    #[test]
    fn observation_text_summary_reports_char_length() {
        let obs = Observation::Text(Some("héllo".to_string()));
        assert_eq!(obs.summary(), "\"héllo\" (5 chars)");
        assert_eq!(Observation::Text(None).summary(), "missing");
    }

    #[test]
    fn report_serializes_with_tagged_observations() {
        let report = AuditReport {
            requested_url: "https://example.com".to_string(),
            final_url: "https://example.com/".to_string(),
            status_code: 200,
            was_redirected: false,
            checks: vec![CheckResult {
                check: Check::Favicon,
                name: Check::Favicon.as_str(),
                observation: Observation::Presence(true),
                verdict: Verdict::Pass,
                issue: "",
                recommendation: "",
                elaboration: None,
            }],
        };
        let json = serde_json::to_value(&report).expect("report serializes");
        assert_eq!(json["status_code"], 200);
        assert_eq!(json["checks"][0]["observation"]["kind"], "presence");
        assert_eq!(json["checks"][0]["verdict"], "Pass");
        // elaboration is omitted entirely when absent
        assert!(json["checks"][0].get("elaboration").is_none());
    }
}
