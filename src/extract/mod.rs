//! Signal extraction: the fixed catalogue of independent checks.
//!
//! Each extractor is a pure function over the parsed document and the
//! fetch's transport facts, producing one typed [`Observation`]. No
//! extractor depends on another's output, so any subset can run and new
//! checks slot in without touching existing ones.

mod content;
mod images;
mod keywords;
mod markers;

use strum::IntoEnumIterator;

use crate::fetch::{FetchResult, ProbeFindings};
use crate::parse::ParsedDocument;
use crate::report::{Check, Observation};

/// Runs every catalogue check in order, pairing each with its observation.
pub(crate) fn run_checks(
    document: &ParsedDocument,
    fetched: &FetchResult,
    probes: &ProbeFindings,
) -> Vec<(Check, Observation)> {
    Check::iter()
        .map(|check| (check, observe(check, document, fetched, probes)))
        .collect()
}

/// Dispatches one check to its extractor.
pub(crate) fn observe(
    check: Check,
    document: &ParsedDocument,
    fetched: &FetchResult,
    probes: &ProbeFindings,
) -> Observation {
    match check {
        Check::Title => content::title(document),
        Check::MetaDescription => content::meta_description(document),
        Check::CanonicalUrl => content::canonical_url(document),
        Check::H1Headings => content::h1_headings(document),
        Check::H2Headings => content::h2_headings(document),
        Check::ImagesMissingAlt => images::missing_alt(document, fetched),
        Check::ImageCount => images::image_count(document),
        Check::SocialMetaTags => markers::social_meta_tags(document),
        Check::TopKeywords => keywords::top_keywords(document),
        Check::Analytics => markers::analytics(fetched),
        Check::Favicon => markers::favicon(document),
        Check::SearchConsoleVerification => content::search_console_verification(document),
        Check::Https => markers::https(fetched),
        Check::StructuredData => markers::structured_data(document),
        Check::RobotsTxt => Observation::Presence(probes.robots_txt),
        Check::Sitemap => Observation::Presence(probes.sitemap),
        Check::Custom404 => Observation::Presence(probes.custom_404),
        Check::Noindex => content::noindex(document),
        Check::Nofollow => content::nofollow(document),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Verdict;
    use crate::verdict::evaluate;

    fn https_fetch(body: &str) -> FetchResult {
        FetchResult {
            requested_url: "https://example.com".to_string(),
            final_url: "https://example.com/".to_string(),
            status_code: 200,
            body: body.to_string(),
            was_redirected: false,
        }
    }

    fn observation_for(checks: &[(Check, Observation)], wanted: Check) -> &Observation {
        &checks
            .iter()
            .find(|(check, _)| *check == wanted)
            .expect("catalogue covers every check")
            .1
    }

    #[test]
    fn catalogue_produces_one_observation_per_check() {
        let fetched = https_fetch("<html></html>");
        let document = ParsedDocument::parse(&fetched.body);
        let checks = run_checks(&document, &fetched, &ProbeFindings::default());
        assert_eq!(checks.len(), Check::iter().count());
    }

    // Fixture scenario: no <h1>, two images (one blank alt, one labeled),
    // a five-character meta description, and an HTTPS final URL.
    #[test]
    fn fixture_scenario_end_to_end() {
        let fetched = https_fetch(
            r#"<html><head>
                <meta name="description" content="short">
            </head><body>
                <h2>Subheading only</h2>
                <img src="https://example.com/hero.png" alt="">
                <img src="https://example.com/logo.png" alt="logo">
            </body></html>"#,
        );
        let document = ParsedDocument::parse(&fetched.body);
        let checks = run_checks(&document, &fetched, &ProbeFindings::default());

        let h1 = evaluate(
            Check::H1Headings,
            observation_for(&checks, Check::H1Headings).clone(),
        );
        assert_eq!(h1.verdict, Verdict::Warning);

        match observation_for(&checks, Check::ImagesMissingAlt) {
            Observation::Images(images) => {
                assert_eq!(images.len(), 1);
                assert_eq!(images[0].absolute_url, "https://example.com/hero.png");
                assert_eq!(images[0].file_extension, "png");
            }
            other => panic!("unexpected observation: {other:?}"),
        }

        let meta = evaluate(
            Check::MetaDescription,
            observation_for(&checks, Check::MetaDescription).clone(),
        );
        assert_eq!(meta.verdict, Verdict::Warning);

        let https = evaluate(Check::Https, observation_for(&checks, Check::Https).clone());
        assert_eq!(https.verdict, Verdict::Pass);
    }

    #[test]
    fn probe_findings_land_in_disjoint_slots() {
        let fetched = https_fetch("<html></html>");
        let document = ParsedDocument::parse(&fetched.body);
        let probes = ProbeFindings {
            robots_txt: false,
            sitemap: true,
            custom_404: true,
        };
        let checks = run_checks(&document, &fetched, &probes);
        assert_eq!(
            observation_for(&checks, Check::RobotsTxt),
            &Observation::Presence(false)
        );
        assert_eq!(
            observation_for(&checks, Check::Sitemap),
            &Observation::Presence(true)
        );
        assert_eq!(
            observation_for(&checks, Check::Custom404),
            &Observation::Presence(true)
        );
    }
}
