//! Verdict policy: maps each raw observation to Pass/Warning/Missing plus
//! fixed issue and recommendation texts.
//!
//! Deterministic and pure, with no history dependency across checks or
//! runs. Thresholds come from `config::constants` and are not configurable
//! at call time. Noindex and Nofollow carry inverted polarity: presence of
//! the directive is the problem, absence is the pass.

use crate::config::{
    META_DESCRIPTION_MAX_LENGTH, META_DESCRIPTION_MIN_LENGTH, TITLE_MAX_LENGTH, TITLE_MIN_LENGTH,
};
use crate::report::{Check, CheckResult, Observation, Verdict};

/// Evaluates one observation under the fixed per-check policy.
pub fn evaluate(check: Check, observation: Observation) -> CheckResult {
    let verdict = classify(check, &observation);
    let (issue, recommendation) = texts(check);
    CheckResult {
        check,
        name: check.as_str(),
        observation,
        verdict,
        issue,
        recommendation,
        elaboration: None,
    }
}

fn classify(check: Check, observation: &Observation) -> Verdict {
    match check {
        Check::Title => length_bounded(observation, TITLE_MIN_LENGTH, TITLE_MAX_LENGTH),
        Check::MetaDescription => length_bounded(
            observation,
            META_DESCRIPTION_MIN_LENGTH,
            META_DESCRIPTION_MAX_LENGTH,
        ),
        Check::CanonicalUrl => match observation {
            Observation::Text(Some(_)) => Verdict::Pass,
            _ => Verdict::Missing,
        },
        // Exactly one H1: zero is a missed on-page opportunity, several
        // dilute the page's single-topic signal.
        Check::H1Headings => match observation {
            Observation::Headings(headings) if headings.len() == 1 => Verdict::Pass,
            _ => Verdict::Warning,
        },
        Check::H2Headings => match observation {
            Observation::Headings(headings) if !headings.is_empty() => Verdict::Pass,
            _ => Verdict::Warning,
        },
        Check::ImagesMissingAlt => match observation {
            Observation::Images(images) if images.is_empty() => Verdict::Pass,
            _ => Verdict::Warning,
        },
        // Informational checks: the observation itself is the finding.
        Check::ImageCount | Check::TopKeywords => Verdict::Pass,
        // Absent feature
        Check::SocialMetaTags
        | Check::Analytics
        | Check::Favicon
        | Check::SearchConsoleVerification
        | Check::StructuredData
        | Check::RobotsTxt
        | Check::Sitemap => presence(observation, Verdict::Missing),
        // Unmet property on an existing page
        Check::Https | Check::Custom404 => presence(observation, Verdict::Warning),
        // Inverted polarity: the directive's presence suppresses
        // indexing/link equity.
        Check::Noindex | Check::Nofollow => match observation {
            Observation::Presence(true) => Verdict::Warning,
            _ => Verdict::Pass,
        },
    }
}

fn length_bounded(observation: &Observation, min: usize, max: usize) -> Verdict {
    match observation {
        Observation::Text(Some(text)) => {
            let length = text.chars().count();
            if length < min || length > max {
                Verdict::Warning
            } else {
                Verdict::Pass
            }
        }
        _ => Verdict::Missing,
    }
}

fn presence(observation: &Observation, on_false: Verdict) -> Verdict {
    match observation {
        Observation::Presence(true) => Verdict::Pass,
        _ => on_false,
    }
}

/// Fixed (issue, recommendation) strings per check, independent of the
/// observation's specific value.
fn texts(check: Check) -> (&'static str, &'static str) {
    match check {
        Check::Title => (
            "The title tag is missing or its length is outside the 50-70 character range.",
            "Write a unique, descriptive title of 50-70 characters that leads with the page's primary topic.",
        ),
        Check::MetaDescription => (
            "The meta description is missing or its length is outside the 120-320 character range.",
            "Add a meta description of 120-320 characters summarizing the page; it is the snippet searchers see.",
        ),
        Check::CanonicalUrl => (
            "No canonical URL is declared, so duplicate-content variants may compete with each other.",
            "Add a <link rel=\"canonical\"> pointing at the preferred URL of this page.",
        ),
        Check::H1Headings => (
            "The page does not have exactly one H1 heading.",
            "Use a single H1 stating the page's main topic; move secondary headings to H2/H3.",
        ),
        Check::H2Headings => (
            "The page has no H2 headings to structure its content.",
            "Break the content into sections with H2 headings that include relevant keywords.",
        ),
        Check::ImagesMissingAlt => (
            "Some images are missing alt text, which hurts accessibility and image search.",
            "Add a short, descriptive alt attribute to every meaningful image.",
        ),
        Check::ImageCount => (
            "Informational: total number of images on the page.",
            "Keep image file sizes small and lazy-load below-the-fold images.",
        ),
        Check::SocialMetaTags => (
            "No Open Graph or Twitter Card tags were found, so shared links render poorly.",
            "Add og:title, og:description, og:image and twitter:card meta tags.",
        ),
        Check::TopKeywords => (
            "Informational: the most frequent words in the visible page text.",
            "Check that the ranked words actually reflect the topic you want the page to rank for.",
        ),
        Check::Analytics => (
            "No analytics integration was detected in the page source.",
            "Install an analytics tag (for example gtag.js) to measure traffic and conversions.",
        ),
        Check::Favicon => (
            "No favicon link was found.",
            "Add a <link rel=\"icon\"> so browsers and result pages can show your site's icon.",
        ),
        Check::SearchConsoleVerification => (
            "No Google Search Console verification meta tag was found.",
            "Verify the site in Search Console and keep the google-site-verification tag in place.",
        ),
        Check::Https => (
            "The page is not served over HTTPS.",
            "Serve the site over HTTPS and redirect all HTTP traffic to it.",
        ),
        Check::StructuredData => (
            "No JSON-LD structured data was found on the page.",
            "Add JSON-LD markup for your content type so search engines can show rich results.",
        ),
        Check::RobotsTxt => (
            "No robots.txt file was found at the site root.",
            "Publish a robots.txt declaring crawl rules and the sitemap location.",
        ),
        Check::Sitemap => (
            "No XML sitemap was found at /sitemap.xml.",
            "Generate an XML sitemap and reference it from robots.txt.",
        ),
        Check::Custom404 => (
            "Unknown paths do not answer with a proper 404 status.",
            "Return a 404 status with a helpful error page for nonexistent URLs.",
        ),
        Check::Noindex => (
            "A noindex directive is present, which excludes the page from search results.",
            "Remove the noindex directive unless this page is intentionally hidden from search.",
        ),
        Check::Nofollow => (
            "A nofollow directive is present, which stops link equity from flowing out of the page.",
            "Remove the page-wide nofollow directive unless every outbound link is untrusted.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_obs(value: &str) -> Observation {
        Observation::Text(Some(value.to_string()))
    }

    #[test]
    fn missing_title_is_missing_regardless_of_other_content() {
        let result = evaluate(Check::Title, Observation::Text(None));
        assert_eq!(result.verdict, Verdict::Missing);
        assert_eq!(result.observation, Observation::Text(None));
    }

    #[test]
    fn title_length_boundaries() {
        assert_eq!(
            evaluate(Check::Title, text_obs(&"a".repeat(49))).verdict,
            Verdict::Warning
        );
        assert_eq!(
            evaluate(Check::Title, text_obs(&"a".repeat(50))).verdict,
            Verdict::Pass
        );
        assert_eq!(
            evaluate(Check::Title, text_obs(&"a".repeat(70))).verdict,
            Verdict::Pass
        );
        assert_eq!(
            evaluate(Check::Title, text_obs(&"a".repeat(71))).verdict,
            Verdict::Warning
        );
    }

    #[test]
    fn meta_description_length_boundaries() {
        assert_eq!(
            evaluate(Check::MetaDescription, text_obs("short")).verdict,
            Verdict::Warning
        );
        assert_eq!(
            evaluate(Check::MetaDescription, text_obs(&"a".repeat(120))).verdict,
            Verdict::Pass
        );
        assert_eq!(
            evaluate(Check::MetaDescription, text_obs(&"a".repeat(321))).verdict,
            Verdict::Warning
        );
        assert_eq!(
            evaluate(Check::MetaDescription, Observation::Text(None)).verdict,
            Verdict::Missing
        );
    }

    #[test]
    fn exactly_one_h1_passes() {
        let one = Observation::Headings(vec!["Main".to_string()]);
        assert_eq!(evaluate(Check::H1Headings, one).verdict, Verdict::Pass);

        let none = Observation::Headings(Vec::new());
        assert_eq!(evaluate(Check::H1Headings, none).verdict, Verdict::Warning);

        let two = Observation::Headings(vec!["A".to_string(), "B".to_string()]);
        assert_eq!(evaluate(Check::H1Headings, two).verdict, Verdict::Warning);
    }

    #[test]
    fn empty_missing_alt_list_passes() {
        assert_eq!(
            evaluate(Check::ImagesMissingAlt, Observation::Images(Vec::new())).verdict,
            Verdict::Pass
        );
        let flagged = Observation::Images(vec![crate::report::ImageRef {
            absolute_url: "https://example.com/a.png".to_string(),
            file_extension: "png".to_string(),
        }]);
        assert_eq!(
            evaluate(Check::ImagesMissingAlt, flagged).verdict,
            Verdict::Warning
        );
    }

    #[test]
    fn presence_checks_map_false_to_missing_or_warning() {
        assert_eq!(
            evaluate(Check::Favicon, Observation::Presence(false)).verdict,
            Verdict::Missing
        );
        assert_eq!(
            evaluate(Check::Favicon, Observation::Presence(true)).verdict,
            Verdict::Pass
        );
        assert_eq!(
            evaluate(Check::Https, Observation::Presence(false)).verdict,
            Verdict::Warning
        );
        assert_eq!(
            evaluate(Check::Custom404, Observation::Presence(false)).verdict,
            Verdict::Warning
        );
    }

    // The one inverted rule: a noindex/nofollow directive being present is
    // the warning, its absence is the pass.
    #[test]
    fn noindex_polarity_is_inverted() {
        assert_eq!(
            evaluate(Check::Noindex, Observation::Presence(true)).verdict,
            Verdict::Warning
        );
        assert_eq!(
            evaluate(Check::Noindex, Observation::Presence(false)).verdict,
            Verdict::Pass
        );
        assert_eq!(
            evaluate(Check::Nofollow, Observation::Presence(true)).verdict,
            Verdict::Warning
        );
        assert_eq!(
            evaluate(Check::Nofollow, Observation::Presence(false)).verdict,
            Verdict::Pass
        );
    }

    #[test]
    fn informational_checks_always_pass() {
        assert_eq!(
            evaluate(Check::ImageCount, Observation::Count(0)).verdict,
            Verdict::Pass
        );
        assert_eq!(
            evaluate(Check::TopKeywords, Observation::Keywords(Vec::new())).verdict,
            Verdict::Pass
        );
    }

    #[test]
    fn every_check_carries_fixed_texts() {
        use strum::IntoEnumIterator;
        for check in Check::iter() {
            let (issue, recommendation) = texts(check);
            assert!(!issue.is_empty(), "{} has no issue text", check.as_str());
            assert!(
                !recommendation.is_empty(),
                "{} has no recommendation text",
                check.as_str()
            );
        }
    }
}
