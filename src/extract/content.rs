//! Text-content extractors: title, meta description, canonical URL,
//! headings, search-console verification, and robots directives.

use crate::parse::{HeadingLevel, ParsedDocument};
use crate::report::Observation;

/// Title text; the `None` sentinel marks an absent or empty `<title>`.
pub(crate) fn title(document: &ParsedDocument) -> Observation {
    Observation::Text(document.title())
}

/// Meta description text, with the same missing-sentinel convention.
pub(crate) fn meta_description(document: &ParsedDocument) -> Observation {
    Observation::Text(
        document
            .meta_content("description")
            .filter(|content| !content.is_empty()),
    )
}

/// `<link rel="canonical">` href, or the missing sentinel.
pub(crate) fn canonical_url(document: &ParsedDocument) -> Observation {
    Observation::Text(document.canonical_href())
}

/// Ordered `<h1>` texts. An empty list is distinct from "one H1 found".
pub(crate) fn h1_headings(document: &ParsedDocument) -> Observation {
    Observation::Headings(document.headings(HeadingLevel::H1))
}

/// Ordered `<h2>` texts.
pub(crate) fn h2_headings(document: &ParsedDocument) -> Observation {
    Observation::Headings(document.headings(HeadingLevel::H2))
}

/// Whether a `<meta name="google-site-verification">` with non-empty
/// content exists.
pub(crate) fn search_console_verification(document: &ParsedDocument) -> Observation {
    Observation::Presence(
        document
            .meta_content("google-site-verification")
            .is_some_and(|content| !content.is_empty()),
    )
}

/// Whether `<meta name="robots">` carries a `noindex` directive.
pub(crate) fn noindex(document: &ParsedDocument) -> Observation {
    Observation::Presence(robots_directive_present(document, "noindex"))
}

/// Whether `<meta name="robots">` carries a `nofollow` directive.
pub(crate) fn nofollow(document: &ParsedDocument) -> Observation {
    Observation::Presence(robots_directive_present(document, "nofollow"))
}

// Case-insensitive substring match; an absent robots tag means no directive.
fn robots_directive_present(document: &ParsedDocument, directive: &str) -> bool {
    document
        .meta_content("robots")
        .is_some_and(|content| content.to_ascii_lowercase().contains(directive))
}
