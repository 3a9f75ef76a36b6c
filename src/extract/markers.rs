//! Presence-marker extractors: analytics, favicon, social meta tags,
//! structured data, and HTTPS.

use crate::config::ANALYTICS_MARKERS;
use crate::fetch::FetchResult;
use crate::parse::ParsedDocument;
use crate::report::Observation;

/// Whether the raw HTML contains a known analytics loader marker.
///
/// Literal substring match over the unparsed body; analytics snippets live
/// in inline script text that a tag-level query would miss.
pub(crate) fn analytics(fetched: &FetchResult) -> Observation {
    Observation::Presence(
        ANALYTICS_MARKERS
            .iter()
            .any(|marker| fetched.body.contains(marker)),
    )
}

/// Whether any `<link>` declares an icon relation.
pub(crate) fn favicon(document: &ParsedDocument) -> Observation {
    Observation::Presence(document.has_icon_link())
}

/// Whether at least one Open Graph (`property="og:*"`) or Twitter Card
/// (`name="twitter:*"`) meta tag exists.
pub(crate) fn social_meta_tags(document: &ParsedDocument) -> Observation {
    let present = document.meta_tags().iter().any(|meta| {
        let og = meta
            .property
            .as_deref()
            .is_some_and(|p| p.to_ascii_lowercase().starts_with("og:"));
        let twitter = meta
            .name
            .as_deref()
            .is_some_and(|n| n.to_ascii_lowercase().starts_with("twitter:"));
        og || twitter
    });
    Observation::Presence(present)
}

/// Whether the final URL is served over HTTPS.
pub(crate) fn https(fetched: &FetchResult) -> Observation {
    Observation::Presence(fetched.final_url.starts_with("https://"))
}

/// Whether at least one JSON-LD structured-data block exists.
pub(crate) fn structured_data(document: &ParsedDocument) -> Observation {
    Observation::Presence(document.json_ld_block_count() >= 1)
}
