//! Image extractors: the missing-alt list and the total image count.

use url::Url;

use crate::fetch::FetchResult;
use crate::parse::ParsedDocument;
use crate::report::{ImageRef, Observation};

/// Images whose `alt` attribute is absent or blank after trimming.
///
/// Images with no usable `src` are skipped entirely; there is nothing to
/// report for them. Each offending `<img>` element contributes exactly one
/// entry, with its URL resolved against the page's final URL.
pub(crate) fn missing_alt(document: &ParsedDocument, fetched: &FetchResult) -> Observation {
    let base = Url::parse(&fetched.final_url).ok();
    let mut flagged = Vec::new();
    for image in document.images() {
        let Some(src) = image
            .src
            .as_deref()
            .map(str::trim)
            .filter(|src| !src.is_empty())
        else {
            continue;
        };
        let has_alt = image
            .alt
            .as_deref()
            .is_some_and(|alt| !alt.trim().is_empty());
        if has_alt {
            continue;
        }
        flagged.push(image_ref(src, base.as_ref()));
    }
    Observation::Images(flagged)
}

/// Total `<img>` element count, including images with alt text.
pub(crate) fn image_count(document: &ParsedDocument) -> Observation {
    Observation::Count(document.images().len())
}

fn image_ref(src: &str, base: Option<&Url>) -> ImageRef {
    let absolute_url = match base.and_then(|base| base.join(src).ok()) {
        Some(resolved) => resolved.to_string(),
        // Unresolvable src: report it verbatim rather than dropping it.
        None => src.to_string(),
    };
    ImageRef {
        file_extension: extension_of(&absolute_url),
        absolute_url,
    }
}

// Extension of the URL path, ignoring query and fragment. Empty when the
// last path segment has no dot.
fn extension_of(url: &str) -> String {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or("").to_string(),
    };
    let last_segment = path.rsplit('/').next().unwrap_or("");
    match last_segment.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => String::new(),
    }
}
