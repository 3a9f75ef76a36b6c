//! HTML parsing: a read-only query surface over a fetched page.
//!
//! [`ParsedDocument`] wraps the parsed node tree and exposes exactly the
//! queries the signal extractors need: title, meta tags, link relations,
//! headings, images, JSON-LD blocks, and visible text. Parsing never fails;
//! malformed HTML simply resolves queries to absent/empty values, which is
//! indistinguishable from legitimately absent markup.
//!
//! All querying is done with CSS selectors via the `scraper` crate.
//! Attribute *values* (rel, type, meta names) are matched case-insensitively
//! by hand, since the tree builder only normalizes tag and attribute names.

use scraper::{Html, Selector};
use std::sync::LazyLock;

const TITLE_SELECTOR_STR: &str = "title";
const META_SELECTOR_STR: &str = "meta";
const LINK_SELECTOR_STR: &str = "link";
const H1_SELECTOR_STR: &str = "h1";
const H2_SELECTOR_STR: &str = "h2";
const IMG_SELECTOR_STR: &str = "img";
const SCRIPT_SELECTOR_STR: &str = "script";
const BODY_TEXT_SELECTOR_STR: &str = "body, body *";

/// Compiles a selector that is a compile-time constant, panicking with a
/// detailed message if it is malformed. This is a programming error, never
/// an input error.
fn compile_selector_unsafe(selector: &str, context: &str) -> Selector {
    Selector::parse(selector).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector, context, e
        )
    })
}

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector_unsafe(META_SELECTOR_STR, "META_SELECTOR"));
static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector_unsafe(LINK_SELECTOR_STR, "LINK_SELECTOR"));
static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector_unsafe(H1_SELECTOR_STR, "H1_SELECTOR"));
static H2_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector_unsafe(H2_SELECTOR_STR, "H2_SELECTOR"));
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector_unsafe(IMG_SELECTOR_STR, "IMG_SELECTOR"));
static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector_unsafe(SCRIPT_SELECTOR_STR, "SCRIPT_SELECTOR"));
static BODY_TEXT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector_unsafe(BODY_TEXT_SELECTOR_STR, "BODY_TEXT_SELECTOR"));

/// Heading level queried via [`ParsedDocument::headings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `<h1>` elements
    H1,
    /// `<h2>` elements
    H2,
}

/// A meta tag's identifying attributes and content, all trimmed.
#[derive(Debug, Clone, Default)]
pub struct MetaTag {
    /// The `name` attribute, if present.
    pub name: Option<String>,
    /// The `property` attribute, if present (Open Graph style).
    pub property: Option<String>,
    /// The `content` attribute, if present.
    pub content: Option<String>,
}

/// An `<img>` element's `src`/`alt` attributes as written in the document.
#[derive(Debug, Clone, Default)]
pub struct RawImage {
    /// The `src` attribute, untrimmed, if present.
    pub src: Option<String>,
    /// The `alt` attribute, untrimmed, if present.
    pub alt: Option<String>,
}

/// Read-only view over a fetched page's HTML, owned by a single audit run.
pub struct ParsedDocument {
    document: Html,
}

impl ParsedDocument {
    /// Parses HTML into a queryable document. Never fails: the tree builder
    /// recovers from malformed input, and missing elements resolve to
    /// absent/empty query results.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// First `<title>` text, trimmed. `None` when absent or empty.
    pub fn title(&self) -> Option<String> {
        self.document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|title| !title.is_empty())
    }

    /// All meta tags with their name/property/content attributes.
    pub fn meta_tags(&self) -> Vec<MetaTag> {
        self.document
            .select(&META_SELECTOR)
            .map(|element| MetaTag {
                name: element.value().attr("name").map(|v| v.trim().to_string()),
                property: element
                    .value()
                    .attr("property")
                    .map(|v| v.trim().to_string()),
                content: element
                    .value()
                    .attr("content")
                    .map(|v| v.trim().to_string()),
            })
            .collect()
    }

    /// Content of the first `<meta name="...">` matching `name`
    /// (case-insensitive), trimmed. `None` when no such tag exists or the
    /// first matching tag has no `content` attribute.
    pub fn meta_content(&self, name: &str) -> Option<String> {
        // Match the tag first, then read its content: a name-matching tag
        // without content must not be shadowed by a later duplicate.
        self.document
            .select(&META_SELECTOR)
            .find(|element| {
                element
                    .value()
                    .attr("name")
                    .is_some_and(|n| n.trim().eq_ignore_ascii_case(name))
            })
            .and_then(|element| {
                element
                    .value()
                    .attr("content")
                    .map(|content| content.trim().to_string())
            })
    }

    /// `href` of the first `<link rel="canonical">`, trimmed.
    pub fn canonical_href(&self) -> Option<String> {
        self.document.select(&LINK_SELECTOR).find_map(|element| {
            let rel = element.value().attr("rel")?;
            if rel.trim().eq_ignore_ascii_case("canonical") {
                element
                    .value()
                    .attr("href")
                    .map(|href| href.trim().to_string())
                    .filter(|href| !href.is_empty())
            } else {
                None
            }
        })
    }

    /// Whether any `<link>` has a `rel` containing "icon" (case-insensitive
    /// substring, so "shortcut icon" and "apple-touch-icon" both count).
    pub fn has_icon_link(&self) -> bool {
        self.document.select(&LINK_SELECTOR).any(|element| {
            element
                .value()
                .attr("rel")
                .is_some_and(|rel| rel.to_ascii_lowercase().contains("icon"))
        })
    }

    /// Texts of all headings at `level`, trimmed, in document order.
    /// Empty headings are kept as empty strings so counts stay faithful.
    pub fn headings(&self, level: HeadingLevel) -> Vec<String> {
        let selector = match level {
            HeadingLevel::H1 => &*H1_SELECTOR,
            HeadingLevel::H2 => &*H2_SELECTOR,
        };
        self.document
            .select(selector)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .collect()
    }

    /// All `<img>` elements with their raw `src`/`alt` attributes.
    pub fn images(&self) -> Vec<RawImage> {
        self.document
            .select(&IMG_SELECTOR)
            .map(|element| RawImage {
                src: element.value().attr("src").map(str::to_string),
                alt: element.value().attr("alt").map(str::to_string),
            })
            .collect()
    }

    /// Number of `<script type="application/ld+json">` blocks.
    pub fn json_ld_block_count(&self) -> usize {
        self.document
            .select(&SCRIPT_SELECTOR)
            .filter(|element| {
                element
                    .value()
                    .attr("type")
                    .is_some_and(|t| t.trim().eq_ignore_ascii_case("application/ld+json"))
            })
            .count()
    }

    /// Concatenated text of the document body, excluding script, style, and
    /// noscript content. Used for keyword frequency analysis.
    pub fn visible_text(&self) -> String {
        let mut out = String::new();
        for element in self.document.select(&BODY_TEXT_SELECTOR) {
            if matches!(element.value().name(), "script" | "style" | "noscript") {
                continue;
            }
            // Only direct text children; descendants contribute through
            // their own element match, so nothing is counted twice.
            for child in element.children() {
                if let Some(text) = child.value().as_text() {
                    out.push_str(text);
                    out.push(' ');
                }
            }
        }
        out
    }
}
