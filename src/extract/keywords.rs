//! Keyword frequency extraction over the visible page text.
//!
//! The tokenizer is deliberately crude: split on whitespace, lowercase,
//! drop tokens of length <= 3, no stemming and no stop-word list. Common
//! words like "this" and "from" survive it. This mirrors the established
//! check semantics; do not swap in a linguistic tokenizer.

use std::collections::HashMap;

use crate::config::{KEYWORD_MIN_LENGTH_EXCLUSIVE, TOP_KEYWORD_COUNT};
use crate::parse::ParsedDocument;
use crate::report::{KeywordCount, Observation};

/// Ranks the most frequent words in the visible text.
///
/// Ordering is deterministic: counts are accumulated in first-seen order
/// and the final sort is stable on descending count, so ties keep their
/// first appearance order.
pub(crate) fn top_keywords(document: &ParsedDocument) -> Observation {
    let text = document.visible_text();

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<KeywordCount> = Vec::new();
    for token in text.split_whitespace() {
        let word = token.to_lowercase();
        if word.chars().count() <= KEYWORD_MIN_LENGTH_EXCLUSIVE {
            continue;
        }
        match index.get(&word) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push(KeywordCount { word, count: 1 });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_KEYWORD_COUNT);
    Observation::Keywords(counts)
}
