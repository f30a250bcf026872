// Keyword classifiers for brand strategy text.
// Pure `(text) -> tags` functions over explicit keyword tables; no LLM calls.

pub mod archetype;
pub mod handlers;
pub mod values;

/// Bumped whenever any keyword table in this module changes, so stored
/// classifications can be traced back to the table that produced them.
pub const KEYWORD_TABLE_VERSION: u32 = 1;

/// Lowercases `text` and reduces it to space-separated words, padded with a
/// leading and trailing space so phrases can be matched on word boundaries.
pub(crate) fn normalize(text: &str) -> String {
    let words: Vec<String> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();
    format!(" {} ", words.join(" "))
}

/// Whole-word (or whole-phrase) match against a string from `normalize`.
pub(crate) fn contains_term(normalized: &str, term: &str) -> bool {
    normalized.contains(&format!(" {term} "))
}
