//! Brand value extraction — maps free text to canonical core values.

use crate::strategy::{contains_term, normalize};

/// Canonical value and the terms that signal it. Output follows table order.
const VALUE_KEYWORDS: &[(&str, &[&str])] = &[
    ("integrity", &["integrity", "honest", "honesty", "ethical", "transparent", "transparency"]),
    ("innovation", &["innovation", "innovative", "creative", "creativity", "pioneering"]),
    ("quality", &["quality", "excellence", "craftsmanship", "premium", "reliable"]),
    ("sustainability", &["sustainability", "sustainable", "eco", "green", "carbon neutral", "planet"]),
    ("community", &["community", "together", "belonging", "inclusive", "local"]),
    ("customer_focus", &["customer", "customers", "client", "clients", "service"]),
    ("empowerment", &["empower", "empowerment", "enable", "independence", "confidence"]),
    ("simplicity", &["simple", "simplicity", "easy", "effortless", "clarity"]),
    ("courage", &["bold", "brave", "courage", "fearless", "daring"]),
    ("fun", &["fun", "playful", "joy", "delight"]),
];

/// Returns the canonical values mentioned in `text`, each at most once, in
/// table order.
pub fn extract_values(text: &str) -> Vec<String> {
    let normalized = normalize(text);

    VALUE_KEYWORDS
        .iter()
        .filter(|(_, terms)| terms.iter().any(|t| contains_term(&normalized, t)))
        .map(|(value, _)| value.to_string())
        .collect()
}
