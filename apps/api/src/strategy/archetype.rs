//! Brand archetype classifier — ranks the twelve archetypes by keyword hits.

use serde::{Deserialize, Serialize};

use crate::strategy::{contains_term, normalize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Innocent,
    Sage,
    Explorer,
    Outlaw,
    Magician,
    Hero,
    Lover,
    Jester,
    Everyman,
    Caregiver,
    Ruler,
    Creator,
}

/// Archetype keyword table. Order breaks ties in the ranking.
const ARCHETYPE_KEYWORDS: &[(Archetype, &[&str])] = &[
    (
        Archetype::Innocent,
        &["simple", "pure", "honest", "wholesome", "optimistic", "happy", "trust", "natural"],
    ),
    (
        Archetype::Sage,
        &["knowledge", "wisdom", "truth", "expert", "research", "insight", "learn", "understand"],
    ),
    (
        Archetype::Explorer,
        &["adventure", "discover", "freedom", "explore", "journey", "authentic", "independent", "outdoor"],
    ),
    (
        Archetype::Outlaw,
        &["rebel", "disrupt", "revolution", "break", "rules", "radical", "challenge", "wild"],
    ),
    (
        Archetype::Magician,
        &["transform", "magic", "vision", "dream", "imagine", "innovative", "possibility", "wonder"],
    ),
    (
        Archetype::Hero,
        &["courage", "strong", "win", "achieve", "mastery", "perform", "champion", "bold"],
    ),
    (
        Archetype::Lover,
        &["passion", "intimate", "beauty", "luxury", "sensual", "romance", "desire", "indulge"],
    ),
    (
        Archetype::Jester,
        &["fun", "playful", "humor", "joy", "laugh", "entertain", "silly", "witty"],
    ),
    (
        Archetype::Everyman,
        &["everyday", "belong", "friendly", "down to earth", "affordable", "community", "relatable", "practical"],
    ),
    (
        Archetype::Caregiver,
        &["care", "nurture", "protect", "support", "compassion", "help", "service", "family"],
    ),
    (
        Archetype::Ruler,
        &["control", "leader", "premium", "exclusive", "authority", "stability", "power", "prestige"],
    ),
    (
        Archetype::Creator,
        &["create", "craft", "design", "original", "build", "artistic", "express", "innovation"],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeMatch {
    pub archetype: Archetype,
    /// Number of distinct keywords found.
    pub score: u32,
    pub matched_keywords: Vec<String>,
}

/// Ranks archetypes by distinct keyword hits, strongest first.
/// Archetypes with no hit are omitted.
pub fn classify_archetypes(text: &str) -> Vec<ArchetypeMatch> {
    let normalized = normalize(text);

    let mut matches: Vec<ArchetypeMatch> = ARCHETYPE_KEYWORDS
        .iter()
        .filter_map(|(archetype, keywords)| {
            let matched_keywords: Vec<String> = keywords
                .iter()
                .filter(|kw| contains_term(&normalized, kw))
                .map(|kw| kw.to_string())
                .collect();
            if matched_keywords.is_empty() {
                return None;
            }
            Some(ArchetypeMatch {
                archetype: *archetype,
                score: matched_keywords.len() as u32,
                matched_keywords,
            })
        })
        .collect();

    // stable sort keeps table order among equal scores
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}
