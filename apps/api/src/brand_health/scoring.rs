//! Brand health scoring — fixed point budgets per dimension, one weighted overall score.
//!
//! Every function here is pure and total: malformed section content counts as
//! "field absent" and contributes nothing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::brand_health::models::{find_section, has_asset, BrandRecords, SubScores};
use crate::models::brand::{
    AssetType, BrandGuidelinesRow, BrandRow, BrandVoiceRow, ComplianceCheckRow, SectionType,
    StrategySectionRow, VisualAssetRow,
};

pub const MAX_SCORE: u32 = 100;

// Completeness budget: 5 sections × 10 + 3 assets × 10 + voice 10 + guidelines 10 = 100.
const SECTION_COMPLETED_POINTS: u32 = 10;
const SECTION_STARTED_POINTS: u32 = 5;
const ASSET_POINTS: u32 = 10;
const VOICE_POINTS: u32 = 10;
const GUIDELINES_POINTS: u32 = 10;

const CONSISTENCY_FULL_KIT: u32 = 70;
const CONSISTENCY_PARTIAL_KIT: u32 = 50;

const UNIQUENESS_BASE: u32 = 50;
const COMPETITIVE_ADVANTAGE_BONUS: u32 = 15;
const MARKET_GAP_BONUS: u32 = 15;
const UNIQUE_VALUE_BONUS: u32 = 20;

const RELEVANCE_BASE: u32 = 60;
const PRIMARY_AUDIENCE_BONUS: u32 = 20;
const PAIN_POINT_BONUS: u32 = 5;
const PAIN_POINTS_CAP: u32 = 20;
const INDUSTRY_BONUS: u32 = 10;

/// Free-text answers must be longer than this to count as substantive.
const SUBSTANTIVE_TEXT_CHARS: usize = 20;

/// Relative weights of the four dimensions in the overall score.
/// Integer percentages so the weighted sum rounds exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub completeness: u32,
    pub consistency: u32,
    pub uniqueness: u32,
    pub relevance: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            completeness: 30,
            consistency: 30,
            uniqueness: 20,
            relevance: 20,
        }
    }
}

impl ScoringWeights {
    fn total(&self) -> u32 {
        self.completeness + self.consistency + self.uniqueness + self.relevance
    }
}

/// Points for strategy sections, scored visual assets, voice and guidelines.
pub fn completeness(
    sections: &[StrategySectionRow],
    assets: &[VisualAssetRow],
    voice: Option<&BrandVoiceRow>,
    guidelines: Option<&BrandGuidelinesRow>,
) -> u32 {
    let section_points: u32 = SectionType::ALL
        .into_iter()
        .map(|t| match find_section(sections, t) {
            Some(s) if s.completed => SECTION_COMPLETED_POINTS,
            Some(_) => SECTION_STARTED_POINTS,
            None => 0,
        })
        .sum();

    let asset_points: u32 = AssetType::SCORED
        .into_iter()
        .filter(|t| has_asset(assets, *t))
        .map(|_| ASSET_POINTS)
        .sum();

    let voice_points = if voice.is_some() { VOICE_POINTS } else { 0 };
    let guidelines_points = if guidelines.is_some() {
        GUIDELINES_POINTS
    } else {
        0
    };

    (section_points + asset_points + voice_points + guidelines_points).min(MAX_SCORE)
}

/// Mean of the supplied compliance checks, or a fixed estimate from the
/// visual kit when no check has been run yet.
///
/// The caller limits `checks` to the most recent window.
pub fn consistency(
    checks: &[ComplianceCheckRow],
    assets: &[VisualAssetRow],
    voice: Option<&BrandVoiceRow>,
) -> u32 {
    if checks.is_empty() {
        let full_kit =
            AssetType::SCORED.into_iter().all(|t| has_asset(assets, t)) && voice.is_some();
        return if full_kit {
            CONSISTENCY_FULL_KIT
        } else {
            CONSISTENCY_PARTIAL_KIT
        };
    }

    let sum: f64 = checks.iter().map(|c| c.score).sum();
    clamp_score(sum / checks.len() as f64)
}

pub fn uniqueness(sections: &[StrategySectionRow]) -> u32 {
    let mut score = UNIQUENESS_BASE;

    if let Some(competitive) = find_section(sections, SectionType::Competitive) {
        if is_substantive(&competitive.content, "competitiveAdvantage") {
            score += COMPETITIVE_ADVANTAGE_BONUS;
        }
        if is_substantive(&competitive.content, "marketGap") {
            score += MARKET_GAP_BONUS;
        }
    }

    if let Some(values) = find_section(sections, SectionType::Values) {
        if is_substantive(&values.content, "uniqueValue") {
            score += UNIQUE_VALUE_BONUS;
        }
    }

    score.min(MAX_SCORE)
}

pub fn relevance(sections: &[StrategySectionRow], brand: &BrandRow) -> u32 {
    let mut score = RELEVANCE_BASE;

    if let Some(audience) = find_section(sections, SectionType::Audience) {
        if is_substantive(&audience.content, "primaryAudience") {
            score += PRIMARY_AUDIENCE_BONUS;
        }
        let pain_points = list_len(&audience.content, "painPoints") as u32;
        score += pain_points.saturating_mul(PAIN_POINT_BONUS).min(PAIN_POINTS_CAP);
    }

    if brand.industry().is_some() {
        score += INDUSTRY_BONUS;
    }

    score.min(MAX_SCORE)
}

pub fn compute_sub_scores(records: &BrandRecords) -> SubScores {
    SubScores {
        completeness: completeness(
            &records.sections,
            &records.assets,
            records.voice.as_ref(),
            records.guidelines.as_ref(),
        ),
        consistency: consistency(
            &records.compliance_checks,
            &records.assets,
            records.voice.as_ref(),
        ),
        uniqueness: uniqueness(&records.sections),
        relevance: relevance(&records.sections, &records.brand),
    }
}

/// Weighted overall score, rounded half up, in 0 – 100.
pub fn overall_score(scores: &SubScores, weights: &ScoringWeights) -> u32 {
    let total = weights.total();
    if total == 0 {
        return 0;
    }
    let weighted = weights.completeness * scores.completeness.min(MAX_SCORE)
        + weights.consistency * scores.consistency.min(MAX_SCORE)
        + weights.uniqueness * scores.uniqueness.min(MAX_SCORE)
        + weights.relevance * scores.relevance.min(MAX_SCORE);
    ((weighted + total / 2) / total).min(MAX_SCORE)
}

fn clamp_score(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, MAX_SCORE as f64) as u32
}

/// True when `content[field]` is a string longer than the substantive threshold.
fn is_substantive(content: &Value, field: &str) -> bool {
    content
        .get(field)
        .and_then(Value::as_str)
        .map(|s| s.chars().count() > SUBSTANTIVE_TEXT_CHARS)
        .unwrap_or(false)
}

fn list_len(content: &Value, field: &str) -> usize {
    content
        .get(field)
        .and_then(Value::as_array)
        .map(Vec::len)
        .unwrap_or(0)
}
