use serde::{Deserialize, Serialize};

use crate::models::brand::{
    AssetType, BrandGuidelinesRow, BrandRow, BrandVoiceRow, ComplianceCheckRow, SectionType,
    StrategySectionRow, VisualAssetRow,
};

/// Weakness reported when the score could not be computed at all.
pub const UNAVAILABLE_MESSAGE: &str = "Unable to calculate brand health";

/// Everything the calculator reads for one brand, fetched in a single fan-out.
#[derive(Debug, Clone)]
pub struct BrandRecords {
    pub brand: BrandRow,
    pub sections: Vec<StrategySectionRow>,
    pub assets: Vec<VisualAssetRow>,
    pub voice: Option<BrandVoiceRow>,
    pub guidelines: Option<BrandGuidelinesRow>,
    /// Newest first, already limited to the compliance window.
    pub compliance_checks: Vec<ComplianceCheckRow>,
}

impl BrandRecords {
    pub fn section(&self, section_type: SectionType) -> Option<&StrategySectionRow> {
        find_section(&self.sections, section_type)
    }

    pub fn has_asset(&self, asset_type: AssetType) -> bool {
        has_asset(&self.assets, asset_type)
    }
}

/// Looks up "the" section of a type. Sections are unique per brand and type;
/// if the store ever returns duplicates the first one wins.
pub fn find_section(
    sections: &[StrategySectionRow],
    section_type: SectionType,
) -> Option<&StrategySectionRow> {
    sections
        .iter()
        .find(|s| s.section_type == section_type.as_str())
}

pub fn has_asset(assets: &[VisualAssetRow], asset_type: AssetType) -> bool {
    assets.iter().any(|a| a.asset_type == asset_type.as_str())
}

/// The four 0 – 100 dimensions behind the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub completeness: u32,
    pub consistency: u32,
    pub uniqueness: u32,
    pub relevance: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDetails {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
}

/// Composite brand health. Computed on demand; optionally persisted as a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandHealth {
    pub overall_score: u32,
    pub completeness_score: u32,
    pub consistency_score: u32,
    pub uniqueness_score: u32,
    pub relevance_score: u32,
    pub details: HealthDetails,
}

impl BrandHealth {
    pub fn new(overall_score: u32, scores: SubScores, details: HealthDetails) -> Self {
        Self {
            overall_score,
            completeness_score: scores.completeness,
            consistency_score: scores.consistency,
            uniqueness_score: scores.uniqueness,
            relevance_score: scores.relevance,
            details,
        }
    }

    /// All-zero result returned whenever the score cannot be computed.
    pub fn unavailable() -> Self {
        Self {
            overall_score: 0,
            completeness_score: 0,
            consistency_score: 0,
            uniqueness_score: 0,
            relevance_score: 0,
            details: HealthDetails {
                strengths: Vec::new(),
                weaknesses: vec![UNAVAILABLE_MESSAGE.to_string()],
                opportunities: Vec::new(),
            },
        }
    }
}
