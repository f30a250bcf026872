//! Insight generation — threshold rules over the four sub-scores.
//!
//! Rules are independent: every rule that matches contributes, in a fixed
//! order, so identical inputs always produce identical lists.

use crate::brand_health::models::{BrandRecords, HealthDetails, SubScores};
use crate::models::brand::{AssetType, SectionType};

const STRENGTH_THRESHOLD: u32 = 80;
const COMPLETENESS_WEAK_BELOW: u32 = 50;
const DIMENSION_WEAK_BELOW: u32 = 60;

pub fn generate_insights(scores: &SubScores, records: &BrandRecords) -> HealthDetails {
    let mut details = HealthDetails::default();

    if scores.completeness >= STRENGTH_THRESHOLD {
        details
            .strengths
            .push("Brand foundation is comprehensive and well documented".to_string());
    }
    if scores.completeness < COMPLETENESS_WEAK_BELOW {
        details
            .weaknesses
            .push("Brand definition is incomplete".to_string());
        details.opportunities.extend(missing_item_opportunities(records));
    }

    if scores.consistency >= STRENGTH_THRESHOLD {
        details
            .strengths
            .push("Brand assets are applied consistently".to_string());
    }
    if scores.consistency < DIMENSION_WEAK_BELOW {
        details
            .weaknesses
            .push("Brand application is inconsistent across materials".to_string());
        details.opportunities.push(
            "Run compliance checks on your marketing materials to improve consistency"
                .to_string(),
        );
    }

    if scores.uniqueness >= STRENGTH_THRESHOLD {
        details
            .strengths
            .push("Brand positioning is clearly differentiated from competitors".to_string());
    }
    if scores.uniqueness < DIMENSION_WEAK_BELOW {
        details
            .weaknesses
            .push("Brand differentiation is weak".to_string());
        details.opportunities.push(
            "Refine your competitive advantage and unique value proposition".to_string(),
        );
    }

    if scores.relevance >= STRENGTH_THRESHOLD {
        details
            .strengths
            .push("Brand is closely aligned with its target audience".to_string());
    }
    if scores.relevance < DIMENSION_WEAK_BELOW {
        details
            .weaknesses
            .push("Brand relevance to the target audience is limited".to_string());
        details.opportunities.push(
            "Deepen audience research to align messaging with customer pain points".to_string(),
        );
    }

    if records.guidelines.is_none() {
        details
            .opportunities
            .push("Generate brand guidelines to document your identity".to_string());
    }

    details
}

/// One opportunity per missing or unfinished item in the completeness budget.
fn missing_item_opportunities(records: &BrandRecords) -> Vec<String> {
    let mut opportunities = Vec::new();

    for section_type in SectionType::ALL {
        match records.section(section_type) {
            Some(s) if s.completed => {}
            Some(_) => opportunities.push(format!(
                "Finish the {} section of your brand strategy",
                section_type.label()
            )),
            None => opportunities.push(format!(
                "Define your {} in the brand strategy",
                section_type.label()
            )),
        }
    }

    for asset_type in AssetType::SCORED {
        if !records.has_asset(asset_type) {
            opportunities.push(asset_opportunity(asset_type).to_string());
        }
    }

    if records.voice.is_none() {
        opportunities.push("Define your brand voice and tone".to_string());
    }

    opportunities
}

fn asset_opportunity(asset_type: AssetType) -> &'static str {
    match asset_type {
        AssetType::Logo => "Create a logo for your visual identity",
        AssetType::ColorPalette => "Choose a color palette for your brand",
        AssetType::Typography => "Select typography for your brand",
    }
}
