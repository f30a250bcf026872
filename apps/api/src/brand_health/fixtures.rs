//! Record builders shared by the brand health tests.

use chrono::{Duration, TimeZone, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::brand_health::models::BrandRecords;
use crate::models::brand::{
    AssetType, BrandGuidelinesRow, BrandRow, BrandVoiceRow, ComplianceCheckRow, SectionType,
    StrategySectionRow, VisualAssetRow,
};

fn epoch() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub fn brand(industry: Option<&str>) -> BrandRow {
    BrandRow {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        name: "Northwind Couriers".to_string(),
        industry: industry.map(str::to_string),
        created_at: epoch(),
        updated_at: epoch(),
    }
}

pub fn section(section_type: SectionType, content: Value, completed: bool) -> StrategySectionRow {
    StrategySectionRow {
        id: Uuid::new_v4(),
        brand_id: Uuid::nil(),
        section_type: section_type.as_str().to_string(),
        content,
        completed,
        created_at: epoch(),
        updated_at: epoch(),
    }
}

pub fn asset(brand_id: Uuid, asset_type: &str) -> VisualAssetRow {
    VisualAssetRow {
        id: Uuid::new_v4(),
        brand_id,
        asset_type: asset_type.to_string(),
        created_at: epoch(),
    }
}

pub fn voice(brand_id: Uuid) -> BrandVoiceRow {
    BrandVoiceRow {
        id: Uuid::new_v4(),
        brand_id,
        created_at: epoch(),
    }
}

pub fn guidelines(brand_id: Uuid) -> BrandGuidelinesRow {
    BrandGuidelinesRow {
        id: Uuid::new_v4(),
        brand_id,
        created_at: epoch(),
    }
}

/// Checks in the given order, each one minute older than the previous.
pub fn compliance_checks(brand_id: Uuid, scores: &[f64]) -> Vec<ComplianceCheckRow> {
    scores
        .iter()
        .enumerate()
        .map(|(i, score)| ComplianceCheckRow {
            id: Uuid::new_v4(),
            brand_id,
            score: *score,
            created_at: epoch() - Duration::minutes(i as i64),
        })
        .collect()
}

pub fn empty_records(industry: Option<&str>) -> BrandRecords {
    BrandRecords {
        brand: brand(industry),
        sections: Vec::new(),
        assets: Vec::new(),
        voice: None,
        guidelines: None,
        compliance_checks: Vec::new(),
    }
}

/// A brand with every section completed and rich content, the full visual
/// kit, voice and guidelines. No compliance checks.
pub fn full_records() -> BrandRecords {
    let brand = brand(Some("Logistics"));
    let brand_id = brand.id;
    let mut sections: Vec<StrategySectionRow> = SectionType::ALL
        .into_iter()
        .map(|t| section(t, rich_content(t), true))
        .collect();
    for s in sections.iter_mut() {
        s.brand_id = brand_id;
    }

    BrandRecords {
        brand,
        sections,
        assets: AssetType::SCORED
            .into_iter()
            .map(|t| asset(brand_id, t.as_str()))
            .collect(),
        voice: Some(voice(brand_id)),
        guidelines: Some(guidelines(brand_id)),
        compliance_checks: Vec::new(),
    }
}

fn rich_content(section_type: SectionType) -> Value {
    match section_type {
        SectionType::Purpose => json!({ "mission": "Deliver every parcel on time, sustainably" }),
        SectionType::Values => json!({
            "coreValues": ["reliability", "sustainability"],
            "uniqueValue": "Every parcel plants a tree on arrival",
        }),
        SectionType::Audience => json!({
            "primaryAudience": "Small e-commerce shops in rural areas",
            "painPoints": ["cost", "speed", "tracking", "returns"],
        }),
        SectionType::Competitive => json!({
            "competitiveAdvantage": "Only carbon-neutral courier in the region",
            "marketGap": "Nobody serves same-day rural deliveries",
        }),
        SectionType::Archetype => json!({ "primary": "caregiver" }),
    }
}
