use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BrandRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub industry: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BrandRow {
    /// Industry classification, if set to a non-empty string. Whitespace is
    /// kept as stored; the update path trims before writing.
    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref().filter(|s| !s.is_empty())
    }
}

/// One row per (brand_id, section_type). `content` is a free-form object
/// whose shape depends on the section type.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StrategySectionRow {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub section_type: String,
    pub content: Value,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VisualAssetRow {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub asset_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BrandVoiceRow {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BrandGuidelinesRow {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ComplianceCheckRow {
    pub id: Uuid,
    pub brand_id: Uuid,
    /// 0 – 100
    pub score: f64,
    pub created_at: DateTime<Utc>,
}

/// Persisted brand health snapshot. Superseded, never edited.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BrandHealthSnapshotRow {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub overall_score: i32,
    pub completeness_score: i32,
    pub consistency_score: i32,
    pub uniqueness_score: i32,
    pub relevance_score: i32,
    pub details: Value,
    pub calculated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Purpose,
    Values,
    Audience,
    Competitive,
    Archetype,
}

impl SectionType {
    pub const ALL: [SectionType; 5] = [
        SectionType::Purpose,
        SectionType::Values,
        SectionType::Audience,
        SectionType::Competitive,
        SectionType::Archetype,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Purpose => "purpose",
            SectionType::Values => "values",
            SectionType::Audience => "audience",
            SectionType::Competitive => "competitive",
            SectionType::Archetype => "archetype",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Human-facing name used in insight text.
    pub fn label(&self) -> &'static str {
        match self {
            SectionType::Purpose => "brand purpose",
            SectionType::Values => "brand values",
            SectionType::Audience => "target audience",
            SectionType::Competitive => "competitive analysis",
            SectionType::Archetype => "brand archetype",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Logo,
    ColorPalette,
    Typography,
}

impl AssetType {
    /// Asset types that count towards scoring. Other asset types may exist.
    pub const SCORED: [AssetType; 3] = [
        AssetType::Logo,
        AssetType::ColorPalette,
        AssetType::Typography,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Logo => "logo",
            AssetType::ColorPalette => "color_palette",
            AssetType::Typography => "typography",
        }
    }
}

/// Partial update for a brand. `industry: Some("")` clears the industry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandUpdate {
    pub name: Option<String>,
    pub industry: Option<String>,
}
