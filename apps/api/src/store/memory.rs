//! In-memory brand store for service and router tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::brand_health::models::{BrandHealth, BrandRecords};
use crate::models::brand::{
    BrandGuidelinesRow, BrandHealthSnapshotRow, BrandRow, BrandUpdate, BrandVoiceRow,
    ComplianceCheckRow, SectionType, StrategySectionRow, VisualAssetRow,
};
use crate::store::{normalize_industry, BrandStore};

#[derive(Default)]
pub struct InMemoryBrandStore {
    brands: Mutex<HashMap<Uuid, BrandRow>>,
    sections: Mutex<Vec<StrategySectionRow>>,
    assets: Mutex<Vec<VisualAssetRow>>,
    voices: Mutex<Vec<BrandVoiceRow>>,
    guidelines: Mutex<Vec<BrandGuidelinesRow>>,
    checks: Mutex<Vec<ComplianceCheckRow>>,
    snapshots: Mutex<HashMap<Uuid, BrandHealthSnapshotRow>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    snapshot_writes: AtomicUsize,
}

impl InMemoryBrandStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with every record of a brand.
    pub fn insert_records(&self, records: BrandRecords) {
        let brand_id = records.brand.id;
        let reassign = |id: &mut Uuid| *id = brand_id;

        self.brands
            .lock()
            .unwrap()
            .insert(brand_id, records.brand);
        let mut sections = self.sections.lock().unwrap();
        for mut s in records.sections {
            reassign(&mut s.brand_id);
            sections.push(s);
        }
        let mut assets = self.assets.lock().unwrap();
        for mut a in records.assets {
            reassign(&mut a.brand_id);
            assets.push(a);
        }
        if let Some(mut v) = records.voice {
            reassign(&mut v.brand_id);
            self.voices.lock().unwrap().push(v);
        }
        if let Some(mut g) = records.guidelines {
            reassign(&mut g.brand_id);
            self.guidelines.lock().unwrap().push(g);
        }
        let mut checks = self.checks.lock().unwrap();
        for mut c in records.compliance_checks {
            reassign(&mut c.brand_id);
            checks.push(c);
        }
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn snapshot_writes(&self) -> usize {
        self.snapshot_writes.load(Ordering::SeqCst)
    }

    fn check_reads(&self) -> Result<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            bail!("store unavailable");
        }
        Ok(())
    }

    fn check_writes(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            bail!("store is read-only");
        }
        Ok(())
    }
}

#[async_trait]
impl BrandStore for InMemoryBrandStore {
    async fn fetch_brand(&self, brand_id: Uuid) -> Result<Option<BrandRow>> {
        self.check_reads()?;
        Ok(self.brands.lock().unwrap().get(&brand_id).cloned())
    }

    async fn fetch_strategy_sections(&self, brand_id: Uuid) -> Result<Vec<StrategySectionRow>> {
        self.check_reads()?;
        Ok(self
            .sections
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.brand_id == brand_id)
            .cloned()
            .collect())
    }

    async fn fetch_visual_assets(&self, brand_id: Uuid) -> Result<Vec<VisualAssetRow>> {
        self.check_reads()?;
        Ok(self
            .assets
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.brand_id == brand_id)
            .cloned()
            .collect())
    }

    async fn fetch_voice(&self, brand_id: Uuid) -> Result<Option<BrandVoiceRow>> {
        self.check_reads()?;
        Ok(self
            .voices
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.brand_id == brand_id)
            .cloned())
    }

    async fn fetch_guidelines(&self, brand_id: Uuid) -> Result<Option<BrandGuidelinesRow>> {
        self.check_reads()?;
        Ok(self
            .guidelines
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.brand_id == brand_id)
            .cloned())
    }

    async fn fetch_recent_compliance_checks(
        &self,
        brand_id: Uuid,
        limit: i64,
    ) -> Result<Vec<ComplianceCheckRow>> {
        self.check_reads()?;
        let mut checks: Vec<ComplianceCheckRow> = self
            .checks
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.brand_id == brand_id)
            .cloned()
            .collect();
        checks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        checks.truncate(limit.max(0) as usize);
        Ok(checks)
    }

    async fn upsert_health_snapshot(
        &self,
        brand_id: Uuid,
        health: &BrandHealth,
    ) -> Result<BrandHealthSnapshotRow> {
        self.check_writes()?;
        let row = BrandHealthSnapshotRow {
            id: Uuid::new_v4(),
            brand_id,
            overall_score: health.overall_score as i32,
            completeness_score: health.completeness_score as i32,
            consistency_score: health.consistency_score as i32,
            uniqueness_score: health.uniqueness_score as i32,
            relevance_score: health.relevance_score as i32,
            details: serde_json::to_value(&health.details)?,
            calculated_at: Utc::now(),
        };
        self.snapshots
            .lock()
            .unwrap()
            .insert(brand_id, row.clone());
        self.snapshot_writes.fetch_add(1, Ordering::SeqCst);
        Ok(row)
    }

    async fn latest_health_snapshot(
        &self,
        brand_id: Uuid,
    ) -> Result<Option<BrandHealthSnapshotRow>> {
        self.check_reads()?;
        Ok(self.snapshots.lock().unwrap().get(&brand_id).cloned())
    }

    async fn update_brand(
        &self,
        brand_id: Uuid,
        update: &BrandUpdate,
    ) -> Result<Option<BrandRow>> {
        self.check_writes()?;
        let mut brands = self.brands.lock().unwrap();
        let Some(brand) = brands.get_mut(&brand_id) else {
            return Ok(None);
        };
        if let Some(name) = &update.name {
            brand.name = name.trim().to_string();
        }
        if let Some(industry) = &update.industry {
            brand.industry = normalize_industry(industry);
        }
        brand.updated_at = Utc::now();
        Ok(Some(brand.clone()))
    }

    async fn upsert_strategy_section(
        &self,
        brand_id: Uuid,
        section_type: SectionType,
        content: &Value,
        completed: bool,
    ) -> Result<StrategySectionRow> {
        self.check_writes()?;
        if !self.brands.lock().unwrap().contains_key(&brand_id) {
            return Err(anyhow!("brand {brand_id} does not exist"));
        }
        let mut sections = self.sections.lock().unwrap();
        let now = Utc::now();
        if let Some(existing) = sections
            .iter_mut()
            .find(|s| s.brand_id == brand_id && s.section_type == section_type.as_str())
        {
            existing.content = content.clone();
            existing.completed = completed;
            existing.updated_at = now;
            return Ok(existing.clone());
        }
        let row = StrategySectionRow {
            id: Uuid::new_v4(),
            brand_id,
            section_type: section_type.as_str().to_string(),
            content: content.clone(),
            completed,
            created_at: now,
            updated_at: now,
        };
        sections.push(row.clone());
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand_health::fixtures::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_compliance_window_is_newest_first() {
        let store = InMemoryBrandStore::new();
        let mut records = empty_records(None);
        let brand_id = records.brand.id;
        // index 0 is newest
        records.compliance_checks =
            compliance_checks(brand_id, &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0]);
        store.insert_records(records);

        let recent = store
            .fetch_recent_compliance_checks(brand_id, 5)
            .await
            .unwrap();
        let scores: Vec<f64> = recent.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![10.0, 20.0, 30.0, 40.0, 50.0]);
    }

    #[tokio::test]
    async fn test_section_upsert_keeps_one_row_per_type() {
        let store = InMemoryBrandStore::new();
        let records = empty_records(None);
        let brand_id = records.brand.id;
        store.insert_records(records);

        store
            .upsert_strategy_section(brand_id, SectionType::Purpose, &json!({"a": 1}), false)
            .await
            .unwrap();
        store
            .upsert_strategy_section(brand_id, SectionType::Purpose, &json!({"a": 2}), true)
            .await
            .unwrap();

        let sections = store.fetch_strategy_sections(brand_id).await.unwrap();
        assert_eq!(sections.len(), 1);
        assert!(sections[0].completed);
        assert_eq!(sections[0].content, json!({"a": 2}));
    }
}
