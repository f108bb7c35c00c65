//! In-process [`PricingStore`] used by tests and local tooling.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::PricingStore;
use crate::error::CoreError;
use crate::pricing::{FreelancerProfile, PricingRecord};
use crate::types::DbId;

#[derive(Default)]
struct Tables {
    freelancers: HashMap<DbId, FreelancerProfile>,
    /// Keyed by `freelancer_id`, which enforces one record per freelancer.
    pricing: HashMap<DbId, PricingRecord>,
}

/// A [`PricingStore`] backed by two hash maps behind one lock.
#[derive(Default)]
pub struct MemoryPricingStore {
    tables: RwLock<Tables>,
}

impl MemoryPricingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a freelancer profile.
    pub async fn insert_profile(&self, profile: FreelancerProfile) {
        self.tables
            .write()
            .await
            .freelancers
            .insert(profile.freelancer_id, profile);
    }

    /// Remove a freelancer profile and, like the foreign key cascade, its
    /// pricing record.
    pub async fn remove_profile(&self, freelancer_id: DbId) -> bool {
        let mut tables = self.tables.write().await;
        tables.pricing.remove(&freelancer_id);
        tables.freelancers.remove(&freelancer_id).is_some()
    }

    /// Number of stored pricing records.
    pub async fn pricing_count(&self) -> usize {
        self.tables.read().await.pricing.len()
    }
}

#[async_trait]
impl PricingStore for MemoryPricingStore {
    async fn find_profile(
        &self,
        freelancer_id: DbId,
    ) -> Result<Option<FreelancerProfile>, CoreError> {
        Ok(self.tables.read().await.freelancers.get(&freelancer_id).cloned())
    }

    async fn set_hourly_rate(
        &self,
        freelancer_id: DbId,
        hourly_rate: Option<f64>,
    ) -> Result<bool, CoreError> {
        let mut tables = self.tables.write().await;
        match tables.freelancers.get_mut(&freelancer_id) {
            Some(profile) => {
                profile.hourly_rate = hourly_rate;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_pricing(&self, freelancer_id: DbId) -> Result<Option<PricingRecord>, CoreError> {
        Ok(self.tables.read().await.pricing.get(&freelancer_id).cloned())
    }

    async fn upsert_pricing(&self, candidate: &PricingRecord) -> Result<PricingRecord, CoreError> {
        let mut tables = self.tables.write().await;
        if !tables.freelancers.contains_key(&candidate.freelancer_id) {
            return Err(CoreError::Internal(format!(
                "freelancer_pricing.freelancer_id references missing freelancer {}",
                candidate.freelancer_id
            )));
        }

        let stored = tables
            .pricing
            .entry(candidate.freelancer_id)
            .and_modify(|existing| {
                existing.packages = candidate.packages.clone();
                existing.updated_at = candidate.updated_at;
            })
            .or_insert_with(|| candidate.clone());
        Ok(stored.clone())
    }

    async fn delete_pricing(&self, freelancer_id: DbId) -> Result<bool, CoreError> {
        Ok(self
            .tables
            .write()
            .await
            .pricing
            .remove(&freelancer_id)
            .is_some())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
