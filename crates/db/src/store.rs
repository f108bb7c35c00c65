//! Postgres-backed [`PricingStore`].

use async_trait::async_trait;
use rateboard_core::error::CoreError;
use rateboard_core::pricing::{FreelancerProfile, PricingRecord};
use rateboard_core::store::PricingStore;
use rateboard_core::types::DbId;

use crate::repositories::{FreelancerRepo, PricingRepo};
use crate::DbPool;

/// [`PricingStore`] over the `freelancers` and `freelancer_pricing` tables.
#[derive(Clone)]
pub struct PgPricingStore {
    pool: DbPool,
}

impl PgPricingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Log a database failure and surface it as an internal error carrying the
/// driver message.
fn store_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> CoreError {
    move |err| {
        tracing::error!(error = %err, operation, "Database error");
        CoreError::Internal(err.to_string())
    }
}

#[async_trait]
impl PricingStore for PgPricingStore {
    async fn find_profile(
        &self,
        freelancer_id: DbId,
    ) -> Result<Option<FreelancerProfile>, CoreError> {
        let row = FreelancerRepo::find_by_id(&self.pool, freelancer_id)
            .await
            .map_err(store_error("find_profile"))?;
        Ok(row.map(FreelancerProfile::from))
    }

    async fn set_hourly_rate(
        &self,
        freelancer_id: DbId,
        hourly_rate: Option<f64>,
    ) -> Result<bool, CoreError> {
        FreelancerRepo::update_hourly_rate(&self.pool, freelancer_id, hourly_rate)
            .await
            .map_err(store_error("set_hourly_rate"))
    }

    async fn find_pricing(&self, freelancer_id: DbId) -> Result<Option<PricingRecord>, CoreError> {
        let row = PricingRepo::find_by_freelancer(&self.pool, freelancer_id)
            .await
            .map_err(store_error("find_pricing"))?;
        Ok(row.map(PricingRecord::from))
    }

    async fn upsert_pricing(&self, candidate: &PricingRecord) -> Result<PricingRecord, CoreError> {
        let row = PricingRepo::upsert(&self.pool, candidate)
            .await
            .map_err(store_error("upsert_pricing"))?;
        Ok(row.into())
    }

    async fn delete_pricing(&self, freelancer_id: DbId) -> Result<bool, CoreError> {
        PricingRepo::delete_by_freelancer(&self.pool, freelancer_id)
            .await
            .map_err(store_error("delete_pricing"))
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(store_error("health_check"))
    }
}
