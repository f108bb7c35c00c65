//! Record store seam for the pricing workflow.
//!
//! The reconciler talks only to [`PricingStore`]; the Postgres implementation
//! lives in `rateboard-db` and [`memory::MemoryPricingStore`] backs tests.

pub mod memory;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::pricing::{FreelancerProfile, PricingRecord};
use crate::types::DbId;

pub use memory::MemoryPricingStore;

/// Keyed access to freelancer profiles and their pricing records.
///
/// Implementations report backing-store failures as [`CoreError::Internal`].
/// Absence is never an error: lookups return `Option` and deletes return
/// whether a row was removed.
#[async_trait]
pub trait PricingStore: Send + Sync {
    /// Fetch a freelancer profile by id.
    async fn find_profile(
        &self,
        freelancer_id: DbId,
    ) -> Result<Option<FreelancerProfile>, CoreError>;

    /// Overwrite `hourly_rate` on a profile. Returns `false` if no profile
    /// matched.
    async fn set_hourly_rate(
        &self,
        freelancer_id: DbId,
        hourly_rate: Option<f64>,
    ) -> Result<bool, CoreError>;

    /// Fetch the pricing record for a freelancer.
    async fn find_pricing(&self, freelancer_id: DbId) -> Result<Option<PricingRecord>, CoreError>;

    /// Insert `candidate`, or, if a record already exists for
    /// `candidate.freelancer_id`, replace its packages and `updated_at` while
    /// keeping the stored `id` and `created_at`. Must be a single atomic
    /// write. Returns the record as stored.
    async fn upsert_pricing(&self, candidate: &PricingRecord) -> Result<PricingRecord, CoreError>;

    /// Delete the pricing record for a freelancer. Returns `true` if one
    /// existed.
    async fn delete_pricing(&self, freelancer_id: DbId) -> Result<bool, CoreError>;

    /// Verify the backing store is reachable.
    async fn health_check(&self) -> Result<(), CoreError>;
}
