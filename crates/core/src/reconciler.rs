//! Upsert-merge of a freelancer's hourly rate and pricing packages.
//!
//! The hourly rate lives on the freelancer profile; packages live in a
//! separate pricing record. [`apply_update`] writes whichever parts the
//! request carries and re-reads both into one [`ConsolidatedView`].
//! [`delete_pricing`] clears both. [`get_pricing`] is the ungated read path.

use uuid::Uuid;

use crate::error::CoreError;
use crate::gate::Authorized;
use crate::pricing::{
    Ack, ConsolidatedView, PricingRecord, PricingUpdate, PricingView, DELETE_ACK_MESSAGE,
};
use crate::store::PricingStore;
use crate::types::{DbId, Timestamp};

/// Apply a validated update for an authorized caller.
///
/// 1. `hourly_rate` present (including `null`): overwrite the profile field.
/// 2. `pricing` present: replace all three tiers, creating the record on
///    first write with a fresh id and `created_at = now`.
/// 3. Re-read the profile and record into a [`ConsolidatedView`].
///
/// The two writes are separate store calls; the package upsert itself is a
/// single conditional write. Returns `NotFound` if the profile disappeared
/// before the re-read.
pub async fn apply_update(
    store: &dyn PricingStore,
    auth: &Authorized,
    update: &PricingUpdate,
    now: Timestamp,
) -> Result<ConsolidatedView, CoreError> {
    let freelancer_id = auth.freelancer_id();

    if let Some(hourly_rate) = update.hourly_rate {
        store.set_hourly_rate(freelancer_id, hourly_rate).await?;
    }

    if let Some(packages) = &update.pricing {
        let candidate = PricingRecord {
            id: Uuid::new_v4(),
            freelancer_id,
            packages: packages.clone(),
            created_at: now,
            updated_at: now,
        };
        store.upsert_pricing(&candidate).await?;
    }

    load_consolidated(store, freelancer_id).await
}

/// Remove the pricing record (if any) and clear the hourly rate.
///
/// Idempotent: deleting when nothing is stored still succeeds.
pub async fn delete_pricing(
    store: &dyn PricingStore,
    auth: &Authorized,
) -> Result<Ack, CoreError> {
    let freelancer_id = auth.freelancer_id();

    store.delete_pricing(freelancer_id).await?;
    store.set_hourly_rate(freelancer_id, None).await?;

    Ok(Ack {
        message: DELETE_ACK_MESSAGE.to_string(),
    })
}

/// Read a freelancer's pricing.
///
/// A missing record is not an error: the empty shape with all three tiers
/// `null` is returned instead, also for unknown freelancer ids.
pub async fn get_pricing(
    store: &dyn PricingStore,
    freelancer_id: DbId,
) -> Result<PricingView, CoreError> {
    Ok(match store.find_pricing(freelancer_id).await? {
        Some(record) => PricingView::Stored(record),
        None => PricingView::empty(freelancer_id),
    })
}

/// Join the profile with its pricing record.
pub async fn load_consolidated(
    store: &dyn PricingStore,
    freelancer_id: DbId,
) -> Result<ConsolidatedView, CoreError> {
    let profile = store
        .find_profile(freelancer_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Freelancer",
            id: freelancer_id,
        })?;
    let pricing = store
        .find_pricing(freelancer_id)
        .await?
        .map(|record| record.packages);

    Ok(ConsolidatedView { profile, pricing })
}
