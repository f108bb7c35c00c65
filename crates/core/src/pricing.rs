//! Pricing packages, pricing records, and the update request DTO.
//!
//! A freelancer offers up to three package tiers. Each package is stored as a
//! whole object: partial packages are never a valid persisted state, so an
//! update always replaces the full [`PackageSet`].

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Message returned by the delete path.
pub const DELETE_ACK_MESSAGE: &str = "Pricing deleted successfully";

/* --------------------------------------------------------------------------
   Packages
   -------------------------------------------------------------------------- */

/// One priced service tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PricingPackage {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    #[validate(length(max = 5000, message = "description must be at most 5000 characters"))]
    pub description: String,
    #[validate(length(max = 50, message = "at most 50 features are allowed"))]
    pub features: Vec<String>,
    #[validate(range(min = 1, message = "delivery_days must be at least 1"))]
    pub delivery_days: i32,
    #[validate(range(min = 0, message = "revisions must not be negative"))]
    pub revisions: i32,
}

/// The three package tiers. A missing tier means "not offered".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageSet {
    pub basic_package: Option<PricingPackage>,
    pub standard_package: Option<PricingPackage>,
    pub premium_package: Option<PricingPackage>,
}

impl PackageSet {
    /// Iterate the offered tiers together with their field names.
    pub fn tiers(&self) -> impl Iterator<Item = (&'static str, &PricingPackage)> {
        [
            ("basic_package", self.basic_package.as_ref()),
            ("standard_package", self.standard_package.as_ref()),
            ("premium_package", self.premium_package.as_ref()),
        ]
        .into_iter()
        .filter_map(|(tier, pkg)| pkg.map(|p| (tier, p)))
    }
}

/* --------------------------------------------------------------------------
   Records
   -------------------------------------------------------------------------- */

/// The freelancer profile fields this service reads.
///
/// Only `hourly_rate` is ever written here; everything else belongs to the
/// profile service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreelancerProfile {
    pub freelancer_id: DbId,
    /// Owning user.
    pub user_id: DbId,
    pub title: String,
    pub bio: String,
    pub hourly_rate: Option<f64>,
    pub skills: Vec<String>,
    pub experience_years: i32,
    pub available_for_hire: bool,
    pub location: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A stored pricing record. At most one exists per freelancer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingRecord {
    pub id: DbId,
    pub freelancer_id: DbId,
    #[serde(flatten)]
    pub packages: PackageSet,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/* --------------------------------------------------------------------------
   Views
   -------------------------------------------------------------------------- */

/// Result of the read path.
///
/// Serializes either as the stored record or, when nothing is stored yet, as
/// `{ freelancer_id, basic_package: null, standard_package: null,
/// premium_package: null }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PricingView {
    Stored(PricingRecord),
    Empty(EmptyPricing),
}

/// Placeholder shape for a freelancer with no pricing record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyPricing {
    pub freelancer_id: DbId,
    #[serde(flatten)]
    pub packages: PackageSet,
}

impl PricingView {
    pub fn empty(freelancer_id: DbId) -> Self {
        PricingView::Empty(EmptyPricing {
            freelancer_id,
            packages: PackageSet::default(),
        })
    }

    pub fn packages(&self) -> &PackageSet {
        match self {
            PricingView::Stored(record) => &record.packages,
            PricingView::Empty(empty) => &empty.packages,
        }
    }
}

/// Profile merged with its packages, returned after an update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsolidatedView {
    #[serde(flatten)]
    pub profile: FreelancerProfile,
    /// `None` when the freelancer has no pricing record.
    pub pricing: Option<PackageSet>,
}

/// Acknowledgement returned by the delete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ack {
    pub message: String,
}

/* --------------------------------------------------------------------------
   Request DTO
   -------------------------------------------------------------------------- */

/// Partial update of a freelancer's pricing.
///
/// `hourly_rate` distinguishes a missing field (`None`, leave unchanged) from
/// an explicit `null` (`Some(None)`, clear the rate). `pricing`, when present,
/// replaces all three tiers; tiers it omits are cleared. Unknown top-level
/// keys are rejected so a misspelled field cannot pass as a no-op.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingUpdate {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub hourly_rate: Option<Option<f64>>,
    #[serde(default)]
    pub pricing: Option<PackageSet>,
}

impl PricingUpdate {
    pub fn is_noop(&self) -> bool {
        self.hourly_rate.is_none() && self.pricing.is_none()
    }
}

/// Map a present field (even `null`) to `Some`; a missing field falls back to
/// `#[serde(default)]`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate an hourly rate: finite and non-negative.
pub fn validate_hourly_rate(rate: f64) -> Result<(), CoreError> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(CoreError::Validation(format!(
            "hourly_rate must be a non-negative number, got {rate}"
        )));
    }
    Ok(())
}

/// Validate one package, prefixing errors with the tier name.
pub fn validate_package(tier: &str, package: &PricingPackage) -> Result<(), CoreError> {
    if !package.price.is_finite() {
        return Err(CoreError::Validation(format!(
            "{tier}: price must be a finite number"
        )));
    }
    package
        .validate()
        .map_err(|errors| CoreError::Validation(format!("{tier}: {errors}")))
}

/// Validate a whole update request before it reaches the reconciler.
pub fn validate_update(update: &PricingUpdate) -> Result<(), CoreError> {
    if let Some(Some(rate)) = update.hourly_rate {
        validate_hourly_rate(rate)?;
    }
    if let Some(packages) = &update.pricing {
        for (tier, package) in packages.tiers() {
            validate_package(tier, package)?;
        }
    }
    Ok(())
}
