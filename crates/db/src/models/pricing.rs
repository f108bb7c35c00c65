//! Freelancer pricing rows. Package tiers are stored as JSONB.

use rateboard_core::pricing::{PackageSet, PricingPackage, PricingRecord};
use rateboard_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `freelancer_pricing` table.
#[derive(Debug, Clone, FromRow)]
pub struct PricingRow {
    pub id: DbId,
    pub freelancer_id: DbId,
    pub basic_package: Option<Json<PricingPackage>>,
    pub standard_package: Option<Json<PricingPackage>>,
    pub premium_package: Option<Json<PricingPackage>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<PricingRow> for PricingRecord {
    fn from(row: PricingRow) -> Self {
        PricingRecord {
            id: row.id,
            freelancer_id: row.freelancer_id,
            packages: PackageSet {
                basic_package: row.basic_package.map(|Json(p)| p),
                standard_package: row.standard_package.map(|Json(p)| p),
                premium_package: row.premium_package.map(|Json(p)| p),
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
