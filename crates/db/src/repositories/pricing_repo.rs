//! Repository for the `freelancer_pricing` table.

use rateboard_core::pricing::PricingRecord;
use rateboard_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::pricing::PricingRow;

/// Column list for `freelancer_pricing` queries.
const COLUMNS: &str = "\
    id, freelancer_id, basic_package, standard_package, premium_package, \
    created_at, updated_at";

/// Provides data access for freelancer pricing records.
pub struct PricingRepo;

impl PricingRepo {
    /// Get the pricing record for a freelancer.
    ///
    /// Returns `None` if the freelancer has never saved pricing.
    pub async fn find_by_freelancer(
        pool: &PgPool,
        freelancer_id: DbId,
    ) -> Result<Option<PricingRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM freelancer_pricing WHERE freelancer_id = $1");
        sqlx::query_as::<_, PricingRow>(&query)
            .bind(freelancer_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a pricing record or replace the packages of the existing one.
    ///
    /// Uses `ON CONFLICT (freelancer_id) DO UPDATE` so the existence check
    /// and the write are one statement. On conflict all three tiers and
    /// `updated_at` are overwritten; `id` and `created_at` keep their stored
    /// values.
    pub async fn upsert(pool: &PgPool, record: &PricingRecord) -> Result<PricingRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO freelancer_pricing \
                 (id, freelancer_id, basic_package, standard_package, premium_package, \
                  created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (freelancer_id) DO UPDATE SET \
                 basic_package = EXCLUDED.basic_package, \
                 standard_package = EXCLUDED.standard_package, \
                 premium_package = EXCLUDED.premium_package, \
                 updated_at = EXCLUDED.updated_at \
             RETURNING {COLUMNS}"
        );
        let packages = &record.packages;
        sqlx::query_as::<_, PricingRow>(&query)
            .bind(record.id)
            .bind(record.freelancer_id)
            .bind(packages.basic_package.as_ref().map(Json))
            .bind(packages.standard_package.as_ref().map(Json))
            .bind(packages.premium_package.as_ref().map(Json))
            .bind(record.created_at)
            .bind(record.updated_at)
            .fetch_one(pool)
            .await
    }

    /// Delete the pricing record for a freelancer.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete_by_freelancer(
        pool: &PgPool,
        freelancer_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM freelancer_pricing WHERE freelancer_id = $1")
            .bind(freelancer_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
