//! Repository for the `freelancers` table.
//!
//! Pricing only ever writes `hourly_rate`; [`FreelancerRepo::create`] exists
//! for seeding.

use rateboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::freelancer::{CreateFreelancer, FreelancerRow};

/// Column list for `freelancers` queries.
const COLUMNS: &str = "\
    freelancer_id, user_id, title, bio, hourly_rate, skills, \
    experience_years, available_for_hire, location, created_at, updated_at";

/// Provides data access for freelancer profiles.
pub struct FreelancerRepo;

impl FreelancerRepo {
    /// Find a freelancer by id.
    pub async fn find_by_id(
        pool: &PgPool,
        freelancer_id: DbId,
    ) -> Result<Option<FreelancerRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM freelancers WHERE freelancer_id = $1");
        sqlx::query_as::<_, FreelancerRow>(&query)
            .bind(freelancer_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the hourly rate (`None` clears it).
    ///
    /// Returns `true` if a row was updated.
    pub async fn update_hourly_rate(
        pool: &PgPool,
        freelancer_id: DbId,
        hourly_rate: Option<f64>,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE freelancers SET hourly_rate = $2 WHERE freelancer_id = $1")
                .bind(freelancer_id)
                .bind(hourly_rate)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert a freelancer profile, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFreelancer,
    ) -> Result<FreelancerRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO freelancers \
                 (user_id, title, bio, hourly_rate, skills, experience_years, location) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FreelancerRow>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.bio)
            .bind(input.hourly_rate)
            .bind(&input.skills)
            .bind(input.experience_years)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }
}
