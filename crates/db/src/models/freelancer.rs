//! Freelancer profile rows.

use rateboard_core::pricing::FreelancerProfile;
use rateboard_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `freelancers` table.
#[derive(Debug, Clone, FromRow)]
pub struct FreelancerRow {
    pub freelancer_id: DbId,
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

impl From<FreelancerRow> for FreelancerProfile {
    fn from(row: FreelancerRow) -> Self {
        FreelancerProfile {
            freelancer_id: row.freelancer_id,
            user_id: row.user_id,
            title: row.title,
            bio: row.bio,
            hourly_rate: row.hourly_rate,
            skills: row.skills,
            experience_years: row.experience_years,
            available_for_hire: row.available_for_hire,
            location: row.location,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for inserting a freelancer profile (seeding and tests; profiles are
/// normally created by the profile service).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFreelancer {
    pub user_id: DbId,
    pub title: String,
    pub bio: String,
    pub hourly_rate: Option<f64>,
    pub skills: Vec<String>,
    pub experience_years: i32,
    pub location: Option<String>,
}
