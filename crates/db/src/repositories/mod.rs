//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod freelancer_repo;
pub mod pricing_repo;

pub use freelancer_repo::FreelancerRepo;
pub use pricing_repo::PricingRepo;
