//! Row structs.
//!
//! Each submodule contains a `FromRow` struct matching the database row and
//! a conversion into the matching `rateboard_core::pricing` type, plus any
//! insert DTOs.

pub mod freelancer;
pub mod pricing;
