//! Domain logic for freelancer pricing.
//!
//! - [`gate`] -- ownership check guarding every pricing mutation.
//! - [`reconciler`] -- upsert-merge of hourly rate and packages, delete, read.
//! - [`pricing`] -- package/record types, request DTOs, boundary validation.
//! - [`store`] -- the [`store::PricingStore`] trait and an in-memory store.

pub mod error;
pub mod gate;
pub mod pricing;
pub mod reconciler;
pub mod store;
pub mod types;
