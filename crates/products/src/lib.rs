//! Products domain module.
//!
//! This crate contains the product model used by order processing,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;
pub mod record;

pub use product::{Product, ProductKind, ProductType};
pub use record::ProductRecord;
