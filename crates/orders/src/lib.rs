//! Orders domain module.
//!
//! An order is an identifier plus the set of products it contains. Creating
//! and persisting orders happens outside this workspace; order processing
//! only reads them.

pub mod order;

pub use order::Order;
