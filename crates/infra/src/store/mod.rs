//! Product and order store implementations.

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::{InMemoryEntityStore, InMemoryOrderStore, InMemoryProductStore};
#[cfg(feature = "postgres")]
pub use postgres::{PostgresOrderStore, PostgresProductStore, ensure_schema};
