//! Infrastructure layer: product/order stores and notification delivery.

pub mod notify;
pub mod store;

pub use notify::TracingNotifier;
pub use store::{InMemoryEntityStore, InMemoryOrderStore, InMemoryProductStore};
#[cfg(feature = "postgres")]
pub use store::{PostgresOrderStore, PostgresProductStore};
