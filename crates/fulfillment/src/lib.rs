//! Order fulfillment: the per-product-type rules applied when an order is processed.
//!
//! - `processor`: the dispatch engine (`OrderProcessor`)
//! - `product_service`: the production handling sink (`ProductService`)
//! - `order_service`: the "process order by id" use case (`OrderService`)
//! - `store` / `handling` / `clock`: the seams to storage, notifications and time

pub mod clock;
pub mod error;
pub mod handling;
pub mod order_service;
pub mod processor;
pub mod product_service;
pub mod store;

#[cfg(test)]
mod test_support;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ProcessError, StoreError};
pub use handling::{Notifier, ProductHandling};
pub use order_service::{OrderService, ProcessOrderOutcome};
pub use processor::{ItemOutcome, OrderProcessor};
pub use product_service::ProductService;
pub use store::{OrderStore, ProductStore};
