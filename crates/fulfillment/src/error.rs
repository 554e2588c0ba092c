use thiserror::Error;

use orderdesk_core::{DomainError, OrderId, ProductId};

/// Failure reported by a product/order store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing storage failed (connection, query, poisoned lock).
    #[error("store backend error: {0}")]
    Backend(String),

    /// A stored record could not be turned into a domain value
    /// (e.g. an unknown product type).
    #[error("invalid stored record: {0}")]
    InvalidRecord(#[from] DomainError),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Failure while processing an order.
///
/// Processing is fail-fast: the first error aborts the remaining items and
/// nothing already written is rolled back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessError {
    #[error("order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
