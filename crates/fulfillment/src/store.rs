//! Storage seams used by order processing.

use std::sync::Arc;

use orderdesk_core::{OrderId, ProductId};
use orderdesk_orders::Order;
use orderdesk_products::Product;

use crate::error::StoreError;

/// Point lookup + full-record upsert of products.
pub trait ProductStore: Send + Sync {
    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;
    fn save(&self, product: &Product) -> Result<(), StoreError>;
}

/// Point lookup of orders.
pub trait OrderStore: Send + Sync {
    fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).find_by_id(id)
    }

    fn save(&self, product: &Product) -> Result<(), StoreError> {
        (**self).save(product)
    }
}

impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        (**self).find_by_id(id)
    }
}
