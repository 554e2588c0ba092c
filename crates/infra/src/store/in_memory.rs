use std::collections::HashMap;
use std::sync::RwLock;

use orderdesk_core::{Entity, OrderId, ProductId};
use orderdesk_fulfillment::{OrderStore, ProductStore, StoreError};
use orderdesk_orders::Order;
use orderdesk_products::Product;

/// In-memory store keyed by entity id, for tests/dev.
#[derive(Debug)]
pub struct InMemoryEntityStore<E: Entity> {
    inner: RwLock<HashMap<E::Id, E>>,
}

pub type InMemoryProductStore = InMemoryEntityStore<Product>;
pub type InMemoryOrderStore = InMemoryEntityStore<Order>;

impl<E: Entity> InMemoryEntityStore<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<E: Entity> Default for InMemoryEntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryEntityStore<E>
where
    E: Entity + Clone,
{
    pub fn get(&self, id: &E::Id) -> Result<Option<E>, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::backend("in-memory store lock poisoned"))?;
        Ok(map.get(id).cloned())
    }

    /// Insert or fully replace the entity under its id.
    pub fn insert(&self, entity: E) -> Result<(), StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("in-memory store lock poisoned"))?;
        map.insert(entity.id().clone(), entity);
        Ok(())
    }
}

impl ProductStore for InMemoryEntityStore<Product> {
    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        self.get(&id)
    }

    fn save(&self, product: &Product) -> Result<(), StoreError> {
        self.insert(product.clone())
    }
}

impl OrderStore for InMemoryEntityStore<Order> {
    fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        self.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_product_is_found_by_id() {
        let store = InMemoryProductStore::new();
        let product = Product::normal(ProductId::new(1), "Widget").with_available(3);

        store.save(&product).unwrap();

        assert_eq!(store.find_by_id(ProductId::new(1)).unwrap(), Some(product));
        assert_eq!(store.find_by_id(ProductId::new(2)).unwrap(), None);
    }

    #[test]
    fn save_replaces_the_whole_record() {
        let store = InMemoryProductStore::new();
        store
            .save(&Product::normal(ProductId::new(1), "Widget").with_available(3))
            .unwrap();
        store
            .save(&Product::normal(ProductId::new(1), "Widget v2").with_available(1))
            .unwrap();

        let found = store.find_by_id(ProductId::new(1)).unwrap().unwrap();
        assert_eq!(found.name(), "Widget v2");
        assert_eq!(found.available(), 1);
    }

    #[test]
    fn inserted_order_is_found_by_id() {
        let store = InMemoryOrderStore::new();
        let order = Order::new(OrderId::new(9), [ProductId::new(1), ProductId::new(2)]);

        store.insert(order.clone()).unwrap();

        assert_eq!(store.find_by_id(OrderId::new(9)).unwrap(), Some(order));
        assert_eq!(store.find_by_id(OrderId::new(10)).unwrap(), None);
    }
}
