use std::collections::BTreeSet;

use orderdesk_core::{Entity, OrderId, ProductId};

/// Entity: Order.
///
/// Items are a set: a product appears at most once per order, and callers
/// must not rely on iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    items: BTreeSet<ProductId>,
}

impl Order {
    pub fn new(id: OrderId, items: impl IntoIterator<Item = ProductId>) -> Self {
        Self {
            id,
            items: items.into_iter().collect(),
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn items(&self) -> impl ExactSizeIterator<Item = ProductId> + '_ {
        self.items.iter().copied()
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.contains(&product_id)
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_items_are_counted_once() {
        let order = Order::new(
            OrderId::new(1),
            [ProductId::new(10), ProductId::new(10), ProductId::new(11)],
        );
        assert_eq!(order.items().len(), 2);
        assert!(order.contains(ProductId::new(10)));
    }

    #[test]
    fn items_iterate_in_id_order() {
        let order = Order::new(OrderId::new(1), [ProductId::new(7), ProductId::new(5)]);
        assert_eq!(
            order.items().collect::<Vec<_>>(),
            vec![ProductId::new(5), ProductId::new(7)]
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the item set holds each distinct product exactly once.
            #[test]
            fn items_are_deduplicated(ids in proptest::collection::vec(0i64..20, 0..50)) {
                let order = Order::new(OrderId::new(1), ids.iter().copied().map(ProductId::new));
                let distinct: BTreeSet<i64> = ids.into_iter().collect();

                prop_assert_eq!(order.items().len(), distinct.len());
                for id in distinct {
                    prop_assert!(order.contains(ProductId::new(id)));
                }
            }
        }
    }
}
