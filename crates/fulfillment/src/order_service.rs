//! "Process order by id": resolve the order, load its products, run the processor.

use orderdesk_core::OrderId;

use crate::clock::Clock;
use crate::error::ProcessError;
use crate::handling::ProductHandling;
use crate::processor::{ItemOutcome, OrderProcessor};
use crate::store::{OrderStore, ProductStore};

/// Result of processing one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOrderOutcome {
    pub order_id: OrderId,
    pub items: Vec<ItemOutcome>,
}

impl ProcessOrderOutcome {
    pub fn reserved_count(&self) -> usize {
        self.items.iter().filter(|o| o.is_reserved()).count()
    }
}

#[derive(Debug)]
pub struct OrderService<O, P, H, C> {
    orders: O,
    processor: OrderProcessor<P, H, C>,
}

impl<O, P, H, C> OrderService<O, P, H, C>
where
    O: OrderStore,
    P: ProductStore,
    H: ProductHandling,
    C: Clock,
{
    pub fn new(orders: O, processor: OrderProcessor<P, H, C>) -> Self {
        Self { orders, processor }
    }

    /// Process the order with the given id.
    ///
    /// Every product is loaded before any item is processed, so a missing or
    /// unreadable product fails the call with nothing written. Failures while
    /// processing items do not roll back earlier items.
    pub fn process_order(&self, order_id: OrderId) -> Result<ProcessOrderOutcome, ProcessError> {
        let order = self
            .orders
            .find_by_id(order_id)?
            .ok_or(ProcessError::OrderNotFound(order_id))?;

        let products = order
            .items()
            .map(|product_id| -> Result<_, ProcessError> {
                self.processor
                    .products()
                    .find_by_id(product_id)?
                    .ok_or(ProcessError::ProductNotFound(product_id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let items = self.processor.process_order_items(products)?;

        let outcome = ProcessOrderOutcome { order_id, items };
        tracing::info!(
            order_id = %order_id,
            items = outcome.items.len(),
            reserved = outcome.reserved_count(),
            "order processed"
        );
        Ok(outcome)
    }
}
