//! Per-product-type dispatch applied to the items of an order.

use orderdesk_core::ProductId;
use orderdesk_products::{Product, ProductKind};

use crate::clock::Clock;
use crate::error::ProcessError;
use crate::handling::ProductHandling;
use crate::store::ProductStore;

/// What processing did with a single order item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// One unit was taken out of stock and the product persisted.
    Reserved { product_id: ProductId, remaining: u32 },
    /// Out of stock with a positive lead time; a delay notice was sent.
    DelayNotified { product_id: ProductId, lead_time: i32 },
    /// Seasonal product outside its window or out of stock; handed to the sink.
    SeasonalHandled { product_id: ProductId },
    /// Expirable product; always handed to the sink.
    ExpirableHandled { product_id: ProductId },
    /// Normal product with no stock and no lead time. Nothing happened.
    Skipped { product_id: ProductId },
}

impl ItemOutcome {
    pub fn product_id(&self) -> ProductId {
        match *self {
            ItemOutcome::Reserved { product_id, .. }
            | ItemOutcome::DelayNotified { product_id, .. }
            | ItemOutcome::SeasonalHandled { product_id }
            | ItemOutcome::ExpirableHandled { product_id }
            | ItemOutcome::Skipped { product_id } => product_id,
        }
    }

    pub fn is_reserved(&self) -> bool {
        matches!(self, ItemOutcome::Reserved { .. })
    }
}

/// Order processing engine.
///
/// Each item is classified by its kind and either has one unit reserved
/// (decrement + save) or is forwarded to the handling sink. Items are
/// independent of each other.
#[derive(Debug)]
pub struct OrderProcessor<P, H, C> {
    products: P,
    handling: H,
    clock: C,
}

impl<P, H, C> OrderProcessor<P, H, C>
where
    P: ProductStore,
    H: ProductHandling,
    C: Clock,
{
    pub fn new(products: P, handling: H, clock: C) -> Self {
        Self {
            products,
            handling,
            clock,
        }
    }

    pub fn products(&self) -> &P {
        &self.products
    }

    /// Process every item, stopping at the first failure.
    ///
    /// Items written before a failure stay written.
    pub fn process_order_items(
        &self,
        items: impl IntoIterator<Item = Product>,
    ) -> Result<Vec<ItemOutcome>, ProcessError> {
        let today = self.clock.today();
        let mut outcomes = Vec::new();

        for product in items {
            let outcome = self.process_item(product, today)?;
            tracing::debug!(product_id = %outcome.product_id(), ?outcome, "order item processed");
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    fn process_item(
        &self,
        product: Product,
        today: chrono::NaiveDate,
    ) -> Result<ItemOutcome, ProcessError> {
        let product_id = product.id_typed();

        match *product.kind() {
            ProductKind::Normal => {
                if product.available() > 0 {
                    self.reserve(product)
                } else if product.lead_time() > 0 {
                    let lead_time = product.lead_time();
                    self.handling.notify_delay(lead_time, &product);
                    Ok(ItemOutcome::DelayNotified {
                        product_id,
                        lead_time,
                    })
                } else {
                    Ok(ItemOutcome::Skipped { product_id })
                }
            }
            ProductKind::Seasonal { .. } => {
                if product.in_season(today) && product.available() > 0 {
                    self.reserve(product)
                } else {
                    self.handling.handle_seasonal_product(&product);
                    Ok(ItemOutcome::SeasonalHandled { product_id })
                }
            }
            ProductKind::Expirable { .. } => {
                self.handling.handle_expired_product(&product);
                Ok(ItemOutcome::ExpirableHandled { product_id })
            }
        }
    }

    fn reserve(&self, mut product: Product) -> Result<ItemOutcome, ProcessError> {
        let remaining = product.take_one()?;
        self.products.save(&product)?;
        Ok(ItemOutcome::Reserved {
            product_id: product.id_typed(),
            remaining,
        })
    }
}
