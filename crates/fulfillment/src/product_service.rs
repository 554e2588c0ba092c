//! Handling for products the processor does not reserve directly.
//!
//! This is the production [`ProductHandling`] sink. It decides between
//! delay, out-of-stock and expiration notices, and persists the resulting
//! availability/lead-time changes. Failures are logged and swallowed because
//! callers treat the sink as fire-and-forget.

use chrono::Duration;

use orderdesk_products::{Product, ProductKind};

use crate::clock::Clock;
use crate::handling::{Notifier, ProductHandling};
use crate::store::ProductStore;

#[derive(Debug)]
pub struct ProductService<S, N, C> {
    products: S,
    notifier: N,
    clock: C,
}

impl<S, N, C> ProductService<S, N, C>
where
    S: ProductStore,
    N: Notifier,
    C: Clock,
{
    pub fn new(products: S, notifier: N, clock: C) -> Self {
        Self {
            products,
            notifier,
            clock,
        }
    }

    fn persist(&self, product: &Product) {
        if let Err(e) = self.products.save(product) {
            tracing::warn!(
                product_id = %product.id_typed(),
                error = %e,
                "failed to persist handled product"
            );
        }
    }
}

impl<S, N, C> ProductHandling for ProductService<S, N, C>
where
    S: ProductStore,
    N: Notifier,
    C: Clock,
{
    fn notify_delay(&self, lead_time: i32, product: &Product) {
        let mut product = product.clone();
        product.set_lead_time(lead_time);
        self.persist(&product);
        self.notifier.send_delay_notification(lead_time, product.name());
    }

    fn handle_seasonal_product(&self, product: &Product) {
        let ProductKind::Seasonal {
            season_start,
            season_end,
        } = *product.kind()
        else {
            tracing::warn!(
                product_id = %product.id_typed(),
                product_type = %product.product_type(),
                "seasonal handling requested for a non-seasonal product"
            );
            return;
        };

        let today = self.clock.today();
        let restock_date =
            today.checked_add_signed(Duration::days(i64::from(product.lead_time())));

        // An unrepresentable restock date counts as past the season end.
        if restock_date.is_none_or(|date| date > season_end) {
            self.notifier.send_out_of_stock_notification(product.name());
            let mut product = product.clone();
            product.set_available(0);
            self.persist(&product);
        } else if season_start > today {
            self.notifier.send_out_of_stock_notification(product.name());
            self.persist(product);
        } else {
            self.notify_delay(product.lead_time(), product);
        }
    }

    fn handle_expired_product(&self, product: &Product) {
        let ProductKind::Expirable { expiry_date } = *product.kind() else {
            tracing::warn!(
                product_id = %product.id_typed(),
                product_type = %product.product_type(),
                "expiry handling requested for a non-expirable product"
            );
            return;
        };

        let mut product = product.clone();
        if product.available() > 0 && expiry_date > self.clock.today() {
            product.set_available(product.available() - 1);
        } else {
            self.notifier.send_expiration_notification(product.name(), expiry_date);
            product.set_available(0);
        }
        self.persist(&product);
    }
}
