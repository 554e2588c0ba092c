//! Notification/handling seams.
//!
//! Both traits are fire-and-forget: nothing returned, and the caller carries
//! on whatever the implementation does internally.

use std::sync::Arc;

use chrono::NaiveDate;

use orderdesk_products::Product;

/// Receives the products the processor does not reserve stock for.
pub trait ProductHandling: Send + Sync {
    fn notify_delay(&self, lead_time: i32, product: &Product);
    fn handle_seasonal_product(&self, product: &Product);
    fn handle_expired_product(&self, product: &Product);
}

/// Outbound customer/ops notifications.
pub trait Notifier: Send + Sync {
    fn send_delay_notification(&self, lead_time: i32, product_name: &str);
    fn send_out_of_stock_notification(&self, product_name: &str);
    fn send_expiration_notification(&self, product_name: &str, expiry_date: NaiveDate);
}

impl<H> ProductHandling for Arc<H>
where
    H: ProductHandling + ?Sized,
{
    fn notify_delay(&self, lead_time: i32, product: &Product) {
        (**self).notify_delay(lead_time, product)
    }

    fn handle_seasonal_product(&self, product: &Product) {
        (**self).handle_seasonal_product(product)
    }

    fn handle_expired_product(&self, product: &Product) {
        (**self).handle_expired_product(product)
    }
}

impl<N> Notifier for Arc<N>
where
    N: Notifier + ?Sized,
{
    fn send_delay_notification(&self, lead_time: i32, product_name: &str) {
        (**self).send_delay_notification(lead_time, product_name)
    }

    fn send_out_of_stock_notification(&self, product_name: &str) {
        (**self).send_out_of_stock_notification(product_name)
    }

    fn send_expiration_notification(&self, product_name: &str, expiry_date: NaiveDate) {
        (**self).send_expiration_notification(product_name, expiry_date)
    }
}
