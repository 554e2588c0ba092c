//! Notification delivery.
//!
//! There is no outbound channel (email, SMS, push) yet; notifications are
//! emitted as structured `info` events under the `orderdesk::notify` target
//! so log pipelines can route them.

use chrono::NaiveDate;

use orderdesk_fulfillment::Notifier;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn send_delay_notification(&self, lead_time: i32, product_name: &str) {
        tracing::info!(
            target: "orderdesk::notify",
            kind = "delay",
            lead_time,
            product_name,
            "product delayed"
        );
    }

    fn send_out_of_stock_notification(&self, product_name: &str) {
        tracing::info!(
            target: "orderdesk::notify",
            kind = "out_of_stock",
            product_name,
            "product out of stock"
        );
    }

    fn send_expiration_notification(&self, product_name: &str, expiry_date: NaiveDate) {
        tracing::info!(
            target: "orderdesk::notify",
            kind = "expiration",
            product_name,
            expiry_date = %expiry_date,
            "product expired"
        );
    }
}
