use serde::Serialize;

use orderdesk_core::OrderId;
use orderdesk_orders::Order;
use orderdesk_products::{Product, ProductRecord};

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessOrderResponse {
    pub order_id: OrderId,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn order_to_json(order: &Order) -> serde_json::Value {
    serde_json::json!({
        "id": order.id_typed(),
        "items": order.items().collect::<Vec<_>>(),
    })
}

pub fn product_to_json(product: &Product) -> serde_json::Value {
    serde_json::to_value(ProductRecord::from(product)).unwrap_or(serde_json::Value::Null)
}
