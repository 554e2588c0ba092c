//! Demo catalogue for in-memory runs (`SEED_DEMO_DATA=true`).
//!
//! One single-item order per product scenario, numbered 1..=9, with product
//! ids 101..=109. Dates are relative to `today`.

use chrono::{Duration, NaiveDate};

use orderdesk_core::{OrderId, ProductId};
use orderdesk_fulfillment::{ProductStore, StoreError};
use orderdesk_infra::{InMemoryOrderStore, InMemoryProductStore};
use orderdesk_orders::Order;
use orderdesk_products::Product;

pub fn demo_products(today: NaiveDate) -> Vec<Product> {
    let days = |n: i64| today + Duration::days(n);

    vec![
        Product::normal(ProductId::new(101), "Normal Product").with_available(2),
        Product::normal(ProductId::new(102), "Normal Product Out Of Stock").with_lead_time(5),
        Product::seasonal(ProductId::new(103), "Seasonal Product In Season", days(-1), days(1))
            .with_available(1),
        Product::seasonal(
            ProductId::new(104),
            "Seasonal Product Out Of Season - Lead Exceeds",
            days(-10),
            days(-5),
        )
        .with_available(1)
        .with_lead_time(10),
        Product::seasonal(ProductId::new(105), "Seasonal Product Before Season", days(5), days(10))
            .with_available(1)
            .with_lead_time(2),
        Product::seasonal(
            ProductId::new(106),
            "Seasonal Product Out Of Season - Delay",
            days(2),
            days(7),
        )
        .with_available(1)
        .with_lead_time(1),
        Product::expirable(ProductId::new(107), "Expirable Product Not Expired", days(5))
            .with_available(1),
        Product::expirable(ProductId::new(108), "Expirable Product Expired", days(-1))
            .with_available(1),
        Product::expirable(ProductId::new(109), "Expirable Product Not Available", days(2)),
    ]
}

pub fn seed_demo_data(
    products: &InMemoryProductStore,
    orders: &InMemoryOrderStore,
    today: NaiveDate,
) -> Result<(), StoreError> {
    for (n, product) in (1..).zip(demo_products(today)) {
        products.save(&product)?;
        orders.insert(Order::new(OrderId::new(n), [product.id_typed()]))?;
    }
    Ok(())
}
