//! Recording fakes for the store/sink/notifier seams.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use chrono::NaiveDate;

use orderdesk_core::{OrderId, ProductId};
use orderdesk_orders::Order;
use orderdesk_products::{Product, ProductRecord};

use crate::error::StoreError;
use crate::handling::{Notifier, ProductHandling};
use crate::store::{OrderStore, ProductStore};

#[derive(Debug, Default)]
pub struct RecordingProductStore {
    products: Mutex<HashMap<ProductId, Product>>,
    saves: Mutex<Vec<Product>>,
    failing: Mutex<HashSet<ProductId>>,
    raw: Mutex<HashMap<ProductId, ProductRecord>>,
}

impl RecordingProductStore {
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let store = Self::default();
        store
            .products
            .lock()
            .unwrap()
            .extend(products.into_iter().map(|p| (p.id_typed(), p)));
        store
    }

    /// Store an unconverted record; lookups run it through `Product::try_from`.
    pub fn insert_raw(&self, record: ProductRecord) {
        self.raw.lock().unwrap().insert(record.id, record);
    }

    pub fn fail_saves_for(&self, id: ProductId) {
        self.failing.lock().unwrap().insert(id);
    }

    pub fn saves(&self) -> Vec<Product> {
        self.saves.lock().unwrap().clone()
    }

    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.products.lock().unwrap().get(&id).cloned()
    }
}

impl ProductStore for RecordingProductStore {
    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        if let Some(record) = self.raw.lock().unwrap().get(&id).cloned() {
            return Ok(Some(Product::try_from(record)?));
        }
        Ok(self.get(id))
    }

    fn save(&self, product: &Product) -> Result<(), StoreError> {
        if self.failing.lock().unwrap().contains(&product.id_typed()) {
            return Err(StoreError::backend(format!("save rejected for {}", product.id_typed())));
        }
        self.saves.lock().unwrap().push(product.clone());
        self.products
            .lock()
            .unwrap()
            .insert(product.id_typed(), product.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingOrderStore {
    orders: Mutex<HashMap<OrderId, Order>>,
}

impl RecordingOrderStore {
    pub fn with_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        let store = Self::default();
        store
            .orders
            .lock()
            .unwrap()
            .extend(orders.into_iter().map(|o| (o.id_typed(), o)));
        store
    }
}

impl OrderStore for RecordingOrderStore {
    fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        Ok(self.orders.lock().unwrap().get(&id).cloned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Delay { lead_time: i32, product_id: ProductId },
    Seasonal(ProductId),
    Expired(ProductId),
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<SinkCall>>,
}

impl RecordingSink {
    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProductHandling for RecordingSink {
    fn notify_delay(&self, lead_time: i32, product: &Product) {
        self.calls.lock().unwrap().push(SinkCall::Delay {
            lead_time,
            product_id: product.id_typed(),
        });
    }

    fn handle_seasonal_product(&self, product: &Product) {
        self.calls
            .lock()
            .unwrap()
            .push(SinkCall::Seasonal(product.id_typed()));
    }

    fn handle_expired_product(&self, product: &Product) {
        self.calls
            .lock()
            .unwrap()
            .push(SinkCall::Expired(product.id_typed()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Delay { lead_time: i32, product_name: String },
    OutOfStock { product_name: String },
    Expiration { product_name: String, expiry_date: NaiveDate },
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn send_delay_notification(&self, lead_time: i32, product_name: &str) {
        self.sent.lock().unwrap().push(Notification::Delay {
            lead_time,
            product_name: product_name.to_string(),
        });
    }

    fn send_out_of_stock_notification(&self, product_name: &str) {
        self.sent.lock().unwrap().push(Notification::OutOfStock {
            product_name: product_name.to_string(),
        });
    }

    fn send_expiration_notification(&self, product_name: &str, expiry_date: NaiveDate) {
        self.sent.lock().unwrap().push(Notification::Expiration {
            product_name: product_name.to_string(),
            expiry_date,
        });
    }
}
