use std::sync::Arc;

use orderdesk_core::{OrderId, ProductId};
use orderdesk_fulfillment::{
    Clock, OrderProcessor, OrderService, OrderStore, ProcessError, ProcessOrderOutcome,
    ProductHandling, ProductService, ProductStore, StoreError, SystemClock,
};
use orderdesk_infra::{InMemoryOrderStore, InMemoryProductStore, TracingNotifier};
use orderdesk_orders::Order;
use orderdesk_products::Product;

use crate::app::seed;
use crate::config::{AppConfig, Persistence};

type DynOrderService = OrderService<
    Arc<dyn OrderStore>,
    Arc<dyn ProductStore>,
    Arc<dyn ProductHandling>,
    Arc<dyn Clock>,
>;

/// Stores + order processing, shared by all handlers.
pub struct AppServices {
    products: Arc<dyn ProductStore>,
    orders: Arc<dyn OrderStore>,
    order_service: DynOrderService,
}

impl AppServices {
    /// Wire the processor and its handling sink over the given stores.
    pub fn new(
        products: Arc<dyn ProductStore>,
        orders: Arc<dyn OrderStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let handling: Arc<dyn ProductHandling> = Arc::new(ProductService::new(
            products.clone(),
            TracingNotifier,
            clock.clone(),
        ));
        let processor = OrderProcessor::new(products.clone(), handling, clock);
        let order_service = OrderService::new(orders.clone(), processor);

        Self {
            products,
            orders,
            order_service,
        }
    }

    pub fn process_order(&self, order_id: OrderId) -> Result<ProcessOrderOutcome, ProcessError> {
        self.order_service.process_order(order_id)
    }

    pub fn product(&self, product_id: ProductId) -> Result<Option<Product>, StoreError> {
        self.products.find_by_id(product_id)
    }

    pub fn order(&self, order_id: OrderId) -> Result<Option<Order>, StoreError> {
        self.orders.find_by_id(order_id)
    }
}

/// Build services for the configured persistence backend.
pub async fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    match &config.persistence {
        Persistence::InMemory { seed_demo } => {
            tracing::info!("using in-memory stores");
            let products = Arc::new(InMemoryProductStore::new());
            let orders = Arc::new(InMemoryOrderStore::new());
            let clock = SystemClock;

            if *seed_demo {
                seed::seed_demo_data(products.as_ref(), orders.as_ref(), clock.today())?;
                tracing::info!("demo data loaded");
            }

            Ok(AppServices::new(products, orders, Arc::new(clock)))
        }
        Persistence::Postgres { database_url } => build_persistent_services(database_url).await,
    }
}

#[cfg(feature = "postgres")]
async fn build_persistent_services(database_url: &str) -> anyhow::Result<AppServices> {
    use anyhow::Context;
    use orderdesk_infra::{PostgresOrderStore, PostgresProductStore, store::ensure_schema};

    tracing::info!("using postgres stores");
    let pool = sqlx::PgPool::connect(database_url)
        .await
        .context("failed to connect to Postgres")?;
    ensure_schema(&pool)
        .await
        .context("failed to create schema")?;

    Ok(AppServices::new(
        Arc::new(PostgresProductStore::new(pool.clone())),
        Arc::new(PostgresOrderStore::new(pool)),
        Arc::new(SystemClock),
    ))
}

#[cfg(not(feature = "postgres"))]
async fn build_persistent_services(_database_url: &str) -> anyhow::Result<AppServices> {
    anyhow::bail!("USE_PERSISTENT_STORES=true requires building with the `postgres` feature")
}
