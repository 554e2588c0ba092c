//! Postgres-backed product and order stores.
//!
//! The store traits are synchronous, so each call bridges into sqlx with
//! `block_in_place` + `Handle::block_on`. This requires a multi-threaded
//! Tokio runtime.

use std::future::Future;
use std::sync::Arc;

use chrono::NaiveDate;
use sqlx::{PgPool, Row};

use orderdesk_core::{DomainError, OrderId, ProductId};
use orderdesk_fulfillment::{OrderStore, ProductStore, StoreError};
use orderdesk_orders::Order;
use orderdesk_products::{Product, ProductRecord};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id                BIGINT PRIMARY KEY,
    name              TEXT NOT NULL,
    type              TEXT NOT NULL,
    available         INTEGER NOT NULL DEFAULT 0 CHECK (available >= 0),
    lead_time         INTEGER NOT NULL DEFAULT 0,
    season_start_date DATE,
    season_end_date   DATE,
    expiry_date       DATE
);

CREATE TABLE IF NOT EXISTS orders (
    id BIGINT PRIMARY KEY
);

CREATE TABLE IF NOT EXISTS order_items (
    order_id   BIGINT NOT NULL REFERENCES orders (id),
    product_id BIGINT NOT NULL REFERENCES products (id),
    PRIMARY KEY (order_id, product_id)
);
"#;

/// Create the tables used by the stores if they do not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

fn block_on<F: Future>(fut: F) -> Result<F::Output, StoreError> {
    let handle = tokio::runtime::Handle::try_current()
        .map_err(|e| StoreError::backend(format!("no tokio runtime: {e}")))?;
    Ok(tokio::task::block_in_place(|| handle.block_on(fut)))
}

fn backend(e: sqlx::Error) -> StoreError {
    StoreError::backend(e.to_string())
}

/// Postgres-backed store for products (`products` table).
pub struct PostgresProductStore {
    pool: Arc<PgPool>,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

fn record_from_row(row: &sqlx::postgres::PgRow) -> Result<ProductRecord, StoreError> {
    let available: i32 = row.try_get("available").map_err(backend)?;
    let available = u32::try_from(available).map_err(|_| {
        StoreError::InvalidRecord(DomainError::validation(format!(
            "negative availability: {available}"
        )))
    })?;

    Ok(ProductRecord {
        id: ProductId::new(row.try_get::<i64, _>("id").map_err(backend)?),
        name: row.try_get("name").map_err(backend)?,
        product_type: row.try_get("type").map_err(backend)?,
        available,
        lead_time: row.try_get("lead_time").map_err(backend)?,
        season_start_date: row
            .try_get::<Option<NaiveDate>, _>("season_start_date")
            .map_err(backend)?,
        season_end_date: row
            .try_get::<Option<NaiveDate>, _>("season_end_date")
            .map_err(backend)?,
        expiry_date: row
            .try_get::<Option<NaiveDate>, _>("expiry_date")
            .map_err(backend)?,
    })
}

impl ProductStore for PostgresProductStore {
    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let pool = self.pool.clone();

        let row = block_on(async move {
            sqlx::query(
                r#"
                SELECT
                    id,
                    name,
                    type,
                    available,
                    lead_time,
                    season_start_date,
                    season_end_date,
                    expiry_date
                FROM products
                WHERE id = $1
                "#,
            )
            .bind(id.value())
            .fetch_optional(&*pool)
            .await
        })?
        .map_err(backend)?;

        match row {
            Some(row) => {
                let record = record_from_row(&row)?;
                Ok(Some(Product::try_from(record)?))
            }
            None => Ok(None),
        }
    }

    fn save(&self, product: &Product) -> Result<(), StoreError> {
        let pool = self.pool.clone();
        let record = ProductRecord::from(product);
        let available = i32::try_from(record.available).map_err(|_| {
            StoreError::InvalidRecord(DomainError::validation(format!(
                "availability out of range: {}",
                record.available
            )))
        })?;

        block_on(async move {
            sqlx::query(
                r#"
                INSERT INTO products (
                    id,
                    name,
                    type,
                    available,
                    lead_time,
                    season_start_date,
                    season_end_date,
                    expiry_date
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT (id)
                DO UPDATE SET
                    name = EXCLUDED.name,
                    type = EXCLUDED.type,
                    available = EXCLUDED.available,
                    lead_time = EXCLUDED.lead_time,
                    season_start_date = EXCLUDED.season_start_date,
                    season_end_date = EXCLUDED.season_end_date,
                    expiry_date = EXCLUDED.expiry_date
                "#,
            )
            .bind(record.id.value())
            .bind(&record.name)
            .bind(&record.product_type)
            .bind(available)
            .bind(record.lead_time)
            .bind(record.season_start_date)
            .bind(record.season_end_date)
            .bind(record.expiry_date)
            .execute(&*pool)
            .await
        })?
        .map_err(backend)?;

        tracing::debug!(product_id = %product.id_typed(), "product saved");
        Ok(())
    }
}

/// Postgres-backed store for orders (`orders` + `order_items` tables).
pub struct PostgresOrderStore {
    pool: Arc<PgPool>,
}

impl PostgresOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

impl OrderStore for PostgresOrderStore {
    fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let pool = self.pool.clone();

        block_on(async move {
            let exists = sqlx::query("SELECT id FROM orders WHERE id = $1")
                .bind(id.value())
                .fetch_optional(&*pool)
                .await
                .map_err(backend)?;
            if exists.is_none() {
                return Ok(None);
            }

            let rows = sqlx::query("SELECT product_id FROM order_items WHERE order_id = $1")
                .bind(id.value())
                .fetch_all(&*pool)
                .await
                .map_err(backend)?;

            let items = rows
                .iter()
                .map(|r| r.try_get::<i64, _>("product_id").map(ProductId::new))
                .collect::<Result<Vec<_>, _>>()
                .map_err(backend)?;

            Ok::<_, StoreError>(Some(Order::new(id, items)))
        })?
    }
}
