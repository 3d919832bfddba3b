//! Postgres-backed catalog store.
//!
//! The `products` table uses one canonical column set (`price_cents`,
//! `limited`, `remaining`, `sold_out`, `image`); translation to the wire
//! shape happens here and only here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use tannery_core::{NewProduct, Product};

use super::{CatalogStore, StoreError};

/// Catalog store over a `PostgreSQL` pool.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

/// Internal row type for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price_cents: i64,
    material: String,
    limited: bool,
    remaining: i64,
    sold_out: bool,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price_cents: row.price_cents,
            material: row.material,
            limited: row.limited,
            remaining: row.remaining,
            sold_out: row.sold_out,
            image: row.image,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

impl PgCatalogStore {
    /// Create a new store over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r"
            SELECT id, name, price_cents, material, limited,
                   remaining, sold_out, image, created_at, updated_at
            FROM products
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn replace_all(&self, products: &[NewProduct]) -> Result<u64, StoreError> {
        // Delete and insert inside one transaction: either the whole new
        // generation commits or the old one stays. A failed insert must
        // not leave a mixed catalog behind.
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM products").execute(&mut *tx).await?;

        for product in products {
            sqlx::query(
                r"
                INSERT INTO products
                    (id, name, price_cents, material, limited, remaining, sold_out, image)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ",
            )
            .bind(product.id)
            .bind(&product.name)
            .bind(product.price_cents)
            .bind(&product.material)
            .bind(product.limited)
            .bind(product.remaining)
            .bind(product.sold_out)
            .bind(&product.image)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(products.len() as u64)
    }
}
