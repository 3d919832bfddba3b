//! In-memory catalog store for tests.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use tannery_core::{NewProduct, Product};

use super::{CatalogStore, StoreError};

/// Catalog store backed by a `RwLock<Vec<Product>>`.
///
/// Used by router tests and anywhere a real database is out of reach.
/// The lock makes each operation atomic, mirroring the transactional
/// guarantee of the Postgres store.
#[derive(Default)]
pub struct MemoryCatalogStore {
    products: RwLock<Vec<Product>>,
    fail: RwLock<bool>,
}

impl MemoryCatalogStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation report the store as unavailable.
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut fail) = self.fail.write() {
            *fail = unavailable;
        }
    }

    fn check_available(&self) -> Result<(), StoreError> {
        let failing = self.fail.read().map(|f| *f).unwrap_or(true);
        if failing {
            return Err(StoreError::Unavailable(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        self.check_available()?;
        let products = self
            .products
            .read()
            .map_err(|e| StoreError::DataCorruption(e.to_string()))?;
        let mut out = products.clone();
        out.sort_by_key(|p| p.id);
        Ok(out)
    }

    async fn replace_all(&self, products: &[NewProduct]) -> Result<u64, StoreError> {
        self.check_available()?;
        let now = Utc::now();
        let next: Vec<Product> = products
            .iter()
            .map(|p| Product {
                id: p.id,
                name: p.name.clone(),
                price_cents: p.price_cents,
                material: p.material.clone(),
                limited: p.limited,
                remaining: p.remaining,
                sold_out: p.sold_out,
                image: p.image.clone(),
                created_at: Some(now),
                updated_at: Some(now),
            })
            .collect();

        let mut slot = self
            .products
            .write()
            .map_err(|e| StoreError::DataCorruption(e.to_string()))?;
        *slot = next;
        Ok(products.len() as u64)
    }
}
