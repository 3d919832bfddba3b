//! The catalog store: the sole owner of the product table.
//!
//! Two operations exist, and only two: an ordered full read and a
//! wholesale atomic replacement. Column naming is an internal concern of
//! each implementation; everything crossing the trait boundary is the
//! canonical [`Product`] shape from `tannery-core`.

use async_trait::async_trait;
use thiserror::Error;

use tannery_core::{NewProduct, Product};

mod memory;
mod postgres;

pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;

/// Errors from catalog store operations.
///
/// `Unavailable` is deliberately distinct from `Database`: a store that
/// cannot be reached must never be mistaken for an empty catalog.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached at all (pool exhausted, connection
    /// refused, I/O failure).
    #[error("catalog store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// A query failed against a reachable store.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Data in the store does not fit the canonical product shape.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Self::Unavailable(err),
            _ => Self::Database(err),
        }
    }
}

/// Read/replace access to the product table.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Return every product, ordered by id ascending.
    ///
    /// A read either returns the full set or fails; there is no partial
    /// success.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be reached or queried.
    async fn list_all(&self) -> Result<Vec<Product>, StoreError>;

    /// Atomically replace the entire catalog with the given products,
    /// preserving each product's supplied identifier.
    ///
    /// Either the whole replacement commits or the prior generation is
    /// retained untouched; a reader never observes a mix of the two.
    /// Returns the number of products persisted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if any part of the replacement fails, in
    /// which case nothing was committed.
    async fn replace_all(&self, products: &[NewProduct]) -> Result<u64, StoreError>;
}
