//! Catalog acquisition: live service first, bundled snapshot second.
//!
//! The fallback chain is a resilience feature, not an error path: the
//! storefront must render something even with the backing service down.
//! Per-source failures are logged and swallowed; only when every source
//! fails does the load settle on an empty catalog, and even that is an
//! explicit outcome rather than an error.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use tannery_core::Product;

/// Where a completed load got its products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// The live catalog service responded.
    Remote,
    /// The bundled static snapshot was used.
    Snapshot,
    /// Every source failed; the catalog is empty.
    Failed,
}

/// A completed catalog load.
#[derive(Debug)]
pub struct CatalogLoad {
    pub products: Vec<Product>,
    pub source: LoadSource,
}

/// Why a single source failed (internal to the fallback chain).
#[derive(Debug, Error)]
enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
    #[error("snapshot unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("payload did not parse: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetches the catalog with the remote-then-snapshot strategy.
pub struct CatalogClient {
    http: reqwest::Client,
    products_url: String,
    snapshot_path: PathBuf,
}

impl CatalogClient {
    /// Create a client for the given service endpoint and snapshot file.
    #[must_use]
    pub fn new(products_url: impl Into<String>, snapshot_path: impl Into<PathBuf>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self {
            http,
            products_url: products_url.into(),
            snapshot_path: snapshot_path.into(),
        }
    }

    /// Acquire the catalog: remote endpoint, then snapshot, first success
    /// wins. Never merges sources and never returns an error.
    pub async fn load(&self) -> CatalogLoad {
        match self.fetch_remote().await {
            Ok(products) => {
                tracing::info!(count = products.len(), "catalog loaded from service");
                return CatalogLoad {
                    products,
                    source: LoadSource::Remote,
                };
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog service unavailable, trying snapshot");
            }
        }

        match self.read_snapshot() {
            Ok(products) => {
                tracing::info!(count = products.len(), "catalog loaded from snapshot");
                CatalogLoad {
                    products,
                    source: LoadSource::Snapshot,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "catalog unavailable from every source");
                CatalogLoad {
                    products: Vec::new(),
                    source: LoadSource::Failed,
                }
            }
        }
    }

    async fn fetch_remote(&self) -> Result<Vec<Product>, SourceError> {
        let response = self.http.get(&self.products_url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }
        let bytes = response.bytes().await?;
        Ok(parse_catalog(&bytes)?)
    }

    fn read_snapshot(&self) -> Result<Vec<Product>, SourceError> {
        let bytes = std::fs::read(&self.snapshot_path)?;
        Ok(parse_catalog(&bytes)?)
    }
}

/// Payloads arrive either wrapped (`{"products": [...]}`) or as a bare
/// array; both are accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    Wrapped { products: Vec<Product> },
    Bare(Vec<Product>),
}

fn parse_catalog(bytes: &[u8]) -> Result<Vec<Product>, serde_json::Error> {
    let payload: CatalogPayload = serde_json::from_slice(bytes)?;
    Ok(match payload {
        CatalogPayload::Wrapped { products } | CatalogPayload::Bare(products) => products,
    })
}
