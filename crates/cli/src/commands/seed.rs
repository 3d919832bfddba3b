//! Catalog seed command.
//!
//! Reads a products JSON file and atomically replaces the catalog through
//! the store's replace-all primitive. This is the one and only import
//! path: there is no row-by-row variant and no hardcoded product list.

use std::path::Path;

use secrecy::SecretString;
use serde_json::Value;
use tracing::info;

use tannery_core::NewProduct;
use tannery_server::db;
use tannery_server::store::{CatalogStore, PgCatalogStore};

/// Errors from the seed command.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid products data: {0}")]
    InvalidData(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store error: {0}")]
    Store(#[from] tannery_server::store::StoreError),
}

/// Replace the catalog with the contents of `file_path`.
///
/// Accepts either `{"products": [...]}` or a bare array; each entry needs
/// at least `id`, `name` and `priceCents`. The file is read and validated
/// in full before the database is touched - a bad entry fails the whole
/// seed, it never half-applies.
///
/// # Errors
///
/// Returns [`SeedError`] if the file is missing or malformed, or if the
/// replacement fails (in which case the prior catalog is retained).
pub async fn run(file_path: &str) -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("TANNERY_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| SeedError::MissingEnvVar("TANNERY_DATABASE_URL"))?;

    let path = Path::new(file_path);
    if !path.exists() {
        return Err(SeedError::FileNotFound(file_path.to_string()));
    }

    info!(path = %file_path, "Loading products from file");
    let content = tokio::fs::read_to_string(path).await?;
    let products = parse_products(&content)?;
    info!(count = products.len(), "Parsed and validated products");

    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let store = PgCatalogStore::new(pool);
    let count = store.replace_all(&products).await?;

    info!(count, "Catalog replaced");
    Ok(())
}

/// Parse and validate a products file into the write shape.
fn parse_products(content: &str) -> Result<Vec<NewProduct>, SeedError> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| SeedError::InvalidData(e.to_string()))?;

    let entries = match &value {
        Value::Object(map) => map
            .get("products")
            .and_then(Value::as_array)
            .ok_or_else(|| SeedError::InvalidData("products must be an array".to_string()))?,
        Value::Array(entries) => entries,
        _ => {
            return Err(SeedError::InvalidData(
                "expected an object with a products array, or a bare array".to_string(),
            ));
        }
    };

    let mut products = Vec::with_capacity(entries.len());
    for entry in entries {
        let product: NewProduct = serde_json::from_value(entry.clone())
            .map_err(|e| SeedError::InvalidData(e.to_string()))?;
        product.validate().map_err(SeedError::InvalidData)?;
        products.push(product);
    }
    Ok(products)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_wrapped_file() {
        let products = parse_products(
            r#"{"products": [{"id": 1, "name": "No. 01 Bifold Wallet", "priceCents": 18500}]}"#,
        )
        .unwrap();
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn parses_bare_array_file() {
        let products =
            parse_products(r#"[{"id": 2, "name": "No. 02 Card Holder", "priceCents": 12000}]"#)
                .unwrap();
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn rejects_non_array_products() {
        assert!(parse_products(r#"{"products": 5}"#).is_err());
        assert!(parse_products(r#""just a string""#).is_err());
    }

    #[test]
    fn one_bad_entry_fails_the_whole_seed() {
        let err = parse_products(
            r#"{"products": [
                {"id": 1, "name": "ok", "priceCents": 100},
                {"id": 2, "name": "bad", "priceCents": -1}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SeedError::InvalidData(_)));
    }
}
