//! Catalog route handlers.
//!
//! The read side returns the canonical product list; the write side is the
//! single mutating operation the catalog has: a wholesale atomic
//! replacement of the product set.

use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use tannery_core::{NewProduct, Product};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Response body for `GET /products`.
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
}

/// Response body for a successful replace.
#[derive(Debug, Serialize)]
pub struct ReplaceResponse {
    pub success: bool,
    pub count: u64,
}

/// `GET /products` - the full catalog, ordered by id ascending.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<ProductListResponse>> {
    let products = state.store().list_all().await?;
    Ok(Json(ProductListResponse { products }))
}

/// `POST /products` / `PUT /products` - atomically replace the catalog.
///
/// Accepts `{"products": [...]}`. Each entry needs at least `id`, `name`
/// and `priceCents`; the optional flags default instead of failing the
/// request. A payload whose `products` is not an array is rejected before
/// the store is touched.
#[instrument(skip(state, payload))]
pub async fn replace(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Response> {
    let Json(body) = payload
        .map_err(|rejection| AppError::BadRequest(format!("Invalid request body: {rejection}")))?;

    let products = parse_replacement(&body)?;

    let count = state.store().replace_all(&products).await?;
    tracing::info!(count, "catalog replaced");

    Ok(Json(ReplaceResponse {
        success: true,
        count,
    })
    .into_response())
}

/// Validate and decode a replace-all payload into the write shape.
fn parse_replacement(body: &Value) -> Result<Vec<NewProduct>> {
    let Some(products_value) = body.get("products") else {
        return Err(AppError::BadRequest("Invalid products data".to_string()));
    };
    let Some(entries) = products_value.as_array() else {
        return Err(AppError::BadRequest("Invalid products data".to_string()));
    };

    let mut products = Vec::with_capacity(entries.len());
    for entry in entries {
        let product: NewProduct = serde_json::from_value(entry.clone())
            .map_err(|e| AppError::BadRequest(format!("Invalid product entry: {e}")))?;
        product.validate().map_err(AppError::BadRequest)?;
        products.push(product);
    }
    Ok(products)
}
