//! HTTP route handlers for the catalog service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health        - Liveness check
//! GET  /health/ready  - Readiness check (verifies the store)
//!
//! # Catalog
//! GET  /products      - Canonical product list
//! POST /products      - Atomic replace-all
//! PUT  /products      - Atomic replace-all (alias)
//! ```
//!
//! Any other verb on `/products` is rejected with 405 by the method
//! router before the store is touched.

pub mod products;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/products",
        get(products::index)
            .post(products::replace)
            .put(products::replace),
    )
}
