//! Catalog service API tests.
//!
//! These run the real router against the in-memory catalog store, so they
//! need no database and no network.

#![allow(clippy::unwrap_used)]

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;

use tannery_server::config::ServerConfig;
use tannery_server::store::CatalogStore;
use tannery_server::routes;
use tannery_server::state::AppState;
use tannery_server::store::MemoryCatalogStore;

fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: SecretString::from("postgres://localhost/unused"),
        host: "127.0.0.1".parse::<IpAddr>().unwrap(),
        port: 0,
        assets_dir: PathBuf::from("assets"),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

fn test_app() -> (Router, Arc<MemoryCatalogStore>) {
    let store = Arc::new(MemoryCatalogStore::new());
    let state = AppState::new(test_config(), store.clone());
    (routes::routes().with_state(state), store)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn get_products_returns_empty_catalog() {
    let (app, _store) = test_app();

    let response = app
        .oneshot(Request::get("/products").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["products"], json!([]));
}

#[tokio::test]
async fn replace_then_get_round_trips_canonical_shape() {
    let (app, _store) = test_app();

    let payload = json!({
        "products": [
            {"id": 2, "name": "No. 02 Card Holder", "priceCents": 12000,
             "material": "Vegetable-tanned leather", "limited": true,
             "remaining": 0, "soldOut": true},
            {"id": 1, "name": "No. 01 Bifold Wallet", "priceCents": 18500,
             "material": "Full-grain Italian leather", "limited": true,
             "remaining": 12, "image": "/assets/images/no01.jpg"},
        ]
    });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/products", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(2));

    let response = app
        .oneshot(Request::get("/products").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let products = body["products"].as_array().unwrap();

    // Ordered by id ascending regardless of payload order.
    assert_eq!(products[0]["id"], json!(1));
    assert_eq!(products[1]["id"], json!(2));
    // Canonical camelCase shape with store-stamped timestamps.
    assert_eq!(products[0]["priceCents"], json!(18500));
    assert_eq!(products[1]["soldOut"], json!(true));
    assert!(products[0]["createdAt"].is_string());
}

#[tokio::test]
async fn put_is_an_alias_for_replace() {
    let (app, _store) = test_app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/products",
            json!({"products": [{"id": 1, "name": "Belt", "priceCents": 9500}]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn replace_with_empty_array_empties_catalog() {
    let (app, _store) = test_app();

    let seed = json!({"products": [{"id": 1, "name": "Belt", "priceCents": 9500}]});
    app.clone()
        .oneshot(json_request("POST", "/products", seed))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/products", json!({"products": []})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::get("/products").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["products"], json!([]));
}

#[tokio::test]
async fn malformed_payload_is_rejected_without_touching_store() {
    let (app, store) = test_app();

    let seed = json!({"products": [{"id": 1, "name": "Belt", "priceCents": 9500}]});
    app.clone()
        .oneshot(json_request("POST", "/products", seed))
        .await
        .unwrap();

    // Top-level products is not an array.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/products",
            json!({"products": "nope"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());

    // Prior generation untouched.
    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn wrong_verb_is_method_not_allowed() {
    let (app, _store) = test_app();

    let response = app
        .oneshot(
            Request::delete("/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn store_failure_is_a_server_error_with_machine_readable_body() {
    let (app, store) = test_app();
    store.set_unavailable(true);

    let response = app
        .oneshot(Request::get("/products").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
    assert!(body["details"].is_string());
}
