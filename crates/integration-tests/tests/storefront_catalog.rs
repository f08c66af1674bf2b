//! Integration tests for the public catalog.
//!
//! These tests require the storefront running (cargo run -p
//! adventure-works-storefront) with its database.

use adventure_works_integration_tests::{ProductBody, session_client, url};
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_health_and_readiness() {
    let client = session_client();

    let resp = client.get(url("/health")).send().await.expect("health");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client.get(url("/health/ready")).send().await.expect("ready");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_pages_carry_security_headers() {
    let resp = session_client()
        .get(url("/"))
        .send()
        .await
        .expect("home page");

    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert!(headers.contains_key("content-security-policy"));
    assert!(headers.contains_key("x-request-id"));
    assert_eq!(headers["x-frame-options"], "DENY");
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_product_api_filters_by_type() {
    let products: Vec<ProductBody> = session_client()
        .get(url("/api/products?type=Touring"))
        .send()
        .await
        .expect("product list")
        .json()
        .await
        .expect("product json");

    assert!(!products.is_empty());
    assert!(products.iter().all(|p| p.kind == "Touring"));
    assert!(products.iter().all(|p| p.price.starts_with('$')));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_product_api_unknown_type_is_rejected() {
    let resp = session_client()
        .get(url("/api/products?type=Unicycle"))
        .send()
        .await
        .expect("product list");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("error json");
    assert_eq!(body["error"], "Tipo de producto desconocido");
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_product_detail_and_missing_product() {
    let client = session_client();

    let body: Value = client
        .get(url("/api/products/touring-1000"))
        .send()
        .await
        .expect("product detail")
        .json()
        .await
        .expect("product json");
    assert_eq!(body["id"], "touring-1000");
    assert!(body["colors"].as_array().is_some_and(|c| !c.is_empty()));

    let resp = client
        .get(url("/products/no-such-bike"))
        .send()
        .await
        .expect("missing product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
