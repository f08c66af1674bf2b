//! Integration tests for the cart, checkout and point of sale.
//!
//! These tests require the storefront running (cargo run -p
//! adventure-works-storefront) with its database. Each test uses its own
//! cookie jar, so each gets a fresh session.

use adventure_works_core::OrderNumber;
use adventure_works_integration_tests::{CartBody, session_client, url};
use reqwest::{Client, StatusCode};
use serde_json::Value;

async fn add_to_cart(client: &Client, product_id: &str) -> CartBody {
    client
        .post(url("/cart/add"))
        .form(&[("product_id", product_id)])
        .send()
        .await
        .expect("add to cart")
        .json()
        .await
        .expect("cart json")
}

fn valid_card() -> [(&'static str, &'static str); 4] {
    [
        ("card_number", "4111 1111 1111 1111"),
        ("expiry_date", "12/99"),
        ("cvv", "123"),
        ("billing_address", "Colonia Escalón, San Salvador"),
    ]
}

// ============================================================================
// Cart
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_cart_persists_in_session() {
    let client = session_client();

    add_to_cart(&client, "touring-1000").await;
    let cart = add_to_cart(&client, "touring-1000").await;
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.item_count, 2);
    assert_eq!(cart.subtotal, "$4398.00");

    let count: Value = client
        .get(url("/cart/count"))
        .send()
        .await
        .expect("cart count")
        .json()
        .await
        .expect("count json");
    assert_eq!(count["count"], 2);

    let cart: CartBody = client
        .post(url("/cart/clear"))
        .send()
        .await
        .expect("clear cart")
        .json()
        .await
        .expect("cart json");
    assert!(cart.items.is_empty());
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_cart_defaults_to_first_color_and_size() {
    let client = session_client();
    let cart = add_to_cart(&client, "touring-1000").await;

    let line = cart.items.first().expect("one line");
    assert_eq!(line.id, "touring-1000");
    assert!(!line.color.is_empty());
    assert!(!line.size.is_empty());
}

// ============================================================================
// Checkout
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_checkout_with_empty_cart() {
    let resp = session_client()
        .post(url("/checkout"))
        .form(&valid_card())
        .send()
        .await
        .expect("checkout");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("error json");
    assert_eq!(body["error"], "El carrito está vacío");
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_checkout_reports_field_errors() {
    let client = session_client();
    add_to_cart(&client, "road-750").await;

    let resp = client
        .post(url("/checkout"))
        .form(&[
            ("card_number", "1234"),
            ("expiry_date", "13/20"),
            ("cvv", "1"),
            ("billing_address", ""),
        ])
        .send()
        .await
        .expect("checkout");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = resp.json().await.expect("error json");
    for field in ["card_number", "expiry_date", "cvv", "billing_address"] {
        assert!(body["errors"][field].is_string(), "missing error for {field}");
    }
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_checkout_outcome_is_success_or_decline() {
    let client = session_client();
    add_to_cart(&client, "road-750").await;

    let resp = client
        .post(url("/checkout"))
        .form(&valid_card())
        .send()
        .await
        .expect("checkout");
    let status = resp.status();
    let body: Value = resp.json().await.expect("checkout json");

    if status == StatusCode::OK {
        let order: OrderNumber =
            serde_json::from_value(body["order_number"].clone()).expect("order number");
        assert!(order.as_str().starts_with("AW"));
        assert_eq!(body["status"], "success");
    } else {
        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(body["status"], "error");
    }

    let reset: Value = client
        .post(url("/checkout/reset"))
        .send()
        .await
        .expect("reset")
        .json()
        .await
        .expect("reset json");
    assert_eq!(reset["status"], "idle");
}

// ============================================================================
// Point of sale
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_pos_is_closed_to_anonymous_visitors() {
    let client = session_client();

    let resp = client
        .post(url("/pos/scan"))
        .form(&[("code", "touring-1000")])
        .send()
        .await
        .expect("scan");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = client
        .post(url("/pos/complete"))
        .form(&[
            ("amount_paid", "3000"),
            ("customer_email", "someone@example.com"),
        ])
        .send()
        .await
        .expect("complete");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Account
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_account_requires_sign_in() {
    let resp = session_client()
        .get(url("/account"))
        .send()
        .await
        .expect("account");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("error json");
    assert_eq!(body["error"], "Debes iniciar sesión");
}
