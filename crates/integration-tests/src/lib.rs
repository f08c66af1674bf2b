//! Integration tests for Adventure Works.
//!
//! The tests in `tests/` drive a running storefront over HTTP and are
//! `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and the storefront
//! cargo run -p adventure-works-storefront
//!
//! # Run integration tests
//! cargo test -p adventure-works-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_BASE_URL` - Storefront under test (default: `http://localhost:3000`)

use reqwest::Client;
use serde::Deserialize;

/// Base URL of the storefront under test.
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Absolute URL for a storefront path.
#[must_use]
pub fn url(path: &str) -> String {
    format!("{}{path}", storefront_base_url().trim_end_matches('/'))
}

/// HTTP client that keeps the session cookie between requests.
///
/// # Panics
///
/// Panics if the TLS backend cannot be initialized.
#[must_use]
pub fn session_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Cart as returned by the cart endpoints.
#[derive(Debug, Deserialize)]
pub struct CartBody {
    pub items: Vec<CartLineBody>,
    pub item_count: u32,
    pub subtotal: String,
}

/// One cart line.
#[derive(Debug, Deserialize)]
pub struct CartLineBody {
    pub id: String,
    pub name: String,
    pub color: String,
    pub size: String,
    pub quantity: u32,
}

/// Catalog entry from `/api/products`.
#[derive(Debug, Deserialize)]
pub struct ProductBody {
    pub id: String,
    pub name: String,
    pub price: String,
    pub kind: String,
}
