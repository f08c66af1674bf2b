//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (bike lines)
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database)
//! GET  /stores                 - Physical store locations
//!
//! # Catalog
//! GET  /products               - Product listing (?type=, ?category=)
//! GET  /products/{id}          - Product detail
//! GET  /accessories            - Accessories (?category=)
//! GET  /api/products           - Product listing (JSON)
//! GET  /api/products/{id}      - Product detail (JSON)
//!
//! # Cart (JSON responses)
//! GET  /cart                   - Cart page with checkout form
//! POST /cart/add               - Add product in a color and size
//! POST /cart/update            - Set line quantity (<= 0 removes)
//! POST /cart/remove            - Remove line
//! POST /cart/clear             - Empty cart
//! GET  /cart/count             - Item count
//!
//! # Checkout
//! POST /checkout               - Validate card, charge, email invoice
//! GET  /checkout/status        - Last payment status
//! POST /checkout/reset         - Return a finished attempt to idle
//!
//! # Point of sale (operators only, rate limited)
//! GET  /pos                    - POS screen
//! POST /pos/scan               - Add one unit by product code
//! POST /pos/update             - Set line quantity (<= 0 removes)
//! POST /pos/remove             - Remove line
//! POST /pos/clear              - Void ticket
//! POST /pos/complete           - Take payment, email invoice
//!
//! # Auth (rate limited)
//! POST /auth/signup            - Create account
//! POST /auth/login             - Sign in
//! POST /auth/logout            - Sign out
//!
//! # Account (requires auth)
//! GET  /account                - Profile
//! POST /account                - Update profile
//! ```

pub mod account;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod pos;
pub mod products;
pub mod stores;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::{api_rate_limiter, auth_rate_limiter};
use crate::state::AppState;

/// Create the product page routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the product JSON API router.
pub fn product_api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::api_index))
        .route("/{id}", get(products::api_show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(checkout::submit))
        .route("/status", get(checkout::status))
        .route("/reset", post(checkout::reset))
}

/// Create the point-of-sale routes router.
pub fn pos_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pos::index))
        .route("/scan", post(pos::scan))
        .route("/update", post(pos::update))
        .route("/remove", post(pos::remove))
        .route("/clear", post(pos::clear))
        .route("/complete", post(pos::complete))
        .layer(api_rate_limiter())
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .layer(auth_rate_limiter())
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new().route("/", get(account::show).post(account::update))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::home))
        .route("/stores", get(stores::stores))
        .route("/accessories", get(products::accessories))
        .nest("/products", product_routes())
        .nest("/api/products", product_api_routes().layer(api_rate_limiter()))
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .nest("/pos", pos_routes())
        .nest("/auth", auth_routes())
        .nest("/account", account_routes())
}
