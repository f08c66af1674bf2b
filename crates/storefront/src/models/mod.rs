//! Domain models for storefront.

pub mod session;

pub use session::{CurrentCustomer, DEFAULT_CUSTOMER_NAME, keys as session_keys};
