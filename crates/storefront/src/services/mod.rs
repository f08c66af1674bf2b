//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `cart` - Session-backed shopping cart
//! - `checkout` - Card validation, simulated payment, order invoices
//! - `pos` - Point-of-sale ticket for counter sales
//! - `invoice` - PDF and JSON invoice rendering
//! - `email` - Invoice delivery through the email API

pub mod cart;
pub mod checkout;
pub mod email;
pub mod invoice;
pub mod pos;

pub use email::{EmailClient, EmailError};
