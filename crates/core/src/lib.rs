//! Adventure Works Core - Shared domain types.
//!
//! This crate provides common types used across all Adventure Works components:
//! - `storefront` - Public store, checkout and point of sale
//! - `cli` - Command-line tools for operators
//!
//! # Architecture
//!
//! The core crate contains only types and pure validation - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for identifiers, money, emails, payment cards
//!   and payment status

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
