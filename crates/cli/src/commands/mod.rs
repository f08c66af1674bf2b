//! CLI command implementations.

pub mod catalog;
pub mod invoice;
pub mod migrate;
