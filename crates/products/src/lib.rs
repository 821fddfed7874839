//! Products domain module.
//!
//! This crate contains the product record and its pricing value object,
//! implemented purely as deterministic domain logic (no IO).

pub mod price;
pub mod product;

pub use price::Price;
pub use product::{DEFAULT_LOW_STOCK_THRESHOLD, Product};
