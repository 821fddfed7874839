//! Inventory domain module.
//!
//! This crate owns the ordered product list and its stock rules, implemented
//! purely as deterministic domain logic (no IO, no console, no storage).

pub mod inventory;

pub use inventory::{Inventory, LowStockEntry};
