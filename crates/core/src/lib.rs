//! `stocktrack-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no console or IO concerns).

pub mod error;

pub use error::{DomainError, DomainResult};
