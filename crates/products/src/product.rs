use stocktrack_core::{DomainError, DomainResult};

use crate::price::Price;

/// Stock level below which a product is flagged as running low.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 5;

/// A catalog entry: name and price are fixed at creation, stock moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: Price,
    stock: u64,
}

impl Product {
    /// Create a product. A negative initial stock is clamped to zero.
    pub fn new(name: impl Into<String>, price: Price, stock: i64) -> Self {
        Self {
            name: name.into(),
            price,
            stock: stock.max(0).unsigned_abs(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> u64 {
        self.stock
    }

    /// Add `delta` units and return the new stock level.
    ///
    /// Negative deltas are rejected without touching the stock, so this can
    /// only ever grow (or keep) the count.
    pub fn adjust_stock(&mut self, delta: i64) -> DomainResult<u64> {
        if delta < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        self.stock = self.stock.saturating_add(delta.unsigned_abs());
        Ok(self.stock)
    }

    pub fn is_low_stock(&self, threshold: u64) -> bool {
        self.stock < threshold
    }

    /// One-line summary, e.g. `Jaket - Price: Rp150,000 - Stock: 3 (LOW STOCK!)`.
    pub fn describe(&self, threshold: u64) -> String {
        let status = if self.is_low_stock(threshold) {
            " (LOW STOCK!)"
        } else {
            ""
        };
        format!(
            "{} - Price: {} - Stock: {}{}",
            self.name, self.price, self.stock, status
        )
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.describe(DEFAULT_LOW_STOCK_THRESHOLD))
    }
}
