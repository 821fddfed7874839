use stocktrack_core::{DomainError, DomainResult};
use stocktrack_products::{DEFAULT_LOW_STOCK_THRESHOLD, Price, Product};

/// Ordered, in-memory product list.
///
/// Insertion order is the only ordering. Positions are 0-based here; the
/// console adds one when it shows them.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    products: Vec<Product>,
    low_stock_threshold: u64,
}

/// A product that fell below the threshold, with its position in the list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowStockEntry<'a> {
    pub index: usize,
    pub product: &'a Product,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    pub fn with_threshold(low_stock_threshold: u64) -> Self {
        Self {
            products: Vec::new(),
            low_stock_threshold,
        }
    }

    pub fn threshold(&self) -> u64 {
        self.low_stock_threshold
    }

    /// Append a new product and return a reference to it.
    ///
    /// Names that are empty after trimming are rejected; otherwise the name is
    /// stored as given and duplicates are allowed.
    pub fn add_product(
        &mut self,
        name: impl Into<String>,
        price: Price,
        stock: i64,
    ) -> DomainResult<&Product> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }

        self.products.push(Product::new(name, price, stock));
        let last = self.products.len() - 1;
        Ok(&self.products[last])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of stock across every product.
    pub fn total_stock(&self) -> u64 {
        self.products
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.stock()))
    }

    pub fn is_low_stock(&self, product: &Product) -> bool {
        product.is_low_stock(self.low_stock_threshold)
    }

    /// Products below the threshold, in list order.
    pub fn low_stock(&self) -> Vec<LowStockEntry<'_>> {
        self.products
            .iter()
            .enumerate()
            .filter(|(_, p)| self.is_low_stock(p))
            .map(|(index, product)| LowStockEntry { index, product })
            .collect()
    }

    /// Checks that a 0-based position exists.
    pub fn ensure_index(&self, index: usize) -> DomainResult<()> {
        if index < self.products.len() {
            Ok(())
        } else {
            Err(DomainError::out_of_range(index, self.products.len()))
        }
    }

    /// Apply a stock adjustment to the product at `index` and return the new level.
    pub fn adjust_stock(&mut self, index: usize, delta: i64) -> DomainResult<u64> {
        self.ensure_index(index)?;
        self.products[index].adjust_stock(delta)
    }

    /// Description line for one product using this inventory's threshold.
    pub fn describe(&self, product: &Product) -> String {
        product.describe(self.low_stock_threshold)
    }
}
