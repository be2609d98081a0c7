//! Catalog product entity with guarded stock mutation.

use crate::types::ProductId;
use serde::{Deserialize, Serialize};

/// A physical product listed in the catalog.
///
/// Stock is `u32`, so negative availability is unrepresentable; the only
/// mutation paths are [`Product::decrease_quantity`] and
/// [`Product::increase_quantity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    quantity_available: u32,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity_available: quantity,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity_available(&self) -> u32 {
        self.quantity_available
    }

    /// Deduct `amount` from stock if `0 < amount <= quantity_available`.
    ///
    /// Returns `false` without any side effect otherwise.
    pub fn decrease_quantity(&mut self, amount: u32) -> bool {
        if amount > 0 && amount <= self.quantity_available {
            self.quantity_available -= amount;
            true
        } else {
            false
        }
    }

    /// Add `amount` back to stock (restock or reservation return).
    pub fn increase_quantity(&mut self, amount: u32) {
        self.quantity_available = self.quantity_available.saturating_add(amount);
    }

    /// One-line catalog listing: `PID001: Pen - 10.00 (Stock: 5)`.
    pub fn describe(&self) -> String {
        format!(
            "{}: {} - {:.2} (Stock: {})",
            self.id, self.name, self.price, self.quantity_available
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Product {
        Product::new(ProductId::new("PID001"), "Pen", 10.0, 5)
    }

    #[test]
    fn decrease_within_stock_succeeds() {
        let mut p = pen();
        assert!(p.decrease_quantity(3));
        assert_eq!(p.quantity_available(), 2);
    }

    #[test]
    fn decrease_beyond_stock_fails_without_side_effect() {
        let mut p = pen();
        assert!(!p.decrease_quantity(6));
        assert_eq!(p.quantity_available(), 5);
    }

    #[test]
    fn decrease_zero_fails() {
        let mut p = pen();
        assert!(!p.decrease_quantity(0));
        assert_eq!(p.quantity_available(), 5);
    }

    #[test]
    fn decrease_exact_stock_empties() {
        let mut p = pen();
        assert!(p.decrease_quantity(5));
        assert_eq!(p.quantity_available(), 0);
        assert!(!p.decrease_quantity(1));
    }

    #[test]
    fn increase_is_unbounded() {
        let mut p = pen();
        p.increase_quantity(100);
        assert_eq!(p.quantity_available(), 105);
    }

    #[test]
    fn increase_saturates_at_max() {
        let mut p = Product::new(ProductId::new("PID002"), "Bulk", 1.0, u32::MAX - 1);
        p.increase_quantity(10);
        assert_eq!(p.quantity_available(), u32::MAX);
    }

    #[test]
    fn describe_renders_id_name_price_stock() {
        assert_eq!(pen().describe(), "PID001: Pen - 10.00 (Stock: 5)");
    }
}
