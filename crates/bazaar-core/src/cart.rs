//! Cart line items and the rendered cart view.

use crate::types::ProductId;
use serde::{Deserialize, Serialize};

/// One reserved line in the cart.
///
/// Holds the catalog key, not the product itself; the catalog remains the
/// single owner and lines resolve through it. The reserved quantity was
/// already deducted from the product's available stock when the line was
/// created or grown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }

    /// Line subtotal at the given unit price.
    pub fn subtotal(&self, unit_price: f64) -> f64 {
        unit_price * f64::from(self.quantity)
    }
}

/// A cart line resolved against the catalog, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartViewLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub subtotal: f64,
}

/// Snapshot of the whole cart with the grand total.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartView {
    pub lines: Vec<CartViewLine>,
    pub total: f64,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtotal_is_price_times_quantity() {
        let line = CartLine::new(ProductId::new("PID001"), 3);
        assert!((line.subtotal(10.0) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_view_reports_empty() {
        let view = CartView::default();
        assert!(view.is_empty());
        assert!((view.total - 0.0).abs() < f64::EPSILON);
    }
}
