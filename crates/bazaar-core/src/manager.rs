//! The `CartManager` facade: catalog, cart, and every state mutation.

use crate::cart::{CartLine, CartView, CartViewLine};
use crate::product::Product;
use crate::types::ProductId;
use crate::CartError;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Central facade owning the product catalog and the shopping cart.
///
/// All mutation goes through the methods below; each call either fully
/// applies or leaves both maps untouched. The catalog is append-only: ids
/// are generated sequentially and never deleted or reused.
///
/// There is no global instance; the presentation layer constructs and owns
/// one `CartManager` for the lifetime of the session.
#[derive(Debug, Default)]
pub struct CartManager {
    catalog: BTreeMap<ProductId, Product>,
    cart: BTreeMap<ProductId, CartLine>,
    next_id: u32,
}

impl CartManager {
    pub fn new() -> Self {
        Self {
            catalog: BTreeMap::new(),
            cart: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn generate_product_id(&mut self) -> ProductId {
        let id = ProductId::from_counter(self.next_id);
        self.next_id += 1;
        id
    }

    /// Create a product and insert it into the catalog.
    ///
    /// The name must be non-blank and the price finite and non-negative;
    /// zero initial stock is allowed (listed before restocking).
    pub fn add_product(
        &mut self,
        name: &str,
        price: f64,
        quantity: u32,
    ) -> Result<ProductId, CartError> {
        if name.trim().is_empty() {
            return Err(CartError::InvalidName);
        }
        if !price.is_finite() || price < 0.0 {
            return Err(CartError::InvalidPrice(price));
        }
        let id = self.generate_product_id();
        info!("catalog: added {id} '{name}' price {price:.2} stock {quantity}");
        self.catalog
            .insert(id.clone(), Product::new(id.clone(), name, price, quantity));
        Ok(id)
    }

    /// Reserve `quantity` units of `id` into the cart.
    ///
    /// Deducts from stock and creates the line, or grows an existing line.
    pub fn add_to_cart(&mut self, id: &ProductId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        let product = self
            .catalog
            .get_mut(id)
            .ok_or_else(|| CartError::NotFound(id.clone()))?;
        let available = product.quantity_available();
        if !product.decrease_quantity(quantity) {
            return Err(CartError::InsufficientStock {
                requested: quantity,
                available,
            });
        }
        debug!("cart: reserved {quantity} of {id}");
        self.cart
            .entry(id.clone())
            .and_modify(|line| line.quantity += quantity)
            .or_insert_with(|| CartLine::new(id.clone(), quantity));
        Ok(())
    }

    /// Set the cart line for `id` to exactly `new_quantity` units.
    ///
    /// Growing the line moves the difference out of stock; shrinking it
    /// returns the difference. Zero is rejected; removal is explicit via
    /// [`CartManager::remove_from_cart`].
    pub fn update_cart_quantity(
        &mut self,
        id: &ProductId,
        new_quantity: u32,
    ) -> Result<(), CartError> {
        if new_quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        let current = self
            .cart
            .get(id)
            .map(|line| line.quantity)
            .ok_or_else(|| CartError::NotInCart(id.clone()))?;
        // A line can only exist for a catalog product, so the lookup holds.
        let product = self
            .catalog
            .get_mut(id)
            .ok_or_else(|| CartError::NotFound(id.clone()))?;

        if new_quantity > current {
            let diff = new_quantity - current;
            let available = product.quantity_available();
            if !product.decrease_quantity(diff) {
                return Err(CartError::InsufficientStock {
                    requested: diff,
                    available,
                });
            }
            debug!("cart: grew {id} by {diff} to {new_quantity}");
        } else if new_quantity < current {
            product.increase_quantity(current - new_quantity);
            debug!("cart: shrank {id} to {new_quantity}");
        } else {
            return Ok(());
        }

        if let Some(line) = self.cart.get_mut(id) {
            line.quantity = new_quantity;
        }
        Ok(())
    }

    /// Delete the cart line for `id` and return its reservation to stock.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> Result<(), CartError> {
        let line = self
            .cart
            .remove(id)
            .ok_or_else(|| CartError::NotInCart(id.clone()))?;
        if let Some(product) = self.catalog.get_mut(id) {
            product.increase_quantity(line.quantity);
        }
        debug!("cart: removed {id}, returned {} to stock", line.quantity);
        Ok(())
    }

    /// Sum of price × quantity over all cart lines. Pure read.
    pub fn cart_total(&self) -> f64 {
        self.cart
            .values()
            .map(|line| {
                self.catalog
                    .get(&line.product_id)
                    .map_or(0.0, |p| line.subtotal(p.price()))
            })
            .sum()
    }

    /// Drop every cart line without returning stock.
    ///
    /// Reservations are consumed, not abandoned; stock levels stay where
    /// the reservations left them.
    pub fn clear_cart(&mut self) {
        debug!("cart: cleared {} line(s)", self.cart.len());
        self.cart.clear();
    }

    /// Complete the purchase: return the total and clear the cart.
    ///
    /// Fails with [`CartError::EmptyCart`] when the total is zero.
    pub fn checkout(&mut self) -> Result<f64, CartError> {
        let total = self.cart_total();
        if total == 0.0 {
            return Err(CartError::EmptyCart);
        }
        info!("checkout: total {total:.2}, {} line(s)", self.cart.len());
        self.clear_cart();
        Ok(total)
    }

    /// Catalog products in id order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.catalog.values()
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    /// Cart lines resolved against the catalog, with subtotals and total.
    pub fn cart_view(&self) -> CartView {
        let lines: Vec<CartViewLine> = self
            .cart
            .values()
            .filter_map(|line| {
                self.catalog.get(&line.product_id).map(|p| CartViewLine {
                    product_id: line.product_id.clone(),
                    name: p.name().to_owned(),
                    unit_price: p.price(),
                    quantity: line.quantity,
                    subtotal: line.subtotal(p.price()),
                })
            })
            .collect();
        let total = lines.iter().map(|l| l.subtotal).sum();
        CartView { lines, total }
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stocked() -> (CartManager, ProductId) {
        let mut mgr = CartManager::new();
        let id = mgr.add_product("Pen", 10.0, 5).unwrap();
        (mgr, id)
    }

    #[test]
    fn add_product_generates_sequential_ids() {
        let mut mgr = CartManager::new();
        assert_eq!(mgr.add_product("Pen", 10.0, 5).unwrap(), "PID001");
        assert_eq!(mgr.add_product("Book", 50.0, 2).unwrap(), "PID002");
        assert_eq!(mgr.catalog_len(), 2);
    }

    #[test]
    fn add_product_rejects_blank_name() {
        let mut mgr = CartManager::new();
        assert!(matches!(
            mgr.add_product("   ", 1.0, 1),
            Err(CartError::InvalidName)
        ));
        assert_eq!(mgr.catalog_len(), 0);
    }

    #[test]
    fn add_product_rejects_negative_or_non_finite_price() {
        let mut mgr = CartManager::new();
        assert!(matches!(
            mgr.add_product("Pen", -1.0, 1),
            Err(CartError::InvalidPrice(_))
        ));
        assert!(matches!(
            mgr.add_product("Pen", f64::NAN, 1),
            Err(CartError::InvalidPrice(_))
        ));
    }

    #[test]
    fn add_product_allows_zero_stock() {
        let mut mgr = CartManager::new();
        let id = mgr.add_product("Preorder", 99.0, 0).unwrap();
        assert_eq!(mgr.product(&id).unwrap().quantity_available(), 0);
    }

    #[test]
    fn add_to_cart_deducts_stock_and_creates_line() {
        let (mut mgr, id) = stocked();
        mgr.add_to_cart(&id, 3).unwrap();
        assert_eq!(mgr.product(&id).unwrap().quantity_available(), 2);
        assert_eq!(mgr.cart_len(), 1);
        assert!((mgr.cart_total() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn add_to_cart_unknown_id_fails() {
        let (mut mgr, _) = stocked();
        let missing = ProductId::new("PID099");
        assert!(matches!(
            mgr.add_to_cart(&missing, 1),
            Err(CartError::NotFound(_))
        ));
    }

    #[test]
    fn add_to_cart_insufficient_stock_leaves_state_unchanged() {
        let (mut mgr, id) = stocked();
        mgr.add_to_cart(&id, 3).unwrap();
        let err = mgr.add_to_cart(&id, 5).unwrap_err();
        assert!(matches!(
            err,
            CartError::InsufficientStock {
                requested: 5,
                available: 2
            }
        ));
        assert_eq!(mgr.product(&id).unwrap().quantity_available(), 2);
        assert!((mgr.cart_total() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn add_to_cart_zero_quantity_rejected() {
        let (mut mgr, id) = stocked();
        assert!(matches!(
            mgr.add_to_cart(&id, 0),
            Err(CartError::InvalidQuantity)
        ));
        assert_eq!(mgr.product(&id).unwrap().quantity_available(), 5);
    }

    #[test]
    fn add_to_cart_twice_merges_lines() {
        let (mut mgr, id) = stocked();
        mgr.add_to_cart(&id, 2).unwrap();
        mgr.add_to_cart(&id, 1).unwrap();
        assert_eq!(mgr.cart_len(), 1);
        assert_eq!(mgr.cart_view().lines[0].quantity, 3);
        assert_eq!(mgr.product(&id).unwrap().quantity_available(), 2);
    }

    #[test]
    fn update_quantity_down_returns_stock() {
        let (mut mgr, id) = stocked();
        mgr.add_to_cart(&id, 3).unwrap();
        mgr.update_cart_quantity(&id, 1).unwrap();
        assert_eq!(mgr.product(&id).unwrap().quantity_available(), 4);
        assert!((mgr.cart_total() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn update_quantity_up_within_stock() {
        let (mut mgr, id) = stocked();
        mgr.add_to_cart(&id, 2).unwrap();
        mgr.update_cart_quantity(&id, 5).unwrap();
        assert_eq!(mgr.product(&id).unwrap().quantity_available(), 0);
        assert_eq!(mgr.cart_view().lines[0].quantity, 5);
    }

    #[test]
    fn update_quantity_up_beyond_stock_fails_without_mutation() {
        let (mut mgr, id) = stocked();
        mgr.add_to_cart(&id, 2).unwrap();
        let err = mgr.update_cart_quantity(&id, 6).unwrap_err();
        assert!(matches!(
            err,
            CartError::InsufficientStock {
                requested: 4,
                available: 3
            }
        ));
        assert_eq!(mgr.product(&id).unwrap().quantity_available(), 3);
        assert_eq!(mgr.cart_view().lines[0].quantity, 2);
    }

    #[test]
    fn update_quantity_same_value_is_noop() {
        let (mut mgr, id) = stocked();
        mgr.add_to_cart(&id, 2).unwrap();
        mgr.update_cart_quantity(&id, 2).unwrap();
        assert_eq!(mgr.product(&id).unwrap().quantity_available(), 3);
    }

    #[test]
    fn update_quantity_zero_rejected() {
        let (mut mgr, id) = stocked();
        mgr.add_to_cart(&id, 2).unwrap();
        assert!(matches!(
            mgr.update_cart_quantity(&id, 0),
            Err(CartError::InvalidQuantity)
        ));
        assert_eq!(mgr.cart_len(), 1);
    }

    #[test]
    fn update_quantity_not_in_cart_fails() {
        let (mut mgr, id) = stocked();
        assert!(matches!(
            mgr.update_cart_quantity(&id, 1),
            Err(CartError::NotInCart(_))
        ));
    }

    #[test]
    fn remove_restores_stock_and_second_remove_fails() {
        let (mut mgr, id) = stocked();
        mgr.add_to_cart(&id, 3).unwrap();
        mgr.remove_from_cart(&id).unwrap();
        assert_eq!(mgr.product(&id).unwrap().quantity_available(), 5);
        assert_eq!(mgr.cart_len(), 0);
        assert!(matches!(
            mgr.remove_from_cart(&id),
            Err(CartError::NotInCart(_))
        ));
    }

    #[test]
    fn cart_total_zero_when_empty() {
        let (mgr, _) = stocked();
        assert!((mgr.cart_total() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn clear_cart_consumes_reservations() {
        let (mut mgr, id) = stocked();
        mgr.add_to_cart(&id, 3).unwrap();
        mgr.clear_cart();
        assert_eq!(mgr.cart_len(), 0);
        // Stock stays where the reservation left it.
        assert_eq!(mgr.product(&id).unwrap().quantity_available(), 2);
    }

    #[test]
    fn checkout_returns_total_and_clears() {
        let (mut mgr, id) = stocked();
        mgr.add_to_cart(&id, 3).unwrap();
        let total = mgr.checkout().unwrap();
        assert!((total - 30.0).abs() < f64::EPSILON);
        assert_eq!(mgr.cart_len(), 0);
        assert_eq!(mgr.product(&id).unwrap().quantity_available(), 2);
    }

    #[test]
    fn checkout_empty_cart_fails() {
        let (mut mgr, _) = stocked();
        assert!(matches!(mgr.checkout(), Err(CartError::EmptyCart)));
    }

    #[test]
    fn cart_view_resolves_names_and_subtotals() {
        let mut mgr = CartManager::new();
        let pen = mgr.add_product("Pen", 10.0, 5).unwrap();
        let book = mgr.add_product("Book", 50.0, 2).unwrap();
        mgr.add_to_cart(&pen, 2).unwrap();
        mgr.add_to_cart(&book, 1).unwrap();
        let view = mgr.cart_view();
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].name, "Pen");
        assert!((view.lines[0].subtotal - 20.0).abs() < f64::EPSILON);
        assert!((view.total - 70.0).abs() < f64::EPSILON);
    }
}
