//! Core state engine for the Bazaar shopping-cart demo.
//!
//! This crate owns the two in-memory mappings (the product catalog and the
//! cart) behind the [`CartManager`] facade. Every mutation is all-or-nothing
//! within a single call; failures come back as [`CartError`] values and never
//! leave partial state behind. Presentation layers (TUI, prompt shell) are
//! pure callers and contribute no logic of their own.

pub mod cart;
pub mod manager;
pub mod product;
pub mod types;

pub use cart::{CartLine, CartView, CartViewLine};
pub use manager::CartManager;
pub use product::Product;
pub use types::ProductId;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    #[error("product not found: {0}")]
    NotFound(ProductId),
    #[error("item not in cart: {0}")]
    NotInCart(ProductId),
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("quantity must be at least 1")]
    InvalidQuantity,
    #[error("price must be non-negative: {0}")]
    InvalidPrice(f64),
    #[error("product name must not be empty")]
    InvalidName,
    #[error("cart is empty")]
    EmptyCart,
}
