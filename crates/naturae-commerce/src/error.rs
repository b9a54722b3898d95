//! Store error types.
//!
//! The cart and selection cores never fail: out-of-range input resolves to a
//! defensive no-op (see the `cart` module). Errors exist only at the session
//! boundary, where the presentation layer hands over raw identifiers.

use thiserror::Error;

/// Errors surfaced at the session boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Option label not declared by the selected product.
    #[error("Product {product} has no option \"{label}\"")]
    UnknownOption { product: String, label: String },

    /// No product is currently selected.
    #[error("No product selected")]
    NoSelection,

    /// Checkout requested on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,
}
