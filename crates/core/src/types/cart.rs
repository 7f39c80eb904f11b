//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::Product;

/// One line of the shopping cart: a product snapshot and a quantity.
///
/// The cart holds at most one item per product id; adding the same product
/// again increments the quantity instead of growing the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product as it looked when first added.
    pub product: Product,
    /// Number of units, always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Create a single-unit line for a product.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}
