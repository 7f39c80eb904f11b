//! Cart and checkout operations.

use chrono::Utc;

use kiosk_catalog::types::{CartLine, CartOrder};
use kiosk_core::ProductId;

use super::{Redraw, Shop};

impl Shop {
    /// Add a cached product to the cart.
    ///
    /// The lookup is against the local cache only; if the id is not there
    /// (a stale view, or a typo) the operation aborts with a notice rather
    /// than fetching fresh data. Cart-only repaint, no network.
    pub fn add_to_cart(&mut self, id: ProductId) -> Redraw {
        let Some(product) = self.state.product(id).cloned() else {
            self.notify("Product not found.");
            return Redraw::None;
        };

        let quantity = self.state.add_to_cart(product);
        tracing::debug!(%id, quantity, "cart line added or incremented");
        Redraw::Cart
    }

    /// Remove a product's line from the cart.
    ///
    /// Idempotent: removing an id that is not in the cart repaints an
    /// unchanged cart.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Redraw {
        self.state.remove_from_cart(id);
        Redraw::Cart
    }

    /// Submit the cart as one order to the catalog service.
    ///
    /// An empty cart is rejected locally without a network call. On success
    /// the cart is cleared; on failure it is left untouched, so a checkout
    /// error never loses the shopper's selection.
    pub async fn checkout(&mut self) -> Redraw {
        if self.state.cart().is_empty() {
            self.notify("Your cart is empty.");
            return Redraw::None;
        }

        let order = CartOrder {
            user_id: self.checkout_user,
            date: Utc::now(),
            products: self.state.cart().iter().map(CartLine::from).collect(),
        };

        match self.client.create_cart(&order).await {
            Ok(receipt) => {
                tracing::info!(cart_id = %receipt.id, "checkout accepted");
                self.state.clear_cart();
                self.notify(format!("Order placed! Cart #{}.", receipt.id));
                Redraw::Cart
            }
            Err(e) => {
                tracing::warn!(error = %e, "checkout failed");
                self.notify(format!("Checkout failed: {e}"));
                Redraw::None
            }
        }
    }
}
