//! Local state store: cached catalog collections, the cart, and the mode flag.
//!
//! The store is plain data owned by the coordinating [`Shop`](crate::shop::Shop);
//! the session loop holds it through `&mut`, so every replacement is atomic
//! from any reader's perspective. Collections are replaced wholesale on each
//! refresh - there is no partial merge and no coupling between them.

use rust_decimal::Decimal;

use kiosk_core::{CartItem, Product, ProductId, User};

/// The storefront's in-memory state.
///
/// `products` and `users` always hold the result of the most recent fetch
/// attempt; a failed fetch stores the empty collection rather than leaving
/// stale data behind. The cart is owned exclusively by this store and is
/// never persisted remotely except at checkout.
#[derive(Debug, Default)]
pub struct StoreState {
    products: Vec<Product>,
    users: Vec<User>,
    cart: Vec<CartItem>,
    admin_mode: bool,
}

impl StoreState {
    /// Create an empty store in user mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Cached collections
    // =========================================================================

    /// The cached product list, in fetch order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Replace the product cache wholesale. Does not touch cart or users.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Look up a product in the cache by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The cached user list, in fetch order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Replace the user cache wholesale.
    pub fn replace_users(&mut self, users: Vec<User>) {
        self.users = users;
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// The cart lines, in the order products were first added.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// Add a product to the cart, returning the line's new quantity.
    ///
    /// The cart holds at most one line per product id: re-adding increments
    /// the existing line instead of appending a duplicate.
    pub fn add_to_cart(&mut self, product: Product) -> u32 {
        if let Some(item) = self.cart.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
            return item.quantity;
        }
        self.cart.push(CartItem::new(product));
        1
    }

    /// Remove every cart line for a product id.
    ///
    /// Removing an id that is not in the cart is a no-op; returns whether
    /// anything was removed.
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        let before = self.cart.len();
        self.cart.retain(|i| i.product.id != id);
        self.cart.len() != before
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Sum of unit price times quantity over all lines.
    ///
    /// Recomputed on every call, never cached.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart.iter().map(CartItem::line_total).sum()
    }

    // =========================================================================
    // Mode flag
    // =========================================================================

    /// Whether the storefront is in admin mode.
    #[must_use]
    pub const fn admin_mode(&self) -> bool {
        self.admin_mode
    }

    /// Flip the mode flag, returning the new value.
    pub const fn toggle_admin_mode(&mut self) -> bool {
        self.admin_mode = !self.admin_mode;
        self.admin_mode
    }
}
