//! The coordinating controller.
//!
//! [`Shop`] owns the catalog client and the [`StoreState`] and exposes one
//! method per user action. Every method follows the same shape: mutate state
//! or call the catalog service, queue any user-facing notices, and return a
//! [`Redraw`] intent telling the session loop what to repaint. Refreshes are
//! explicit, named operations; nothing fetches as a side effect of rendering.

mod admin;
mod cart;

pub use admin::{FormField, ProductForm};

use kiosk_catalog::CatalogClient;
use kiosk_core::UserId;

use crate::state::StoreState;
use crate::views::{
    CartView, CategoryFilter, ProductCard, SortKey, UserRow, visible_products,
};

/// What the session loop should repaint after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Nothing changed on screen.
    None,
    /// Only the cart panel.
    Cart,
    /// The product grid (and the admin form when in admin mode).
    Products,
    /// The user table.
    Users,
    /// Everything: mode changes swap the action set on every card.
    All,
}

/// The storefront coordinator.
///
/// Owned mutably by the session loop; each operation runs to completion
/// before the next begins, so state transitions are never observed halfway.
pub struct Shop {
    client: CatalogClient,
    state: StoreState,
    category: CategoryFilter,
    sort: SortKey,
    form: ProductForm,
    checkout_user: UserId,
    notices: Vec<String>,
}

impl Shop {
    /// Create a shop talking to the given catalog service.
    ///
    /// `checkout_user` is the placeholder account checkout orders are placed
    /// under; the catalog service has no notion of a signed-in shopper.
    #[must_use]
    pub fn new(client: CatalogClient, checkout_user: UserId) -> Self {
        Self {
            client,
            state: StoreState::new(),
            category: CategoryFilter::default(),
            sort: SortKey::default(),
            form: ProductForm::default(),
            checkout_user,
            notices: Vec::new(),
        }
    }

    // =========================================================================
    // Named refresh operations
    // =========================================================================

    /// Fetch the product list and replace the cache wholesale.
    ///
    /// On failure the cache is replaced with the empty list and a notice is
    /// queued; the caller's control flow continues either way, so the view
    /// always has a valid (possibly empty) collection to render.
    pub async fn refresh_products(&mut self) {
        match self.client.list_products().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "product list refreshed");
                self.state.replace_products(products);
            }
            Err(e) => {
                tracing::warn!(error = %e, "product list refresh failed");
                self.state.replace_products(Vec::new());
                self.notify("Failed to load products. Please try again later.");
            }
        }
    }

    /// Fetch the user list and replace the cache wholesale.
    ///
    /// Degrades to an empty list with a notice, like [`Self::refresh_products`].
    pub async fn refresh_users(&mut self) {
        match self.client.list_users().await {
            Ok(users) => {
                tracing::debug!(count = users.len(), "user list refreshed");
                self.state.replace_users(users);
            }
            Err(e) => {
                tracing::warn!(error = %e, "user list refresh failed");
                self.state.replace_users(Vec::new());
                self.notify("Failed to load users. Please try again later.");
            }
        }
    }

    // =========================================================================
    // Browsing
    // =========================================================================

    /// Refresh the product list and repaint the grid.
    pub async fn browse(&mut self) -> Redraw {
        self.refresh_products().await;
        Redraw::Products
    }

    /// Change the category filter, refreshing the list first.
    pub async fn set_category(&mut self, value: &str) -> Redraw {
        self.category = CategoryFilter::parse(value);
        self.refresh_products().await;
        Redraw::Products
    }

    /// Change the sort order, refreshing the list first.
    pub async fn set_sort(&mut self, value: &str) -> Redraw {
        self.sort = SortKey::parse(value);
        self.refresh_products().await;
        Redraw::Products
    }

    /// Flip between user and admin mode.
    ///
    /// Both lists are fetched fresh: the action set on every card differs by
    /// mode, so a toggle always forces a full refresh rather than a
    /// view-only repaint.
    pub async fn toggle_mode(&mut self) -> Redraw {
        let admin = self.state.toggle_admin_mode();
        tracing::info!(admin, "mode toggled");
        self.refresh_users().await;
        self.refresh_products().await;
        Redraw::All
    }

    // =========================================================================
    // View projections
    // =========================================================================

    /// Cards for the filtered, sorted product view under the current mode.
    #[must_use]
    pub fn product_cards(&self) -> Vec<ProductCard> {
        let admin = self.state.admin_mode();
        visible_products(self.state.products(), &self.category, self.sort)
            .into_iter()
            .map(|p| ProductCard::new(p, admin))
            .collect()
    }

    /// Rows for the admin user table.
    #[must_use]
    pub fn user_rows(&self) -> Vec<UserRow> {
        self.state.users().iter().map(UserRow::from).collect()
    }

    /// The rendered cart with its recomputed total.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::new(self.state.cart(), self.state.cart_total())
    }

    /// The admin product form's current contents.
    #[must_use]
    pub const fn form(&self) -> &ProductForm {
        &self.form
    }

    /// Whether the shop is in admin mode.
    #[must_use]
    pub const fn admin_mode(&self) -> bool {
        self.state.admin_mode()
    }

    /// Label of the active category filter.
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category.label()
    }

    /// Label of the active sort order.
    #[must_use]
    pub const fn sort_label(&self) -> &'static str {
        self.sort.label()
    }

    // =========================================================================
    // Notices
    // =========================================================================

    /// Queue a user-visible notice for the next repaint.
    fn notify(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
    }

    /// Drain the queued notices.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use kiosk_core::{Product, ProductId};
    use rust_decimal::Decimal;

    /// A client pointed at a closed port: every call fails fast with a
    /// network error, which is exactly what the degrade paths need.
    fn unreachable_shop() -> Shop {
        Shop::new(CatalogClient::new("http://127.0.0.1:9"), UserId::new(1))
    }

    fn product(id: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Decimal::from(10),
            category: "electronics".to_owned(),
            image: String::new(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_failed_refresh_degrades_to_empty_with_notice() {
        let mut shop = unreachable_shop();
        shop.state.replace_products(vec![product(1)]);

        shop.refresh_products().await;

        assert!(shop.product_cards().is_empty());
        let notices = shop.take_notices();
        assert_eq!(
            notices,
            vec!["Failed to load products. Please try again later."]
        );
    }

    #[tokio::test]
    async fn test_failed_user_refresh_degrades_to_empty() {
        let mut shop = unreachable_shop();

        shop.refresh_users().await;

        assert!(shop.user_rows().is_empty());
        assert_eq!(shop.take_notices().len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_swaps_card_actions_without_touching_cart() {
        let mut shop = unreachable_shop();
        shop.state.replace_products(vec![product(1)]);
        shop.state.add_to_cart(product(1));

        let redraw = shop.toggle_mode().await;

        assert_eq!(redraw, Redraw::All);
        assert!(shop.admin_mode());
        assert_eq!(shop.cart_view().lines.len(), 1);
        assert_eq!(shop.cart_view().lines[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_set_sort_orders_cards() {
        let mut shop = unreachable_shop();
        let redraw = shop.set_sort("price-desc").await;
        assert_eq!(redraw, Redraw::Products);
        assert_eq!(shop.sort_label(), "price-desc");
    }

    #[test]
    fn test_notices_drain_once() {
        let mut shop = unreachable_shop();
        shop.notify("one");
        shop.notify("two");

        assert_eq!(shop.take_notices(), vec!["one", "two"]);
        assert!(shop.take_notices().is_empty());
    }
}
