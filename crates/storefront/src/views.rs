//! Pure derivation layer: filtering, sorting, and display models.
//!
//! Everything here is a deterministic function of its inputs. Controllers
//! build these view models from the [`StoreState`](crate::state::StoreState)
//! and hand them to the rendering adapter; no function in this module
//! performs I/O or mutates state.

use rust_decimal::Decimal;

use kiosk_core::{CartItem, Product, ProductId, User, UserId, format_usd};

/// Description length shown on a product card before the ellipsis.
const BLURB_CHARS: usize = 60;

// =============================================================================
// Filter and sort
// =============================================================================

/// Category filter applied to the product view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// The sentinel "all": keep every product.
    #[default]
    All,
    /// Keep products whose category matches case-insensitively.
    Only(String),
}

impl CategoryFilter {
    /// Parse a filter from the user's input; "all" (any case) is the sentinel.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }

    fn keeps(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => {
                product.category.to_lowercase() == category.to_lowercase()
            }
        }
    }

    /// The label rendered next to the product grid.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(category) => category,
        }
    }
}

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Preserve fetch order. The default, and the fallback for any
    /// unrecognized key.
    #[default]
    Arrival,
    /// Ascending numeric price.
    PriceAsc,
    /// Descending numeric price.
    PriceDesc,
    /// Ascending case-folded title.
    Title,
}

impl SortKey {
    /// Parse a sort key; unknown values fall back to fetch order.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "name" => Self::Title,
            _ => Self::Arrival,
        }
    }

    /// The label rendered next to the product grid.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Arrival => "default",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Title => "name",
        }
    }
}

/// Filter then sort the cached products into the presented view.
///
/// The result is a subsequence of `products` under `Arrival`, and ties under
/// every other key keep fetch order (`sort_by` is stable).
#[must_use]
pub fn visible_products<'a>(
    products: &'a [Product],
    category: &CategoryFilter,
    sort: SortKey,
) -> Vec<&'a Product> {
    let mut view: Vec<&Product> = products.iter().filter(|p| category.keeps(p)).collect();

    match sort {
        SortKey::Arrival => {}
        SortKey::PriceAsc => view.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => view.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Title => {
            view.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
    }

    view
}

// =============================================================================
// Display models
// =============================================================================

/// Action set attached to a product card, chosen by the mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardActions {
    /// User mode: add the product to the cart.
    Purchase,
    /// Admin mode: edit or delete the product.
    Manage,
}

/// Product display data for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    /// First characters of the description, always ellipsis-terminated.
    pub blurb: String,
    pub image: String,
    /// Price formatted to exactly two decimal places.
    pub price: String,
    pub actions: CardActions,
}

impl ProductCard {
    /// Build a card for a product under the given mode.
    #[must_use]
    pub fn new(product: &Product, admin_mode: bool) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            blurb: blurb(&product.description),
            image: product.image.clone(),
            price: format_usd(product.price),
            actions: if admin_mode {
                CardActions::Manage
            } else {
                CardActions::Purchase
            },
        }
    }
}

/// Truncate a description for card display.
///
/// Counts characters rather than bytes so multibyte text never splits a
/// code point; the ellipsis is always appended, matching the card layout.
fn blurb(description: &str) -> String {
    let mut out: String = description.chars().take(BLURB_CHARS).collect();
    out.push_str("...");
    out
}

/// User display data for one row of the admin user table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: UserId,
    pub email: String,
    /// Role label, defaulting to "user" when the service sent none.
    pub role: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role_or_default().to_owned(),
        }
    }
}

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: ProductId,
    pub title: String,
    pub quantity: u32,
    /// Unit price times quantity, two decimal places.
    pub line_total: String,
}

impl From<&CartItem> for CartLineView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.product.id,
            title: item.product.title.clone(),
            quantity: item.quantity,
            line_total: format_usd(item.line_total()),
        }
    }
}

/// Cart display data: lines plus the recomputed total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Sum over lines, two decimal places. Recomputed per render.
    pub total: String,
}

impl CartView {
    /// Build the cart view from the current lines and total.
    #[must_use]
    pub fn new(cart: &[CartItem], total: Decimal) -> Self {
        Self {
            lines: cart.iter().map(CartLineView::from).collect(),
            total: format_usd(total),
        }
    }
}
