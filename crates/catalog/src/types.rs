//! Request and response bodies for the catalog service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kiosk_core::{CartId, CartItem, ProductId, UserId};

/// Order submitted at checkout.
///
/// The service keys this body in camelCase (`userId`, `productId`).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartOrder {
    /// Account the order is placed under.
    pub user_id: UserId,
    /// When the order was placed.
    pub date: DateTime<Utc>,
    /// Ordered lines, one per distinct product.
    pub products: Vec<CartLine>,
}

/// One ordered line: a product reference and a quantity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product being ordered.
    pub product_id: ProductId,
    /// Units ordered.
    pub quantity: u32,
}

impl From<&CartItem> for CartLine {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product.id,
            quantity: item.quantity,
        }
    }
}

/// The service's acknowledgement of a created cart.
///
/// The response echoes the whole order; only the assigned id is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct CartReceipt {
    /// Identifier assigned to the new cart.
    pub id: CartId,
}

/// Token issued after a successful sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthToken {
    /// Opaque bearer token.
    pub token: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use kiosk_core::Product;
    use rust_decimal::Decimal;

    #[test]
    fn test_cart_order_wire_shape() {
        let order = CartOrder {
            user_id: UserId::new(1),
            date: "2024-05-01T12:00:00Z".parse().unwrap(),
            products: vec![CartLine {
                product_id: ProductId::new(5),
                quantity: 2,
            }],
        };

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["userId"], 1);
        assert_eq!(value["products"][0]["productId"], 5);
        assert_eq!(value["products"][0]["quantity"], 2);
        assert!(value["date"].as_str().unwrap().starts_with("2024-05-01T12:00:00"));
    }

    #[test]
    fn test_cart_line_from_item() {
        let item = CartItem {
            product: Product {
                id: ProductId::new(9),
                title: "Gold Chain".to_owned(),
                price: Decimal::new(69555, 2),
                category: "jewelery".to_owned(),
                image: String::new(),
                description: String::new(),
            },
            quantity: 3,
        };

        let line = CartLine::from(&item);
        assert_eq!(line.product_id, ProductId::new(9));
        assert_eq!(line.quantity, 3);
    }

    #[test]
    fn test_receipt_ignores_echoed_order() {
        let json = r#"{"id": 21, "userId": 1, "date": "2024-05-01T12:00:00Z", "products": []}"#;
        let receipt: CartReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.id, CartId::new(21));
    }

    #[test]
    fn test_auth_token_deserialize() {
        let token: AuthToken = serde_json::from_str(r#"{"token": "eyJhbGci"}"#).unwrap();
        assert_eq!(token.token, "eyJhbGci");
    }
}
