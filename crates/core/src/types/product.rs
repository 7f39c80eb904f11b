//! Catalog product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product as returned by the catalog service.
///
/// Prices are decimal to keep cart arithmetic exact; on the wire they are
/// plain JSON numbers. Fields the service sends but the storefront never
/// reads (ratings and the like) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-assigned identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price in the service's currency (USD).
    pub price: Decimal,
    /// Free-form category label, matched case-insensitively when filtering.
    pub category: String,
    /// URL of the product image.
    pub image: String,
    /// Long-form description; views truncate it for card display.
    pub description: String,
}

/// The writable fields of a product.
///
/// Request body for create and update calls, and the draft type behind the
/// admin product form. A create submits this without an id; an update pairs
/// it with the id of the product being replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Decimal,
    /// Category label.
    pub category: String,
    /// URL of the product image.
    pub image: String,
    /// Long-form description.
    pub description: String,
}

impl From<&Product> for ProductInput {
    /// Copy a product's writable fields, e.g. to seed an edit form.
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price,
            category: product.category.clone(),
            image: product.image.clone(),
            description: product.description.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_product() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://example.com/1.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.title, "Fjallraven Backpack");
        assert_eq!(product.price.to_string(), "109.95");
        assert_eq!(product.category, "men's clothing");
    }

    #[test]
    fn test_deserialize_integer_price() {
        let json = r#"{
            "id": 2,
            "title": "Plain Shirt",
            "price": 15,
            "description": "",
            "category": "men's clothing",
            "image": ""
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Decimal::from(15));
    }

    #[test]
    fn test_serialize_input_price_as_number() {
        let input = ProductInput {
            title: "Lamp".to_owned(),
            price: Decimal::new(2499, 2),
            category: "home".to_owned(),
            image: "https://example.com/lamp.jpg".to_owned(),
            description: "A lamp".to_owned(),
        };

        let value = serde_json::to_value(&input).unwrap();
        let price = value["price"].as_f64().unwrap();
        assert!((price - 24.99).abs() < 1e-9);
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_input_from_product() {
        let product = Product {
            id: ProductId::new(7),
            title: "Lamp".to_owned(),
            price: Decimal::new(2499, 2),
            category: "home".to_owned(),
            image: "https://example.com/lamp.jpg".to_owned(),
            description: "A lamp".to_owned(),
        };

        let input = ProductInput::from(&product);
        assert_eq!(input.title, product.title);
        assert_eq!(input.price, product.price);
        assert_eq!(input.category, product.category);
    }
}
