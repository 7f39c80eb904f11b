//! Product round-trips against the live catalog service.
//!
//! Run with: `cargo test -p kiosk-integration-tests -- --ignored`

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use kiosk_core::{ProductId, ProductInput};
use kiosk_integration_tests::test_client;

fn sample_input() -> ProductInput {
    ProductInput {
        title: "Kiosk Test Product".to_owned(),
        price: Decimal::new(1350, 2),
        category: "electronics".to_owned(),
        image: "https://i.pravatar.cc".to_owned(),
        description: "Created by the kiosk integration suite".to_owned(),
    }
}

#[tokio::test]
#[ignore = "requires the live catalog service"]
async fn list_products_returns_nonempty_catalog() {
    let client = test_client();

    let products = client.list_products().await.unwrap();

    assert!(!products.is_empty());
    let first = &products[0];
    assert!(!first.title.is_empty());
    assert!(first.price >= Decimal::ZERO);
    assert!(!first.category.is_empty());
}

#[tokio::test]
#[ignore = "requires the live catalog service"]
async fn create_product_echoes_fields_with_an_id() {
    let client = test_client();
    let input = sample_input();

    let created = client.create_product(&input).await.unwrap();

    assert!(created.id.as_i64() > 0);
    assert_eq!(created.title, input.title);
    assert_eq!(created.price, input.price);

    // Round-tripping through JSON keeps the service's wire shape: id and
    // price as numbers, everything else as sent.
    let value = serde_json::to_value(&created).unwrap();
    assert_eq!(value["id"].as_i64(), Some(created.id.as_i64()));
    assert_eq!(value["title"], "Kiosk Test Product");
    assert!((value["price"].as_f64().unwrap() - 13.50).abs() < 1e-9);
}

#[tokio::test]
#[ignore = "requires the live catalog service"]
async fn update_product_echoes_replacement() {
    let client = test_client();
    let mut input = sample_input();
    input.title = "Kiosk Test Product (updated)".to_owned();

    let updated = client.update_product(ProductId::new(1), &input).await.unwrap();

    assert_eq!(updated.id, ProductId::new(1));
    assert_eq!(updated.title, input.title);
}

#[tokio::test]
#[ignore = "requires the live catalog service"]
async fn delete_product_returns_receipt() {
    let client = test_client();

    // The service echoes the deleted record without actually removing it.
    let receipt = client.delete_product(ProductId::new(1)).await.unwrap();

    let deleted = receipt.expect("known id should echo a record");
    assert_eq!(deleted.id, ProductId::new(1));
}
