//! Cart creation and sign-in against the live catalog service.
//!
//! Run with: `cargo test -p kiosk-integration-tests -- --ignored`

#![allow(clippy::unwrap_used)]

use chrono::Utc;

use kiosk_catalog::types::{CartLine, CartOrder};
use kiosk_catalog::CatalogError;
use kiosk_core::{ProductId, UserId};
use kiosk_integration_tests::{test_client, test_credentials};

#[tokio::test]
#[ignore = "requires the live catalog service"]
async fn create_cart_assigns_an_id() {
    let client = test_client();
    let order = CartOrder {
        user_id: UserId::new(1),
        date: Utc::now(),
        products: vec![
            CartLine {
                product_id: ProductId::new(1),
                quantity: 2,
            },
            CartLine {
                product_id: ProductId::new(2),
                quantity: 1,
            },
        ],
    };

    let receipt = client.create_cart(&order).await.unwrap();

    assert!(receipt.id.as_i64() > 0);
}

#[tokio::test]
#[ignore = "requires the live catalog service"]
async fn login_with_demo_credentials_yields_token() {
    let client = test_client();
    let (username, password) = test_credentials();

    let auth = client.login(&username, &password).await.unwrap();

    assert!(!auth.token.is_empty());
}

#[tokio::test]
#[ignore = "requires the live catalog service"]
async fn login_with_bad_credentials_is_a_status_error() {
    let client = test_client();

    let result = client.login("nobody", "wrong").await;

    let err = result.expect_err("bad credentials must be rejected");
    assert!(matches!(err, CatalogError::Status { .. }));
    // The service explains itself; the sign-in tool shows this verbatim.
    assert!(err.server_message().is_some());
}
