//! User list and deletion receipts against the live catalog service.
//!
//! Run with: `cargo test -p kiosk-integration-tests -- --ignored`

#![allow(clippy::unwrap_used)]

use kiosk_core::UserId;
use kiosk_integration_tests::test_client;

#[tokio::test]
#[ignore = "requires the live catalog service"]
async fn list_users_returns_accounts_with_emails() {
    let client = test_client();

    let users = client.list_users().await.unwrap();

    assert!(!users.is_empty());
    assert!(users.iter().all(|u| u.email.contains('@')));
    // The public service sends no role field; the default must kick in.
    assert_eq!(users[0].role_or_default(), "user");
}

#[tokio::test]
#[ignore = "requires the live catalog service"]
async fn delete_user_returns_receipt() {
    let client = test_client();

    // Deletions are faked server-side; the echoed record is the receipt.
    let receipt = client.delete_user(UserId::new(1)).await.unwrap();

    let deleted = receipt.expect("known id should echo a record");
    assert_eq!(deleted.id, UserId::new(1));
    assert!(!deleted.email.is_empty());
}
