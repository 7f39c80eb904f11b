//! Integration tests for Kiosk.
//!
//! These run against the real catalog service, so they are all `#[ignore]`d
//! by default; unit tests elsewhere in the workspace cover everything that
//! does not need a network.
//!
//! # Running Tests
//!
//! ```bash
//! # Against the public service
//! cargo test -p kiosk-integration-tests -- --ignored
//!
//! # Against another deployment
//! KIOSK_API_BASE=http://localhost:8080 cargo test -p kiosk-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `catalog_products` - Product list and CRUD round-trips
//! - `catalog_users` - User list and deletion receipts
//! - `catalog_checkout` - Cart creation and credential sign-in
//!
//! The public service fakes its mutations: a created product is echoed with
//! an id but never appears in later lists. Tests therefore assert on the
//! echoed responses, not on follow-up reads.

#![cfg_attr(not(test), forbid(unsafe_code))]

use kiosk_catalog::{CatalogClient, DEFAULT_API_BASE};

/// Client for the service under test (`KIOSK_API_BASE` overrides the
/// public endpoint).
#[must_use]
pub fn test_client() -> CatalogClient {
    let base =
        std::env::var("KIOSK_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_owned());
    CatalogClient::new(&base)
}

/// Demo credentials accepted by the public service, overridable for other
/// deployments.
#[must_use]
pub fn test_credentials() -> (String, String) {
    let username =
        std::env::var("KIOSK_TEST_USERNAME").unwrap_or_else(|_| "mor_2314".to_owned());
    let password =
        std::env::var("KIOSK_TEST_PASSWORD").unwrap_or_else(|_| "83r5^_".to_owned());
    (username, password)
}
