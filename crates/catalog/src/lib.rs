//! Kiosk Catalog - HTTP client for the remote catalog service.
//!
//! The storefront has no backend of its own; products, users, orders, and
//! sign-in all live behind a third-party REST service. This crate wraps that
//! service in typed async methods with a uniform error type.
//!
//! # Architecture
//!
//! - One method per remote operation, one HTTP call per method
//! - No retries, timeouts, or caching; callers decide how failures degrade
//! - Bodies are read as text first so parse failures can be logged with a
//!   snippet of what the service actually sent
//!
//! # Example
//!
//! ```rust,ignore
//! use kiosk_catalog::CatalogClient;
//!
//! let client = CatalogClient::new(kiosk_catalog::DEFAULT_API_BASE);
//! let products = client.list_products().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
mod error;
pub mod types;

pub use client::{CatalogClient, DEFAULT_API_BASE};
pub use error::CatalogError;
pub use types::{AuthToken, CartLine, CartOrder, CartReceipt};
