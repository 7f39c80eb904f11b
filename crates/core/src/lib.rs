//! Kiosk Core - Shared types library.
//!
//! This crate provides common types used across all Kiosk components:
//! - `catalog` - HTTP client for the remote catalog service
//! - `storefront` - Interactive terminal storefront
//! - `signin` - Standalone credential sign-in tool
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, catalog records, cart items, and price formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
