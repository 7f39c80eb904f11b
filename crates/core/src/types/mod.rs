//! Core types for Kiosk.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;
pub mod user;

pub use cart::CartItem;
pub use id::*;
pub use price::format_usd;
pub use product::{Product, ProductInput};
pub use user::User;
