//! Kiosk Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.
//!
//! # Architecture
//!
//! - [`state`] - Local caches, the cart, and the mode flag
//! - [`views`] - Pure derivation: filtering, sorting, display models
//! - [`shop`] - The coordinator: operations that mutate state, call the
//!   catalog service, and report what to redraw
//! - [`render`] - The terminal adapter that turns view models into text
//! - [`session`] - Command parsing and the interactive loop
//!
//! Only [`shop`] talks to the network; derivation and rendering are
//! synchronous and side-effect free.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod render;
pub mod session;
pub mod shop;
pub mod state;
pub mod views;
