//! Apna Swaad Core - Shared types library.
//!
//! This crate provides common types used across all Apna Swaad components:
//! - `storefront` - Cart, wishlist and catalog state for the shop
//! - `cli` - Command-line client for browsing and managing the cart
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and catalog products

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
