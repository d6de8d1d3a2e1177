//! Apna Swaad Storefront library.
//!
//! Client-side shop state: the product catalog, and the cart, wishlist and
//! recently-viewed collections kept in local key/value storage.
//!
//! # Architecture
//!
//! - [`store::CartStore`] is the single owner of the three persisted
//!   collections; every mutation goes through it and is committed to a
//!   [`storage::Storage`] backend before subscribers are notified.
//! - [`catalog::Catalog`] holds read-only product data and the browsing
//!   queries (filter, sort, related, recommended).
//! - [`state::AppState`] wires configuration, catalog and store together for
//!   consumers such as the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
pub mod store;
pub mod views;
