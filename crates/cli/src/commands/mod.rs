//! Subcommand implementations.
//!
//! Each command reads from or writes through [`AppState`](apnaswaad_storefront::state::AppState)
//! and reports results through `tracing`.

pub mod cart;
pub mod products;
pub mod wishlist;

use apnaswaad_core::{CurrencyCode, Product};

/// One-line product summary used by every listing.
fn product_line(product: &Product, currency: CurrencyCode) -> String {
    format!(
        "{:>3}  {:<20} {:>6}  {}",
        product.id,
        product.name,
        product.price.display(currency),
        product.category
    )
}
