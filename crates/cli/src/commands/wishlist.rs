//! Wishlist commands.

use tracing::info;

use apnaswaad_core::ProductId;
use apnaswaad_storefront::error::Result;
use apnaswaad_storefront::state::AppState;

use super::product_line;

/// Show wishlisted products in the order they were added.
pub fn show(state: &AppState) {
    let products = state.wishlist_products();
    if products.is_empty() {
        info!("Your wishlist is empty");
        return;
    }
    let currency = state.config().currency;
    for product in products {
        info!("{}", product_line(product, currency));
    }
}

/// Add a product to the wishlist, or remove it if already there.
///
/// # Errors
///
/// Returns an error if the product is not in the catalog.
pub fn toggle(state: &mut AppState, id: ProductId) -> Result<()> {
    let name = state.product(id)?.name.clone();
    if state.store_mut().toggle_wishlist(id) {
        info!("Added {name} to your wishlist");
    } else {
        info!("Removed {name} from your wishlist");
    }
    Ok(())
}
