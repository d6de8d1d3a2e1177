//! Cart commands.

use tracing::info;

use apnaswaad_core::ProductId;
use apnaswaad_storefront::error::{AppError, Result};
use apnaswaad_storefront::state::AppState;

use super::product_line;

/// Show cart lines, totals and recommendations.
pub fn show(state: &AppState) {
    let cart = state.cart_view();

    if cart.items.is_empty() {
        info!("Your cart is empty");
    } else {
        for item in &cart.items {
            info!(
                "{:>3}  {:<20} {:>3} x {:>6} = {:>7}",
                item.id, item.name, item.quantity, item.price, item.line_price
            );
        }
        info!("Subtotal ({} items): {}", cart.item_count, cart.subtotal);
        info!("Shipping: {}", cart.shipping);
        info!("Tax: {}", cart.tax);
        info!("Total: {}", cart.total);
    }

    let recommended = state.catalog().recommended(state.store().cart());
    if !recommended.is_empty() {
        info!("You might also like:");
        let currency = state.config().currency;
        for product in recommended {
            info!("  {}", product_line(product, currency));
        }
    }
}

/// Add units of a product to the cart.
///
/// # Errors
///
/// Returns an error if the product is unknown or `quantity` is zero.
pub fn add(state: &mut AppState, id: ProductId, quantity: u32) -> Result<()> {
    if quantity == 0 {
        return Err(AppError::BadRequest(
            "quantity must be at least 1".to_string(),
        ));
    }
    state.add_to_cart(id, quantity)?;
    summary(state);
    Ok(())
}

/// Remove a product from the cart.
pub fn remove(state: &mut AppState, id: ProductId) {
    state.store_mut().remove_from_cart(id);
    summary(state);
}

/// Set a line's quantity; below one removes the line.
pub fn update(state: &mut AppState, id: ProductId, quantity: i64) {
    if state.store().line(id).is_none() {
        info!("Product {id} is not in your cart");
    }
    state.store_mut().update_quantity(id, quantity);
    summary(state);
}

/// Empty the cart.
pub fn clear(state: &mut AppState) {
    state.store_mut().clear_cart();
    summary(state);
}

/// Header-widget style one-liner.
fn summary(state: &AppState) {
    let currency = state.config().currency;
    info!(
        "Cart: {} items, {}",
        state.store().count(),
        state.store().total().display(currency)
    );
}
