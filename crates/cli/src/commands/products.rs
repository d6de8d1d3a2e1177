//! Catalog browsing commands.

use tracing::info;

use apnaswaad_core::{Category, Price, ProductId};
use apnaswaad_storefront::catalog::{ProductQuery, SortOrder};
use apnaswaad_storefront::error::Result;
use apnaswaad_storefront::state::AppState;

use super::product_line;

/// List products matching the given filters.
pub fn list(
    state: &AppState,
    category: Option<Category>,
    search: Option<String>,
    min_price: u64,
    max_price: u64,
    sort: SortOrder,
) {
    let query = ProductQuery {
        category,
        search,
        min_price: Price::new(min_price),
        max_price: Price::new(max_price),
        sort,
    };

    let products = state.catalog().query(&query);
    let currency = state.config().currency;
    info!("{} products found", products.len());
    for product in products {
        let marker = if state.store().is_wishlisted(product.id) {
            "♥"
        } else {
            " "
        };
        info!("{marker} {}", product_line(product, currency));
    }
}

/// Show a product's detail page and record the view.
///
/// # Errors
///
/// Returns an error if the product is not in the catalog.
pub fn show(state: &mut AppState, id: ProductId) -> Result<()> {
    let currency = state.config().currency;
    let product = state.view_product(id)?.clone();

    info!("{} ({})", product.name, product.category);
    info!("  Price:   {}", product.price.display(currency));
    info!("  Flavor:  {}", product.flavor);
    info!("  {}", product.description);
    if let Some(line) = state.store().line(id) {
        info!("  In cart: {}", line.quantity);
    }
    if state.store().is_wishlisted(id) {
        info!("  On your wishlist");
    }

    let related = state.catalog().related(&product);
    if !related.is_empty() {
        info!("Related:");
        for product in related {
            info!("  {}", product_line(product, currency));
        }
    }
    Ok(())
}

/// List catalog categories.
pub fn categories(state: &AppState) {
    for category in state.catalog().categories() {
        let count = state
            .catalog()
            .products()
            .iter()
            .filter(|p| p.category == category)
            .count();
        info!("{category:<12} {count}");
    }
}

/// Show recently viewed products, most recent first.
pub fn recent(state: &AppState) {
    let products = state.recently_viewed_products();
    if products.is_empty() {
        info!("No recently viewed products");
        return;
    }
    let currency = state.config().currency;
    for product in products {
        info!("{}", product_line(product, currency));
    }
}
