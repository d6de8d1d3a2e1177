//! Display data for the cart page and header widget.

use apnaswaad_core::{CurrencyCode, Price, ProductId};

use crate::models::{Cart, CartLine};

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub flavor: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image: String,
}

/// Cart display data.
///
/// Shipping is free and no tax is charged, so `total` always equals
/// `subtotal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub shipping: String,
    pub tax: String,
    pub total: String,
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty(currency: CurrencyCode) -> Self {
        Self::from_cart(&Cart::new(), currency)
    }

    /// Build the view for `cart`.
    #[must_use]
    pub fn from_cart(cart: &Cart, currency: CurrencyCode) -> Self {
        let subtotal = cart.total().display(currency);
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| CartItemView::from_line(line, currency))
                .collect(),
            total: subtotal.clone(),
            subtotal,
            shipping: "FREE".to_string(),
            tax: Price::ZERO.display(currency),
            item_count: cart.count(),
        }
    }
}

impl CartItemView {
    fn from_line(line: &CartLine, currency: CurrencyCode) -> Self {
        Self {
            id: line.id(),
            name: line.product.name.clone(),
            flavor: line.product.flavor.clone(),
            quantity: line.quantity,
            price: line.product.price.display(currency),
            line_price: line.line_total().display(currency),
            image: line.product.image.clone(),
        }
    }
}
