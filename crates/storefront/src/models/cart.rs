//! Shopping cart lines and derived totals.

use serde::{Deserialize, Serialize};

use apnaswaad_core::{Price, Product, ProductId};

/// One product in the cart with its quantity.
///
/// The full product is snapshotted when the line is created, so later
/// catalog changes do not alter what is already in the cart. Persisted as a
/// flat record: `{ id, name, price, image, description, flavor, category, quantity }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Product ID of this line.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Ordered cart lines, at most one per product.
///
/// Lines keep the position at which they were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// All lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Line for `id`, if present.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Whether the cart holds a line for `id`.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.line(id).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of quantity times unit price over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Add `quantity` units of `product`.
    ///
    /// An existing line is incremented in place; otherwise a new line with a
    /// snapshot of `product` is appended. Adding zero units changes nothing.
    pub fn add(&mut self, product: &Product, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.id() == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            });
        }
        true
    }

    /// Delete the line for `id`. Absent IDs are ignored.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != id);
        self.lines.len() != before
    }

    /// Set the quantity of an existing line.
    ///
    /// Quantities below one remove the line. An absent ID is never created.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity < 1 {
            return self.remove(id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.lines.iter_mut().find(|line| line.id() == id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) -> bool {
        let changed = !self.lines.is_empty();
        self.lines.clear();
        changed
    }
}

impl From<Vec<CartLine>> for Cart {
    /// Rebuild a cart from stored lines.
    ///
    /// Repeated IDs are merged into the first occurrence and zero-quantity
    /// lines are dropped, so hand-edited or stale data still satisfies the
    /// one-line-per-product rule.
    fn from(stored: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in stored {
            cart.add(&line.product, line.quantity);
        }
        cart
    }
}
