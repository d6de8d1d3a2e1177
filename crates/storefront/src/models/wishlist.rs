//! Wishlisted product IDs.

use serde::Serialize;

use apnaswaad_core::ProductId;

/// Set of product IDs, kept in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Wishlist {
    ids: Vec<ProductId>,
}

impl Wishlist {
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// IDs in the order they were added.
    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Remove `id` if present, otherwise append it.
    ///
    /// Returns whether `id` is wishlisted afterwards.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.contains(id) {
            self.ids.retain(|&existing| existing != id);
            false
        } else {
            self.ids.push(id);
            true
        }
    }
}

impl From<Vec<ProductId>> for Wishlist {
    fn from(stored: Vec<ProductId>) -> Self {
        let mut wishlist = Self::new();
        for id in stored {
            if !wishlist.contains(id) {
                wishlist.ids.push(id);
            }
        }
        wishlist
    }
}
