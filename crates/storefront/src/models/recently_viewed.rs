//! Recently viewed products, most recent first.

use serde::Serialize;

use apnaswaad_core::ProductId;

/// Bounded most-recent-first list of unique product IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecentlyViewed {
    ids: Vec<ProductId>,
}

impl RecentlyViewed {
    /// Maximum number of entries kept.
    pub const LIMIT: usize = 4;

    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// IDs, most recent first.
    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Move `id` to the front, dropping the oldest entry past the limit.
    pub fn record(&mut self, id: ProductId) -> bool {
        if self.ids.first() == Some(&id) {
            return false;
        }
        self.ids.retain(|&existing| existing != id);
        self.ids.insert(0, id);
        self.ids.truncate(Self::LIMIT);
        true
    }
}

impl From<Vec<ProductId>> for RecentlyViewed {
    fn from(stored: Vec<ProductId>) -> Self {
        let mut ids: Vec<ProductId> = Vec::with_capacity(Self::LIMIT);
        for id in stored {
            if ids.len() == Self::LIMIT {
                break;
            }
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self { ids }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[i32]) -> Vec<ProductId> {
        raw.iter().copied().map(ProductId::new).collect()
    }

    #[test]
    fn test_keeps_four_most_recent() {
        let mut viewed = RecentlyViewed::new();
        for id in 1..=5 {
            viewed.record(ProductId::new(id));
        }
        assert_eq!(viewed.ids(), ids(&[5, 4, 3, 2]).as_slice());
    }

    #[test]
    fn test_revisit_moves_to_front_without_duplicating() {
        let mut viewed = RecentlyViewed::from(ids(&[3, 2, 1]));
        assert!(viewed.record(ProductId::new(1)));
        assert_eq!(viewed.ids(), ids(&[1, 3, 2]).as_slice());
        assert!(!viewed.record(ProductId::new(1)));
    }

    #[test]
    fn test_from_stored_ids_dedupes_and_truncates() {
        let viewed = RecentlyViewed::from(ids(&[7, 7, 6, 5, 6, 4, 3]));
        assert_eq!(viewed.ids(), ids(&[7, 6, 5, 4]).as_slice());
    }
}
