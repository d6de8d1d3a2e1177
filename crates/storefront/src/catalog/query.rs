//! Product listing filters and sort orders.

use std::cmp::Ordering;

use apnaswaad_core::{Category, Price, Product};

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    /// Alphabetical, ignoring case.
    Name,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "featured" => Ok(Self::Featured),
            "price-low" => Ok(Self::PriceLowToHigh),
            "price-high" => Ok(Self::PriceHighToLow),
            "name" => Ok(Self::Name),
            _ => Err(format!(
                "invalid sort order: {s} (expected featured, price-low, price-high or name)"
            )),
        }
    }
}

/// Filters and ordering for a product listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: Option<Category>,
    pub search: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Price,
    /// Inclusive upper price bound.
    pub max_price: Price,
    pub sort: SortOrder,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            min_price: Price::ZERO,
            max_price: Self::DEFAULT_MAX_PRICE,
            sort: SortOrder::Featured,
        }
    }
}

impl ProductQuery {
    /// Upper bound of the price slider.
    pub const DEFAULT_MAX_PRICE: Price = Price::new(500);

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    #[must_use]
    pub fn price_range(mut self, min: Price, max: Price) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Whether `product` passes every filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if self.category.is_some_and(|category| product.category != category) {
            return false;
        }
        if let Some(needle) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = needle.to_lowercase();
            let hit = product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        (self.min_price..=self.max_price).contains(&product.price)
    }

    /// Filter and sort `products`. Sorting is stable, so ties keep catalog order.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut result: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        match self.sort {
            SortOrder::Featured => {}
            SortOrder::PriceLowToHigh => result.sort_by_key(|p| p.price),
            SortOrder::PriceHighToLow => result.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::Name => result.sort_by(|a, b| compare_names(&a.name, &b.name)),
        }
        result
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
