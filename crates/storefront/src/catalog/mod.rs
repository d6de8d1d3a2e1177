//! Read-only product catalog and browsing queries.
//!
//! The catalog is reference data: the store snapshots products into cart
//! lines but never reads the catalog back, so replacing a product here does
//! not change what shoppers already have in their carts.

mod data;
mod query;

pub use data::builtin_products;
pub use query::{ProductQuery, SortOrder};

use apnaswaad_core::{Category, Product, ProductId};

use crate::models::Cart;

/// Products shown in "related" and "recommended" rows.
const SUGGESTION_LIMIT: usize = 4;

/// Ordered list of products with unique IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog. Later products with a repeated ID are ignored.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let mut unique: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if unique.iter().any(|p| p.id == product.id) {
                tracing::warn!(product_id = %product.id, "Duplicate product ID in catalog, skipping");
                continue;
            }
            unique.push(product);
        }
        Self { products: unique }
    }

    /// The shop's built-in product list.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_products())
    }

    /// All products in featured order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct categories in the order they first appear.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }
        categories
    }

    /// Products matching `query`.
    #[must_use]
    pub fn query(&self, query: &ProductQuery) -> Vec<&Product> {
        query.apply(&self.products)
    }

    /// Other products in the same category as `product`.
    #[must_use]
    pub fn related(&self, product: &Product) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(SUGGESTION_LIMIT)
            .collect()
    }

    /// Products not yet in `cart`.
    #[must_use]
    pub fn recommended(&self, cart: &Cart) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| !cart.contains(p.id))
            .take(SUGGESTION_LIMIT)
            .collect()
    }

    /// Look up `ids` in order, skipping IDs that are not in the catalog.
    #[must_use]
    pub fn resolve(&self, ids: &[ProductId]) -> Vec<&Product> {
        ids.iter().filter_map(|&id| self.find(id)).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use apnaswaad_core::Price;

    use super::*;

    fn ids(products: &[&Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.products().len(), 20);

        let gulab_jamun = catalog.find(ProductId::new(1)).unwrap();
        assert_eq!(gulab_jamun.name, "Gulab Jamun");
        assert_eq!(gulab_jamun.price, Price::new(150));
        assert!(catalog.find(ProductId::new(21)).is_none());
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        assert_eq!(
            Catalog::builtin().categories(),
            vec![
                Category::Traditional,
                Category::Festive,
                Category::Premium,
                Category::Regional,
                Category::Specialty
            ]
        );
    }

    #[test]
    fn test_related_shares_category_and_excludes_self() {
        let catalog = Catalog::builtin();
        let barfi = catalog.find(ProductId::new(4)).unwrap();
        let related = catalog.related(barfi);
        assert_eq!(ids(&related), vec![5, 9, 14, 15]);
        assert!(related.iter().all(|p| p.category == Category::Premium));
    }

    #[test]
    fn test_recommended_skips_cart_items() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        cart.add(catalog.find(ProductId::new(2)).unwrap(), 1);
        cart.add(catalog.find(ProductId::new(3)).unwrap(), 1);
        assert_eq!(ids(&catalog.recommended(&cart)), vec![1, 4, 5, 6]);
    }

    #[test]
    fn test_resolve_skips_unknown_ids() {
        let catalog = Catalog::builtin();
        let resolved = catalog.resolve(&[ProductId::new(5), ProductId::new(99), ProductId::new(1)]);
        assert_eq!(ids(&resolved), vec![5, 1]);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut products = builtin_products();
        let mut clone = products.first().unwrap().clone();
        clone.name = "Impostor".to_string();
        products.push(clone);
        let catalog = Catalog::new(products);
        assert_eq!(catalog.products().len(), 20);
        assert_eq!(catalog.find(ProductId::new(1)).unwrap().name, "Gulab Jamun");
    }

    #[test]
    fn test_builtin_search_matches_description() {
        let catalog = Catalog::builtin();
        let saffron = catalog.query(&ProductQuery::default().search("saffron"));
        assert_eq!(ids(&saffron), vec![9, 10, 14]);
    }
}
