//! Application state shared by storefront consumers.

use apnaswaad_core::{Product, ProductId};

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::storage::FileStorage;
use crate::store::CartStore;
use crate::views::CartView;

/// Everything a storefront view needs: configuration, the catalog and the
/// shopper's cart store.
///
/// Built once per process and passed to consumers explicitly.
#[derive(Debug)]
pub struct AppState {
    config: StorefrontConfig,
    catalog: Catalog,
    store: CartStore,
}

impl AppState {
    /// Create a new application state from its parts.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog, store: CartStore) -> Self {
        Self {
            config,
            catalog,
            store,
        }
    }

    /// Open file storage at the configured directory and load the store
    /// with the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage directory cannot be created.
    pub fn from_config(config: StorefrontConfig) -> Result<Self> {
        let storage = FileStorage::open(&config.storage_dir)?;
        tracing::info!(dir = %config.storage_dir.display(), "Storefront state loaded");
        Ok(Self::new(config, Catalog::builtin(), CartStore::load(storage)))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub const fn store(&self) -> &CartStore {
        &self.store
    }

    /// Get a mutable reference to the cart store.
    pub fn store_mut(&mut self) -> &mut CartStore {
        &mut self.store
    }

    /// Look up a catalog product.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ProductNotFound` for unknown IDs.
    pub fn product(&self, id: ProductId) -> Result<&Product> {
        self.catalog.find(id).ok_or(AppError::ProductNotFound(id))
    }

    /// Add `quantity` units of a catalog product to the cart.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ProductNotFound` for unknown IDs.
    pub fn add_to_cart(&mut self, id: ProductId, quantity: u32) -> Result<()> {
        let product = self
            .catalog
            .find(id)
            .ok_or(AppError::ProductNotFound(id))?;
        self.store.add_to_cart_quantity(product, quantity);
        Ok(())
    }

    /// Open a product's detail page: record the view and return the product.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ProductNotFound` for unknown IDs.
    pub fn view_product(&mut self, id: ProductId) -> Result<&Product> {
        let product = self
            .catalog
            .find(id)
            .ok_or(AppError::ProductNotFound(id))?;
        self.store.view_product(id);
        Ok(product)
    }

    /// Recently viewed products that are still in the catalog.
    #[must_use]
    pub fn recently_viewed_products(&self) -> Vec<&Product> {
        self.catalog.resolve(self.store.recently_viewed())
    }

    /// Wishlisted products that are still in the catalog.
    #[must_use]
    pub fn wishlist_products(&self) -> Vec<&Product> {
        self.catalog.resolve(self.store.wishlist())
    }

    /// Display data for the cart page.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::from_cart(self.store.cart(), self.config.currency)
    }
}
