//! The cart store: single owner of the shopper's persisted collections.
//!
//! Every mutation follows the same path: apply the change to the in-memory
//! model, and if anything changed, commit that collection to storage and
//! notify subscribers. Reads never touch storage; `count` and `total` are
//! computed from the cart lines on every call.
//!
//! Storage problems never reach callers. A missing, unreadable or corrupt
//! entry loads as an empty collection, and a failed write is logged while the
//! in-memory state stays authoritative.

mod events;

pub use events::{StoreEvent, SubscriptionId};

use events::Subscribers;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use apnaswaad_core::{Price, Product, ProductId};

use crate::models::{Cart, CartLine, RecentlyViewed, Wishlist};
use crate::storage::{MemoryStorage, Storage, keys};

/// Cart, wishlist and recently-viewed state backed by local storage.
pub struct CartStore {
    storage: Box<dyn Storage>,
    cart: Cart,
    wishlist: Wishlist,
    recently_viewed: RecentlyViewed,
    subscribers: Subscribers,
}

impl CartStore {
    /// Load all three collections from `storage`.
    ///
    /// Each collection is loaded independently; any that cannot be read
    /// starts empty.
    pub fn load(storage: impl Storage + 'static) -> Self {
        let cart = load_collection::<Vec<CartLine>>(&storage, keys::CART)
            .map(Cart::from)
            .unwrap_or_default();
        let wishlist = load_collection::<Vec<ProductId>>(&storage, keys::WISHLIST)
            .map(Wishlist::from)
            .unwrap_or_default();
        let recently_viewed = load_collection::<Vec<ProductId>>(&storage, keys::RECENTLY_VIEWED)
            .map(RecentlyViewed::from)
            .unwrap_or_default();

        tracing::debug!(
            cart_lines = cart.lines().len(),
            wishlist = wishlist.len(),
            recently_viewed = recently_viewed.ids().len(),
            "Cart store loaded"
        );

        Self {
            storage: Box::new(storage),
            cart,
            wishlist,
            recently_viewed,
            subscribers: Subscribers::default(),
        }
    }

    /// Store backed by fresh in-memory storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::load(MemoryStorage::new())
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add one unit of `product`.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart(&mut self, product: &Product) {
        self.add_to_cart_quantity(product, 1);
    }

    /// Add `quantity` units of `product` with a single commit.
    ///
    /// Same result as calling [`add_to_cart`](Self::add_to_cart) `quantity`
    /// times.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart_quantity(&mut self, product: &Product, quantity: u32) {
        if self.cart.add(product, quantity) {
            self.commit(StoreEvent::CartChanged);
        }
    }

    /// Remove the line for `id`, if any.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, id: ProductId) {
        if self.cart.remove(id) {
            self.commit(StoreEvent::CartChanged);
        }
    }

    /// Set the quantity of the line for `id`; below one removes the line.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        if self.cart.set_quantity(id, quantity) {
            self.commit(StoreEvent::CartChanged);
        }
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) {
        if self.cart.clear() {
            self.commit(StoreEvent::CartChanged);
        }
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.cart.line(id)
    }

    /// Total number of units in the cart.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.cart.count()
    }

    /// Total price of the cart.
    #[must_use]
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Add `id` to the wishlist, or remove it if already there.
    #[instrument(skip(self))]
    pub fn toggle_wishlist(&mut self, id: ProductId) -> bool {
        let wishlisted = self.wishlist.toggle(id);
        self.commit(StoreEvent::WishlistChanged);
        wishlisted
    }

    #[must_use]
    pub fn wishlist(&self) -> &[ProductId] {
        self.wishlist.ids()
    }

    #[must_use]
    pub fn is_wishlisted(&self, id: ProductId) -> bool {
        self.wishlist.contains(id)
    }

    // =========================================================================
    // Recently viewed
    // =========================================================================

    /// Record a product view.
    #[instrument(skip(self))]
    pub fn view_product(&mut self, id: ProductId) {
        if self.recently_viewed.record(id) {
            self.commit(StoreEvent::RecentlyViewedChanged);
        }
    }

    /// Recently viewed IDs, most recent first.
    #[must_use]
    pub fn recently_viewed(&self) -> &[ProductId] {
        self.recently_viewed.ids()
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Call `listener` after every state-changing mutation, whether or not
    /// the write to storage succeeds.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    /// Stop calling the listener registered as `id`.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Persist the collection named by `event`, then notify subscribers.
    ///
    /// Subscribers are notified even when the write fails, because the
    /// in-memory state they render has already changed.
    fn commit(&mut self, event: StoreEvent) {
        let key = event.storage_key();
        let payload = match event {
            StoreEvent::CartChanged => to_json(&self.cart),
            StoreEvent::WishlistChanged => to_json(&self.wishlist),
            StoreEvent::RecentlyViewedChanged => to_json(&self.recently_viewed),
        };

        match payload {
            Ok(json) => match self.storage.set_item(key, &json) {
                Ok(()) => tracing::debug!(key, bytes = json.len(), "Committed collection"),
                Err(e) => tracing::error!(key, error = %e, "Failed to persist collection"),
            },
            Err(e) => tracing::error!(key, error = %e, "Failed to serialize collection"),
        }

        self.subscribers.notify(&event);
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("wishlist", &self.wishlist)
            .field("recently_viewed", &self.recently_viewed)
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}

fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Read and parse one collection, logging why it falls back to empty.
fn load_collection<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Storage unavailable, starting with empty collection");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Stored collection is corrupt, starting empty");
            None
        }
    }
}
