//! Domain models for the shopper's collections.
//!
//! Each model enforces its own invariants on every mutation, so the store
//! only decides when to commit and notify. Mutators return `true` when the
//! collection actually changed.

pub mod cart;
pub mod recently_viewed;
pub mod wishlist;

pub use cart::{Cart, CartLine};
pub use recently_viewed::RecentlyViewed;
pub use wishlist::Wishlist;
