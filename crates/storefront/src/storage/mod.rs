//! Local key/value storage backends.
//!
//! The storefront persists each collection under its own key as a JSON
//! string, the same way a browser keeps entries in local storage. Backends
//! only move strings around; serialization belongs to the store.
//!
//! # Backends
//!
//! - [`MemoryStorage`] - in-process map, shared between clones
//! - [`FileStorage`] - one `<key>.json` file per key in a directory

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the underlying medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend cannot be used right now.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The key cannot be mapped onto the backend.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// A string-valued key/value store.
pub trait Storage {
    /// Read the value stored under `key`, or `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Storage keys for the persisted collections.
pub mod keys {
    /// Cart lines with their product snapshots.
    pub const CART: &str = "apnaswaad_cart";

    /// Wishlisted product IDs.
    pub const WISHLIST: &str = "apnaswaad_wishlist";

    /// Recently viewed product IDs, most recent first.
    pub const RECENTLY_VIEWED: &str = "apnaswaad_recently_viewed";
}
