//! Integration tests for Apna Swaad.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p apnaswaad-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Store state surviving reloads from file storage
//! - `storefront_flows` - Catalog, detail page and cart page working together
//!
//! Tests run against real [`FileStorage`] in a temporary directory, so
//! nothing outside the test's own directory is touched.

use std::path::Path;

use tempfile::TempDir;

use apnaswaad_storefront::catalog::Catalog;
use apnaswaad_storefront::config::StorefrontConfig;
use apnaswaad_storefront::state::AppState;
use apnaswaad_storefront::storage::FileStorage;
use apnaswaad_storefront::store::CartStore;

/// A storage directory that lives as long as the test.
pub struct TestShop {
    dir: TempDir,
}

impl TestShop {
    /// Create an empty shop directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Directory holding the persisted collections.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Load a fresh store over this directory, as a new process would.
    ///
    /// # Panics
    ///
    /// Panics if the storage directory cannot be opened.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn open_store(&self) -> CartStore {
        CartStore::load(FileStorage::open(self.path()).expect("Failed to open storage"))
    }

    /// Build full application state over this directory.
    ///
    /// # Panics
    ///
    /// Panics if the storage directory cannot be opened.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn open_state(&self) -> AppState {
        let config = StorefrontConfig {
            storage_dir: self.path().to_path_buf(),
            ..StorefrontConfig::default()
        };
        AppState::from_config(config).expect("Failed to build app state")
    }

    /// Raw JSON persisted under `key`, if any.
    #[must_use]
    pub fn read_raw(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path().join(format!("{key}.json"))).ok()
    }

    /// Overwrite the raw JSON persisted under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[allow(clippy::expect_used)]
    pub fn write_raw(&self, key: &str, value: &str) {
        std::fs::write(self.path().join(format!("{key}.json")), value)
            .expect("Failed to write raw entry");
    }
}

impl Default for TestShop {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in catalog.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::builtin()
}
