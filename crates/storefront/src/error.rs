//! Unified error handling for storefront consumers.
//!
//! Store mutations never fail; these errors come from setting the storefront
//! up and from resolving user input (unknown product IDs) before a store
//! operation is called.

use thiserror::Error;

use apnaswaad_core::ProductId;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage backend could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Product is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Caller supplied unusable input.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::ProductNotFound(ProductId::new(123));
        assert_eq!(err.to_string(), "Product not found: 123");

        let err = AppError::BadRequest("quantity must be positive".to_string());
        assert_eq!(err.to_string(), "Bad request: quantity must be positive");
    }

    #[test]
    fn test_app_error_from_storage() {
        let err: AppError = StorageError::Unavailable("disk full".to_string()).into();
        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(err.to_string(), "Storage error: storage unavailable: disk full");
    }
}
