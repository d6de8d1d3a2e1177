//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `APNASWAAD_STORAGE_DIR` - Directory for the persisted collections (default: .apnaswaad)
//! - `APNASWAAD_CURRENCY` - ISO 4217 code used when formatting prices (default: INR)

use std::path::PathBuf;

use apnaswaad_core::CurrencyCode;
use thiserror::Error;

const DEFAULT_STORAGE_DIR: &str = ".apnaswaad";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory holding one JSON file per persisted collection
    pub storage_dir: PathBuf,
    /// Currency used to format prices
    pub currency: CurrencyCode,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            currency: CurrencyCode::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_dir = lookup("APNASWAAD_STORAGE_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR), PathBuf::from);

        let currency = get_or_default(&lookup, "APNASWAAD_CURRENCY", "INR")
            .parse::<CurrencyCode>()
            .map_err(|e| ConfigError::InvalidEnvVar("APNASWAAD_CURRENCY".to_string(), e))?;

        Ok(Self {
            storage_dir,
            currency,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(vars(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.storage_dir, PathBuf::from(".apnaswaad"));
        assert_eq!(config.currency, CurrencyCode::INR);
    }

    #[test]
    fn test_reads_overrides() {
        let config = StorefrontConfig::from_lookup(vars(&[
            ("APNASWAAD_STORAGE_DIR", "/tmp/shop"),
            ("APNASWAAD_CURRENCY", "usd"),
        ]))
        .unwrap();
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/shop"));
        assert_eq!(config.currency, CurrencyCode::USD);
    }

    #[test]
    fn test_blank_storage_dir_uses_default() {
        let config =
            StorefrontConfig::from_lookup(vars(&[("APNASWAAD_STORAGE_DIR", "  ")])).unwrap();
        assert_eq!(config.storage_dir, PathBuf::from(".apnaswaad"));
    }

    #[test]
    fn test_invalid_currency() {
        let err = StorefrontConfig::from_lookup(vars(&[("APNASWAAD_CURRENCY", "doubloons")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "APNASWAAD_CURRENCY"));
    }
}
