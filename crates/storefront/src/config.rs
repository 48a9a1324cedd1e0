//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STYLESTORE_DATA_DIR` - Directory for the file-backed key-value store
//!   (default: `stylestore-data`)
//! - `STYLESTORE_STORE_NAME` - Store name shown on invoices
//!   (default: `StyleStore`)

use std::path::PathBuf;

use thiserror::Error;

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "stylestore-data";

/// Default store display name.
pub const DEFAULT_STORE_NAME: &str = "StyleStore";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory the file-backed key-value store writes into.
    pub data_dir: PathBuf,
    /// Store display name.
    pub store_name: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set but empty.
    pub fn load() -> Result<Self, ConfigError> {
        let data_dir = match std::env::var("STYLESTORE_DATA_DIR") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "STYLESTORE_DATA_DIR".to_owned(),
                    "must not be empty".to_owned(),
                ));
            }
            Ok(value) => PathBuf::from(value),
            Err(_) => PathBuf::from(DEFAULT_DATA_DIR),
        };

        let store_name = match std::env::var("STYLESTORE_STORE_NAME") {
            Ok(value) if !value.trim().is_empty() => value,
            _ => DEFAULT_STORE_NAME.to_owned(),
        };

        Ok(Self {
            data_dir,
            store_name,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            store_name: DEFAULT_STORE_NAME.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("stylestore-data"));
        assert_eq!(config.store_name, "StyleStore");
    }
}
