//! # Storage Configuration
//!
//! Capacities are fixed at creation, so they are read once at startup from
//! a TOML file:
//!
//! ```toml
//! # config/storage.toml
//! capacity = 262144
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ConfigError, ConfigResult};

/// Default entity capacity (64K).
pub const DEFAULT_CAPACITY: usize = 65_536;

/// Sizing for sparse sets and component storages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Number of entity identifiers each index can address.
    pub capacity: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl StorageConfig {
    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::CapacityTooLarge`] if validation fails.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`StorageConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match Self::from_toml_str(&text) {
            Ok(config) => {
                debug!(path = %path.display(), capacity = config.capacity, "loaded storage config");
                Ok(config)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "rejected storage config");
                Err(err)
            }
        }
    }

    /// Checks that the capacity fits the identifier range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CapacityTooLarge`] above `u32::MAX`.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.capacity > u32::MAX as usize {
            return Err(ConfigError::CapacityTooLarge(self.capacity));
        }
        Ok(())
    }
}
