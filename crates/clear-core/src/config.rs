//! Configuration file support.
//!
//! ```toml
//! equality = "structural"
//! log_profile = "production"
//! ```
//!
//! Every key is optional. `RUST_LOG` still overrides the log filter.

use crate::diff::EqualityMode;
use crate::errors::{ClearError, Result};
use crate::logging_facility::Profile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "clear.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClearConfig {
    pub equality: EqualityMode,
    pub log_profile: Profile,
}

impl ClearConfig {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// `Config` on malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ClearError::Config {
            message: format!("TOML parse error: {}", e),
        })
    }

    /// Load configuration from `path`; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// `Io` if the file exists but cannot be read, `Config` if it does not
    /// parse.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| ClearError::Io {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = ClearConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClearConfig::default());
        assert_eq!(config.equality, EqualityMode::Strict);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = ClearConfig::from_toml_str("equallity = \"strict\"").unwrap_err();
        assert!(matches!(err, ClearError::Config { .. }));
    }
}
