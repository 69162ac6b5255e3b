//! DevKit configuration
//!
//! Stores non-sensitive configuration in a plain JSON file.
//! A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, WalletError};
use crate::storage::write_atomic;

/// Default wallet location, relative to the project directory
pub const DEFAULT_WALLET_FILE: &str = ".x402/wallet.json";

/// Default config location, relative to the project directory
pub const DEFAULT_CONFIG_FILE: &str = ".x402/config.json";

/// Default network profile name
pub const DEFAULT_NETWORK: &str = "base-sepolia";

/// Current config file version
pub const CONFIG_VERSION: u32 = 1;

const DEFAULT_DEV_PASSWORD: &str = "x402-devkit-dev-password";

/// Password used to encrypt the wallet file at rest
///
/// This is a development placeholder, not a secret. It keeps raw key bytes
/// out of the file; it does not protect the key from anyone who can read
/// this crate.
#[derive(Clone, PartialEq, Eq)]
pub struct DevPassword(String);

impl DevPassword {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Default for DevPassword {
    fn default() -> Self {
        Self(DEFAULT_DEV_PASSWORD.to_string())
    }
}

impl std::fmt::Debug for DevPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DevPassword([REDACTED])")
    }
}

/// Project-level DevKit configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DevKitConfig {
    /// Config file version
    pub version: u32,
    /// Where the encrypted wallet lives
    pub wallet_path: PathBuf,
    /// Network profile name (e.g. "base-sepolia")
    pub network: String,
}

impl Default for DevKitConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            wallet_path: PathBuf::from(DEFAULT_WALLET_FILE),
            network: DEFAULT_NETWORK.to_string(),
        }
    }
}

impl DevKitConfig {
    /// Load config from file, falling back to defaults when the file is missing
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        if config.version != CONFIG_VERSION {
            return Err(WalletError::UnsupportedVersion(config.version));
        }

        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Save config to file
    pub async fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        write_atomic(path, contents).await?;

        debug!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = DevKitConfig::load(&temp_dir.path().join("config.json")).unwrap();

        assert_eq!(config.wallet_path, PathBuf::from(".x402/wallet.json"));
        assert_eq!(config.network, "base-sepolia");
        assert_eq!(config.version, 1);
    }

    #[tokio::test]
    async fn test_config_persistence() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let config = DevKitConfig {
            wallet_path: temp_dir.path().join("custom-wallet.json"),
            ..DevKitConfig::default()
        };
        config.save(&path).await.unwrap();

        let loaded = DevKitConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        let entries: Vec<_> = std::fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("config.json")]);
    }

    #[test]
    fn test_config_future_version_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "version": 2, "network": "base-sepolia" }"#).unwrap();

        assert!(matches!(
            DevKitConfig::load(&path),
            Err(WalletError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "walletPath": "keys/dev.json" }"#).unwrap();

        let config = DevKitConfig::load(&path).unwrap();
        assert_eq!(config.wallet_path, PathBuf::from("keys/dev.json"));
        assert_eq!(config.network, "base-sepolia");
    }

    #[test]
    fn test_config_invalid_json_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(DevKitConfig::load(&path).is_err());
    }

    #[test]
    fn test_dev_password_redacted() {
        let password = DevPassword::default();
        assert_eq!(password.expose(), "x402-devkit-dev-password");
        assert!(!format!("{:?}", password).contains("x402"));
    }
}
