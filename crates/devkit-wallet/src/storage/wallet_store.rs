//! Encrypted wallet file backend
//!
//! Stores a single wallet as a JSON record. The private key is sealed with
//! AES-256-GCM under a key derived from the development password; the
//! record is always replaced wholesale, never edited in place.

use async_trait::async_trait;
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroizing;

use super::atomic::write_atomic;
use super::record::StoredWallet;
use super::WalletBackend;
use crate::config::{DevKitConfig, DevPassword, DEFAULT_WALLET_FILE};
use crate::crypto::{derive_private_key, open, seal, Entropy, PrivateKey, WalletAccount};
use crate::error::{Result, WalletError};

/// Encrypted wallet file at a fixed path
#[derive(Debug, Clone)]
pub struct WalletStore {
    /// Path of the wallet JSON file
    wallet_path: PathBuf,
    /// Development password for the at-rest encryption
    password: DevPassword,
}

impl WalletStore {
    /// Create a store for the given path using the default development password
    pub fn new(wallet_path: impl Into<PathBuf>) -> Self {
        Self::with_password(wallet_path, DevPassword::default())
    }

    /// Create a store for the given path with an explicit development password
    pub fn with_password(wallet_path: impl Into<PathBuf>, password: DevPassword) -> Self {
        Self {
            wallet_path: wallet_path.into(),
            password,
        }
    }

    /// Create a store for the wallet path named in the project config
    pub fn from_config(config: &DevKitConfig) -> Self {
        Self::new(config.wallet_path.clone())
    }

    /// Get the wallet file path
    pub fn wallet_path(&self) -> &Path {
        &self.wallet_path
    }

    /// Create a wallet and persist it, replacing any existing file
    ///
    /// A non-empty seed (after trimming) always yields the same account.
    /// Without one the key comes from 32 OS-random bytes.
    pub async fn create_wallet(&self, seed: Option<&str>) -> Result<WalletAccount> {
        let seed = seed.map(|s| Zeroizing::new(s.to_string()));
        let password = self.password.clone();

        // scrypt is CPU/memory heavy; keep it off the async workers
        let (account, record) = tokio::task::spawn_blocking(move || {
            build_wallet(seed.as_deref().map(String::as_str), &password)
        })
        .await??;

        self.write_record(&record).await?;

        debug!("Created wallet {} at {:?}", account.address, self.wallet_path);
        Ok(account)
    }

    /// Load the wallet from disk
    ///
    /// Missing, unparsable, tampered or mismatched files all yield `None`.
    pub async fn load_wallet(&self) -> Option<WalletAccount> {
        match self.try_load().await {
            Ok(account) => {
                debug!("Loaded wallet {} from {:?}", account.address, self.wallet_path);
                Some(account)
            }
            Err(WalletError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
                debug!("No wallet file at {:?}", self.wallet_path);
                None
            }
            Err(e) => {
                debug!("Ignoring unusable wallet file {:?}: {}", self.wallet_path, e);
                None
            }
        }
    }

    /// Check if a wallet file exists
    pub async fn wallet_exists(&self) -> bool {
        tokio::fs::try_exists(&self.wallet_path).await.unwrap_or(false)
    }

    async fn try_load(&self) -> Result<WalletAccount> {
        let contents = tokio::fs::read_to_string(&self.wallet_path).await?;
        let record: StoredWallet = serde_json::from_str(&contents)?;

        let password = self.password.clone();
        tokio::task::spawn_blocking(move || open_record(&record, &password)).await?
    }

    async fn write_record(&self, record: &StoredWallet) -> Result<()> {
        let contents = serde_json::to_string_pretty(record)?;
        write_atomic(&self.wallet_path, contents).await?;

        debug!("Saved wallet record to {:?}", self.wallet_path);
        Ok(())
    }
}

impl Default for WalletStore {
    fn default() -> Self {
        Self::new(DEFAULT_WALLET_FILE)
    }
}

#[async_trait]
impl WalletBackend for WalletStore {
    async fn load_wallet(&self) -> Option<WalletAccount> {
        WalletStore::load_wallet(self).await
    }

    async fn create_wallet(&self, seed: Option<&str>) -> Result<WalletAccount> {
        WalletStore::create_wallet(self, seed).await
    }

    async fn wallet_exists(&self) -> bool {
        WalletStore::wallet_exists(self).await
    }

    fn location(&self) -> &Path {
        self.wallet_path()
    }
}

/// Derive the account for `seed` and seal it into a record
fn build_wallet(seed: Option<&str>, password: &DevPassword) -> Result<(WalletAccount, StoredWallet)> {
    let entropy = Entropy::from_seed(seed);
    let private_key = derive_private_key(entropy.as_bytes())?;
    let account = WalletAccount::from_private_key(private_key)?;

    let plaintext = Zeroizing::new(account.private_key.to_hex());
    let envelope = seal(plaintext.as_bytes(), password.expose(), None)?;

    let record = StoredWallet::new(
        &account.address,
        &envelope,
        entropy.digest_hex(),
        Utc::now().timestamp_millis(),
    );

    Ok((account, record))
}

/// Decrypt a record and check the key still derives the stored address
fn open_record(record: &StoredWallet, password: &DevPassword) -> Result<WalletAccount> {
    let envelope = record.envelope()?;
    let plaintext = open(&envelope, password.expose(), None)?;

    let key_hex = std::str::from_utf8(&plaintext)
        .map_err(|_| WalletError::CorruptedRecord("private key is not UTF-8".to_string()))?;
    let account = WalletAccount::from_private_key(PrivateKey::from_hex(key_hex)?)?;

    if !account.address.matches(&record.address) {
        return Err(WalletError::CorruptedRecord(
            "stored address does not match decrypted key".to_string(),
        ));
    }

    Ok(account)
}
