//! Storage trait definitions

use async_trait::async_trait;
use std::path::Path;

use crate::crypto::WalletAccount;
use crate::error::Result;

/// A place wallets can be loaded from and created in
#[async_trait]
pub trait WalletBackend: Send + Sync {
    /// Load the persisted wallet; `None` when there is no usable wallet
    async fn load_wallet(&self) -> Option<WalletAccount>;

    /// Create and persist a wallet, replacing any existing one
    async fn create_wallet(&self, seed: Option<&str>) -> Result<WalletAccount>;

    /// Check whether a wallet file exists (contents are not validated)
    async fn wallet_exists(&self) -> bool;

    /// Where the wallet is persisted
    fn location(&self) -> &Path;
}
