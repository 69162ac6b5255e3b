//! Per-process wallet access
//!
//! The first `get_wallet` call starts a single load-or-create operation.
//! Every caller, including ones that arrive while it is still running,
//! awaits that same operation, so a process never generates two wallets
//! during startup.

use futures::future::{BoxFuture, FutureExt, Shared};
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

use crate::crypto::WalletAccount;
use crate::error::{Result, WalletError};
use crate::storage::{WalletBackend, WalletStore};

type SharedWallet = Shared<BoxFuture<'static, std::result::Result<WalletAccount, Arc<WalletError>>>>;

/// Memoized "current wallet" accessor
pub struct WalletSession<B: WalletBackend + 'static = WalletStore> {
    backend: Arc<B>,
    /// Pending or resolved load-or-create, installed by the first caller
    wallet: OnceLock<SharedWallet>,
}

impl<B: WalletBackend + 'static> WalletSession<B> {
    pub fn new(backend: B) -> Self {
        Self::with_backend(Arc::new(backend))
    }

    pub fn with_backend(backend: Arc<B>) -> Self {
        Self {
            backend,
            wallet: OnceLock::new(),
        }
    }

    /// The backend this session reads from
    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    /// Get the current wallet, loading or creating it on first use
    ///
    /// Once resolved, the outcome (success or failure) is returned to every
    /// later caller without touching disk again.
    pub async fn get_wallet(&self) -> Result<WalletAccount> {
        let pending = self
            .wallet
            .get_or_init(|| {
                let backend = Arc::clone(&self.backend);
                async move { load_or_create(backend.as_ref()).await.map_err(Arc::new) }
                    .boxed()
                    .shared()
            })
            .clone();

        pending.await.map_err(WalletError::InitializationFailed)
    }

    /// Whether the load-or-create operation has finished
    pub fn is_resolved(&self) -> bool {
        self.wallet
            .get()
            .map(|pending| pending.peek().is_some())
            .unwrap_or(false)
    }
}

async fn load_or_create<B: WalletBackend + ?Sized>(backend: &B) -> Result<WalletAccount> {
    if let Some(account) = backend.load_wallet().await {
        debug!("Using existing wallet {}", account.address);
        return Ok(account);
    }

    let account = backend.create_wallet(None).await?;
    info!(
        "No wallet found. Created new development wallet {} at {:?}",
        account.address,
        backend.location()
    );
    Ok(account)
}
