//! DevKit facade: the current wallet plus what it needs to pay on the test network

use tracing::debug;

use crate::config::DevKitConfig;
use crate::crypto::WalletAccount;
use crate::error::Result;
use crate::network::{BalanceSource, Balances, FundingInstructions, NetworkConfig};
use crate::session::WalletSession;
use crate::storage::{WalletBackend, WalletStore};

pub struct DevKit<S: BalanceSource, B: WalletBackend + 'static = WalletStore> {
    session: WalletSession<B>,
    network: NetworkConfig,
    balances: S,
}

impl<S: BalanceSource> DevKit<S, WalletStore> {
    /// Build from project config: wallet file and network profile
    pub fn from_config(config: &DevKitConfig, balances: S) -> Result<Self> {
        let network = NetworkConfig::by_name(&config.network)?;
        let session = WalletSession::new(WalletStore::from_config(config));
        Ok(Self::new(session, network, balances))
    }
}

impl<S: BalanceSource, B: WalletBackend + 'static> DevKit<S, B> {
    pub fn new(session: WalletSession<B>, network: NetworkConfig, balances: S) -> Self {
        Self {
            session,
            network,
            balances,
        }
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    pub fn session(&self) -> &WalletSession<B> {
        &self.session
    }

    /// The current wallet, created on first use if needed
    pub async fn get_wallet(&self) -> Result<WalletAccount> {
        self.session.get_wallet().await
    }

    /// Native and token balances of the current wallet
    pub async fn balances(&self) -> Result<Balances> {
        let wallet = self.get_wallet().await?;
        let balances = self
            .balances
            .fetch_balances(&self.network, &wallet.address)
            .await?;
        debug!(
            "Balances for {}: native={} token={}",
            wallet.address, balances.native, balances.token
        );
        Ok(balances)
    }

    /// Whether the wallet is below either funding threshold
    pub async fn needs_funding(&self) -> Result<bool> {
        let balances = self.balances().await?;
        Ok(self.network.needs_funding(&balances))
    }

    pub async fn funding_instructions(&self) -> Result<FundingInstructions> {
        let wallet = self.get_wallet().await?;
        Ok(self.network.funding_instructions(&wallet.address))
    }
}
