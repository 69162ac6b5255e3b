//! Test-network profiles, funding thresholds and balance lookup
//!
//! Balances are fetched by an external collaborator through
//! [`BalanceSource`]; this module only decides what they mean.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::crypto::Address;
use crate::error::{Result, WalletError};

/// A faucet that hands out test funds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faucet {
    pub name: String,
    pub url: String,
}

impl Faucet {
    fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// Everything the devkit knows about one test network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub name: String,
    pub chain_id: u64,
    pub rpc_url: String,
    /// Payment token (USDC) contract
    pub token_address: String,
    pub token_symbol: String,
    pub token_decimals: u8,
    pub native_symbol: String,
    pub native_decimals: u8,
    /// Minimum native balance in wei
    pub min_native_balance: u128,
    /// Minimum token balance in base units
    pub min_token_balance: u128,
    pub explorer_url: String,
    pub native_faucets: Vec<Faucet>,
    pub token_faucets: Vec<Faucet>,
}

impl NetworkConfig {
    /// Base Sepolia, the network x402 test payments settle on
    pub fn base_sepolia() -> Self {
        Self {
            name: "base-sepolia".to_string(),
            chain_id: 84532,
            rpc_url: "https://sepolia.base.org".to_string(),
            token_address: "0x036CbD53842c5426634e7929541eC2318f3dCF7e".to_string(),
            token_symbol: "USDC".to_string(),
            token_decimals: 6,
            native_symbol: "ETH".to_string(),
            native_decimals: 18,
            min_native_balance: 10_000_000_000_000_000, // 0.01 ETH
            min_token_balance: 100_000,                 // 0.1 USDC
            explorer_url: "https://sepolia.basescan.org".to_string(),
            native_faucets: vec![
                Faucet::new("Chainlink Faucet", "https://faucets.chain.link/sepolia"),
                Faucet::new("Alchemy Faucet", "https://www.alchemy.com/faucets/base-sepolia"),
                Faucet::new("QuickNode Faucet", "https://faucet.quicknode.com/base/sepolia"),
                Faucet::new("Circle USDC Faucet", "https://faucet.circle.com/"),
            ],
            token_faucets: vec![Faucet::new("Circle USDC Faucet", "https://faucet.circle.com/")],
        }
    }

    /// Look up a profile by name
    pub fn by_name(name: &str) -> Result<Self> {
        match name {
            "base-sepolia" => Ok(Self::base_sepolia()),
            other => Err(WalletError::UnknownNetwork(other.to_string())),
        }
    }

    /// Block explorer page for an address
    pub fn explorer_address_url(&self, address: &Address) -> String {
        format!("{}/address/{}", self.explorer_url.trim_end_matches('/'), address)
    }

    /// Whether either balance is below the funding threshold
    pub fn needs_funding(&self, balances: &Balances) -> bool {
        balances.native < self.min_native_balance || balances.token < self.min_token_balance
    }

    /// Funding steps for an address
    pub fn funding_instructions(&self, address: &Address) -> FundingInstructions {
        FundingInstructions {
            network: self.name.clone(),
            address: address.clone(),
            native_faucets: self.native_faucets.clone(),
            token_faucets: self.token_faucets.clone(),
            token_address: self.token_address.clone(),
            min_native: format_units(self.min_native_balance, self.native_decimals),
            min_token: format_units(self.min_token_balance, self.token_decimals),
            explorer_url: self.explorer_address_url(address),
        }
    }
}

/// Native and token balances in base units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balances {
    /// Native currency in wei
    pub native: u128,
    /// Payment token in its smallest unit
    pub token: u128,
}

/// Where balances come from (an RPC client in practice)
#[async_trait]
pub trait BalanceSource: Send + Sync {
    async fn fetch_balances(&self, network: &NetworkConfig, address: &Address) -> Result<Balances>;
}

#[async_trait]
impl<T: BalanceSource + ?Sized> BalanceSource for Arc<T> {
    async fn fetch_balances(&self, network: &NetworkConfig, address: &Address) -> Result<Balances> {
        (**self).fetch_balances(network, address).await
    }
}

/// What a user needs to fund the wallet. Rendering is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingInstructions {
    pub network: String,
    pub address: Address,
    pub native_faucets: Vec<Faucet>,
    pub token_faucets: Vec<Faucet>,
    pub token_address: String,
    /// Human-readable minimum native balance, e.g. "0.01"
    pub min_native: String,
    /// Human-readable minimum token balance, e.g. "0.1"
    pub min_token: String,
    pub explorer_url: String,
}

/// Format an integer amount with `decimals` fractional digits, trimming trailing zeros
pub fn format_units(amount: u128, decimals: u8) -> String {
    if decimals == 0 {
        return amount.to_string();
    }

    let scale = 10u128.pow(decimals as u32);
    let whole = amount / scale;
    let fraction = amount % scale;

    if fraction == 0 {
        return whole.to_string();
    }

    let fraction = format!("{:0width$}", fraction, width = decimals as usize);
    format!("{}.{}", whole, fraction.trim_end_matches('0'))
}
