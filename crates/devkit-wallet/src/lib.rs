//! # devkit-wallet
//!
//! Local development wallet for paying x402 test-network requests:
//! - Deterministic (seeded) or random secp256k1 accounts via scrypt
//! - AES-256-GCM encryption at rest under a development password
//! - A single encrypted JSON record per wallet path
//! - A per-process session that loads or creates the wallet exactly once

pub mod config;
pub mod crypto;
pub mod devkit;
pub mod error;
pub mod network;
pub mod session;
pub mod storage;

pub use config::{DevKitConfig, DevPassword, DEFAULT_WALLET_FILE};
pub use crypto::{Address, PrivateKey, WalletAccount};
pub use devkit::DevKit;
pub use error::{Result, WalletError};
pub use network::{BalanceSource, Balances, FundingInstructions, NetworkConfig};
pub use session::WalletSession;
pub use storage::{StoredWallet, WalletBackend, WalletStore};
