//! Wallet persistence
//!
//! A single encrypted JSON record per wallet path.

mod atomic;
mod record;
mod traits;
mod wallet_store;

pub(crate) use atomic::write_atomic;
pub use record::{StoredWallet, WALLET_RECORD_VERSION};
pub use traits::WalletBackend;
pub use wallet_store::WalletStore;
