//! Error types for devkit-wallet

use std::sync::Arc;

use thiserror::Error;

/// Result type alias for wallet operations
pub type Result<T> = std::result::Result<T, WalletError>;

/// Wallet error types
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Encryption failed: {0}")]
    EncryptionError(String),

    #[error("Decryption failed: {0}")]
    DecryptionError(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivationError(String),

    #[error("Derived bytes are not a valid secp256k1 private key")]
    InvalidPrivateKey,

    #[error("Corrupted wallet record: {0}")]
    CorruptedRecord(String),

    #[error("Unsupported wallet record version: {0}")]
    UnsupportedVersion(u32),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Balance lookup failed: {0}")]
    BalanceError(String),

    #[error("Background task failed: {0}")]
    TaskError(String),

    #[error("Wallet initialization failed: {0}")]
    InitializationFailed(#[source] Arc<WalletError>),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<tokio::task::JoinError> for WalletError {
    fn from(err: tokio::task::JoinError) -> Self {
        WalletError::TaskError(err.to_string())
    }
}
