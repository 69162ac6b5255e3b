//! Cryptographic primitives for the development wallet
//!
//! This module provides:
//! - Entropy material from a seed or the OS RNG
//! - scrypt key derivation (private keys and at-rest encryption keys)
//! - AES-256-GCM envelope encryption
//! - secp256k1 accounts with EIP-55 addresses
//! - Secure memory handling with zeroize

mod account;
mod encryption;
mod entropy;
mod key_derivation;
mod secure_memory;

pub use account::{Address, WalletAccount};
pub use encryption::{decrypt, encrypt, open, seal, EncryptedData, Envelope, IV_LEN, TAG_LEN};
pub use entropy::{Entropy, RANDOM_ENTROPY_LEN};
pub use key_derivation::{
    derive_key, derive_private_key, generate_salt, KeyDerivationParams, PRIVATE_KEY_SALT, SALT_LEN,
};
pub use secure_memory::{EncryptionKey, PrivateKey};
