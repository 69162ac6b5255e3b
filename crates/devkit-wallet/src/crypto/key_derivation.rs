//! scrypt key derivation
//!
//! Used twice: once to turn entropy material into the wallet's private key
//! (fixed application salt), and once to turn the development password into
//! the at-rest encryption key (random per-record salt).

use rand::rngs::OsRng;
use rand::RngCore;
use scrypt::Params;
use tracing::debug;
use zeroize::Zeroize;

use super::{EncryptionKey, PrivateKey};
use crate::error::{Result, WalletError};

/// Salt mixed into every private-key derivation. Changing it changes every seeded wallet.
pub const PRIVATE_KEY_SALT: &[u8] = b"x402-devkit-salt";

/// Length of the per-record encryption salt
pub const SALT_LEN: usize = 32;

/// Parameters for scrypt key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDerivationParams {
    /// log2 of the CPU/memory cost N (default: 14, N = 16384)
    pub log_n: u8,
    /// Block size (default: 8)
    pub r: u32,
    /// Parallelism (default: 1)
    pub p: u32,
}

impl Default for KeyDerivationParams {
    fn default() -> Self {
        Self {
            log_n: 14, // 16 MB at r = 8
            r: 8,
            p: 1,
        }
    }
}

/// Generate a cryptographically secure random salt
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// Run scrypt and return 32 bytes of output
fn scrypt_32(input: &[u8], salt: &[u8], params: KeyDerivationParams) -> Result<[u8; 32]> {
    let scrypt_params = Params::new(params.log_n, params.r, params.p, 32)
        .map_err(|e| WalletError::KeyDerivationError(e.to_string()))?;

    let mut output = [0u8; 32];
    scrypt::scrypt(input, salt, &scrypt_params, &mut output)
        .map_err(|e| WalletError::KeyDerivationError(e.to_string()))?;

    Ok(output)
}

/// Derive the wallet private key from entropy material
///
/// The output is interpreted directly as the secp256k1 scalar; the caller
/// validates it when deriving the account.
pub fn derive_private_key(entropy: &[u8]) -> Result<PrivateKey> {
    let mut bytes = scrypt_32(entropy, PRIVATE_KEY_SALT, KeyDerivationParams::default())?;
    let key = PrivateKey::new(bytes);
    bytes.zeroize();
    Ok(key)
}

/// Derive a 256-bit encryption key from a password and salt
///
/// # Arguments
/// * `password` - The development password
/// * `salt` - Per-record salt (use `generate_salt()` to create one)
/// * `params` - Optional key derivation parameters
pub fn derive_key(
    password: &str,
    salt: &[u8],
    params: Option<KeyDerivationParams>,
) -> Result<EncryptionKey> {
    let params = params.unwrap_or_default();
    debug!("Deriving encryption key with scrypt log_n={}, r={}, p={}", params.log_n, params.r, params.p);

    let mut bytes = scrypt_32(password.as_bytes(), salt, params)?;
    let key = EncryptionKey::new(bytes);
    bytes.zeroize();
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_params() -> KeyDerivationParams {
        KeyDerivationParams {
            log_n: 10,
            r: 8,
            p: 1,
        }
    }

    #[test]
    fn test_generate_salt() {
        let salt1 = generate_salt();
        let salt2 = generate_salt();

        // Salts should be different
        assert_ne!(salt1, salt2);
        assert_eq!(salt1.len(), 32);
    }

    #[test]
    fn test_derive_key_deterministic() {
        let salt = generate_salt();

        let key1 = derive_key("dev-password", &salt, Some(fast_params())).unwrap();
        let key2 = derive_key("dev-password", &salt, Some(fast_params())).unwrap();

        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_derive_key_different_salts() {
        let key1 = derive_key("dev-password", &generate_salt(), Some(fast_params())).unwrap();
        let key2 = derive_key("dev-password", &generate_salt(), Some(fast_params())).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_derive_key_different_passwords() {
        let salt = generate_salt();

        let key1 = derive_key("password1", &salt, Some(fast_params())).unwrap();
        let key2 = derive_key("password2", &salt, Some(fast_params())).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_derive_private_key_deterministic() {
        let key1 = derive_private_key(b"entropy material").unwrap();
        let key2 = derive_private_key(b"entropy material").unwrap();
        let other = derive_private_key(b"other material").unwrap();

        assert_eq!(key1, key2);
        assert_ne!(key1, other);
    }

    #[test]
    fn test_derive_private_key_known_seed() {
        // Same key the Node x402 devkit derives for seed "alpha"
        let entropy = crate::crypto::Entropy::from_seed(Some("alpha"));
        let key = derive_private_key(entropy.as_bytes()).unwrap();

        assert_eq!(
            key.to_hex(),
            "0x4a16fd8e9c884bb6ff3db860aba4fa504e88e369591aae8bf6527d7c03888cac"
        );
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = KeyDerivationParams {
            log_n: 0,
            r: 0,
            p: 0,
        };
        let result = derive_key("dev-password", &generate_salt(), Some(params));
        assert!(matches!(result, Err(WalletError::KeyDerivationError(_))));
    }
}
