//! secp256k1 account derivation and EVM address encoding

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use super::PrivateKey;
use crate::error::{Result, WalletError};

/// EIP-55 checksummed EVM address (`0x` + 40 hex chars)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Checksum-encode a raw 20-byte address
    pub fn from_bytes(bytes: &[u8; 20]) -> Self {
        let lower = hex::encode(bytes);
        let hash = Keccak256::digest(lower.as_bytes());

        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = (hash[i / 2] >> (if i % 2 == 0 { 4 } else { 0 })) & 0x0f;
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }

        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against another textual address
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An address and the private key it was derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletAccount {
    pub address: Address,
    pub private_key: PrivateKey,
}

impl WalletAccount {
    /// Derive the account for a private key
    ///
    /// Fails if the bytes are zero or not below the curve order.
    pub fn from_private_key(private_key: PrivateKey) -> Result<Self> {
        let secret = SecretKey::from_slice(private_key.as_bytes())
            .map_err(|_| WalletError::InvalidPrivateKey)?;

        let point = secret.public_key().to_encoded_point(false);
        // Skip the 0x04 uncompressed-point tag
        let hash = Keccak256::digest(&point.as_bytes()[1..]);

        let mut raw = [0u8; 20];
        raw.copy_from_slice(&hash[12..]);

        Ok(Self {
            address: Address::from_bytes(&raw),
            private_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account_for(hex_key: &str) -> WalletAccount {
        WalletAccount::from_private_key(PrivateKey::from_hex(hex_key).unwrap()).unwrap()
    }

    #[test]
    fn test_known_vector_key_one() {
        let key = format!("0x{}1", "0".repeat(63));
        let account = account_for(&key);
        assert_eq!(
            account.address.as_str(),
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
        );
    }

    #[test]
    fn test_known_vector_web3_docs() {
        let account =
            account_for("0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318");
        assert_eq!(
            account.address.as_str(),
            "0x2c7536E3605D9C16a7a3D7b1898e529396a65c23"
        );
    }

    #[test]
    fn test_zero_key_rejected() {
        let result = WalletAccount::from_private_key(PrivateKey::new([0u8; 32]));
        assert!(matches!(result, Err(WalletError::InvalidPrivateKey)));
    }

    #[test]
    fn test_key_above_curve_order_rejected() {
        let result = WalletAccount::from_private_key(PrivateKey::new([0xff; 32]));
        assert!(matches!(result, Err(WalletError::InvalidPrivateKey)));
    }

    #[test]
    fn test_address_matches_ignores_case() {
        let account =
            account_for("0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318");
        assert!(account
            .address
            .matches("0x2c7536e3605d9c16a7a3d7b1898e529396a65c23"));
        assert!(!account
            .address
            .matches("0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"));
        assert_eq!(account.address.as_str().len(), 42);
    }
}
