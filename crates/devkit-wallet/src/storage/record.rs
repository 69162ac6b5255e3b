//! On-disk wallet record

use serde::{Deserialize, Serialize};

use crate::crypto::{Address, EncryptedData, Envelope, IV_LEN, SALT_LEN, TAG_LEN};
use crate::error::{Result, WalletError};

/// Current schema version of [`StoredWallet`]
pub const WALLET_RECORD_VERSION: u32 = 1;

/// JSON file format for a persisted wallet
///
/// All binary fields are lowercase hex without a `0x` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredWallet {
    /// Checksummed address, informational only; loading re-derives it
    pub address: String,
    pub encrypted_private_key: String,
    /// scrypt salt for the encryption key (32 bytes)
    pub salt: String,
    /// AES-GCM IV (16 bytes)
    pub iv: String,
    /// AES-GCM tag (16 bytes)
    pub auth_tag: String,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
    /// SHA-256 of the entropy material (provenance only)
    pub entropy_hash: String,
    pub version: u32,
}

impl StoredWallet {
    pub fn new(address: &Address, envelope: &Envelope, entropy_hash: String, created_at: i64) -> Self {
        Self {
            address: address.to_string(),
            encrypted_private_key: hex::encode(&envelope.data.ciphertext),
            salt: hex::encode(envelope.salt),
            iv: hex::encode(envelope.data.iv),
            auth_tag: hex::encode(envelope.data.auth_tag),
            created_at,
            entropy_hash,
            version: WALLET_RECORD_VERSION,
        }
    }

    /// Decode the encryption envelope, validating version and field lengths
    pub fn envelope(&self) -> Result<Envelope> {
        if self.version != WALLET_RECORD_VERSION {
            return Err(WalletError::UnsupportedVersion(self.version));
        }

        let ciphertext = hex::decode(&self.encrypted_private_key).map_err(|e| {
            WalletError::CorruptedRecord(format!("Invalid encryptedPrivateKey hex: {}", e))
        })?;

        Ok(Envelope {
            salt: decode_fixed::<SALT_LEN>("salt", &self.salt)?,
            data: EncryptedData {
                iv: decode_fixed::<IV_LEN>("iv", &self.iv)?,
                auth_tag: decode_fixed::<TAG_LEN>("authTag", &self.auth_tag)?,
                ciphertext,
            },
        })
    }
}

fn decode_fixed<const N: usize>(field: &str, value: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(value)
        .map_err(|e| WalletError::CorruptedRecord(format!("Invalid {} hex: {}", field, e)))?;

    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| {
        WalletError::CorruptedRecord(format!(
            "Invalid {} length: expected {}, got {}",
            field,
            N,
            bytes.len()
        ))
    })
}
