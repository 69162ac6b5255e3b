//! Key holders that are zeroed when dropped

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Result, WalletError};

/// AES-256 key derived from the development password - automatically zeroed when dropped
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct EncryptionKey {
    key: [u8; 32],
}

impl EncryptionKey {
    /// Create a new encryption key from raw bytes
    pub fn new(key: [u8; 32]) -> Self {
        Self { key }
    }

    /// Get the key bytes (use carefully - avoid copying)
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.key
    }
}

impl std::fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// secp256k1 private key scalar - automatically zeroed when dropped
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    bytes: [u8; 32],
}

impl PrivateKey {
    /// Wrap 32 raw bytes. Range checking happens when the account is derived.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Parse the `0x`-prefixed (or bare) hex form
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let mut decoded = hex::decode(digits)
            .map_err(|e| WalletError::CorruptedRecord(format!("Invalid private key hex: {}", e)))?;

        if decoded.len() != 32 {
            let len = decoded.len();
            decoded.zeroize();
            return Err(WalletError::CorruptedRecord(format!(
                "Invalid private key length: expected 32, got {}",
                len
            )));
        }

        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&decoded);
        decoded.zeroize();
        Ok(Self { bytes })
    }

    /// Raw key bytes (use carefully)
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// `0x`-prefixed lowercase hex, the form written to `.env` files by scaffolding tools
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.bytes))
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_key_hex_roundtrip() {
        let key = PrivateKey::new([0xab; 32]);
        let hex = key.to_hex();

        assert!(hex.starts_with("0x"));
        assert_eq!(hex.len(), 66);
        assert_eq!(PrivateKey::from_hex(&hex).unwrap(), key);
    }

    #[test]
    fn test_private_key_accepts_bare_hex() {
        let bare = "11".repeat(32);
        let key = PrivateKey::from_hex(&bare).unwrap();
        assert_eq!(key.as_bytes(), &[0x11; 32]);
    }

    #[test]
    fn test_private_key_rejects_wrong_length() {
        assert!(PrivateKey::from_hex("0x1234").is_err());
        assert!(PrivateKey::from_hex("not hex at all").is_err());
    }

    #[test]
    fn test_debug_redacted() {
        let key = EncryptionKey::new([7u8; 32]);
        let debug = format!("{:?}", key);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains('7'));

        let private = PrivateKey::new([0xcd; 32]);
        let debug = format!("{:?}", private);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("cd"));
    }
}
