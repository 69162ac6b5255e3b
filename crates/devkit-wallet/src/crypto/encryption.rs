//! AES-256-GCM envelope encryption
//!
//! Each envelope carries everything needed to decrypt it except the password:
//! - Salt: 32 bytes, fed to scrypt with the password
//! - IV: 16 bytes (GCM with a non-96-bit nonce, GHASH-derived counter block)
//! - Auth tag: 16 bytes (128 bits)
//! - Ciphertext: same length as the plaintext

use aes_gcm::{
    aead::{consts::U16, generic_array::GenericArray, Aead, KeyInit},
    aes::Aes256,
    AesGcm,
};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use super::key_derivation::{derive_key, generate_salt, KeyDerivationParams, SALT_LEN};
use super::EncryptionKey;
use crate::error::{Result, WalletError};

/// AES-256-GCM with a 16-byte IV
type Aes256Gcm16 = AesGcm<Aes256, U16>;

pub const IV_LEN: usize = 16;
pub const TAG_LEN: usize = 16;

/// Encrypted data with IV and auth tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedData {
    /// Initialization vector
    pub iv: [u8; IV_LEN],
    /// Authentication tag
    pub auth_tag: [u8; TAG_LEN],
    /// Encrypted ciphertext
    pub ciphertext: Vec<u8>,
}

/// Password-sealed payload: the scrypt salt plus the encrypted data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub salt: [u8; SALT_LEN],
    pub data: EncryptedData,
}

/// Encrypt plaintext using AES-256-GCM with a fresh random IV
pub fn encrypt(plaintext: &[u8], key: &EncryptionKey) -> Result<EncryptedData> {
    let cipher = Aes256Gcm16::new_from_slice(key.as_bytes())
        .map_err(|e| WalletError::EncryptionError(e.to_string()))?;

    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);

    // aes-gcm appends the auth tag to the ciphertext
    let ciphertext_with_tag = cipher
        .encrypt(GenericArray::from_slice(&iv), plaintext)
        .map_err(|e| WalletError::EncryptionError(e.to_string()))?;

    if ciphertext_with_tag.len() < TAG_LEN {
        return Err(WalletError::EncryptionError(
            "Ciphertext too short".to_string(),
        ));
    }

    let tag_start = ciphertext_with_tag.len() - TAG_LEN;
    let ciphertext = ciphertext_with_tag[..tag_start].to_vec();
    let mut auth_tag = [0u8; TAG_LEN];
    auth_tag.copy_from_slice(&ciphertext_with_tag[tag_start..]);

    Ok(EncryptedData {
        iv,
        auth_tag,
        ciphertext,
    })
}

/// Decrypt and authenticate. Fails if the tag does not verify.
pub fn decrypt(encrypted: &EncryptedData, key: &EncryptionKey) -> Result<Zeroizing<Vec<u8>>> {
    let cipher = Aes256Gcm16::new_from_slice(key.as_bytes())
        .map_err(|e| WalletError::DecryptionError(e.to_string()))?;

    // Reconstruct ciphertext with tag appended (as expected by aes-gcm)
    let mut ciphertext_with_tag = encrypted.ciphertext.clone();
    ciphertext_with_tag.extend_from_slice(&encrypted.auth_tag);

    cipher
        .decrypt(GenericArray::from_slice(&encrypted.iv), ciphertext_with_tag.as_slice())
        .map(Zeroizing::new)
        .map_err(|_| WalletError::DecryptionError("authentication failed".to_string()))
}

/// Encrypt under a key derived from `password` and a fresh salt
pub fn seal(
    plaintext: &[u8],
    password: &str,
    params: Option<KeyDerivationParams>,
) -> Result<Envelope> {
    let salt = generate_salt();
    let key = derive_key(password, &salt, params)?;
    let data = encrypt(plaintext, &key)?;
    Ok(Envelope { salt, data })
}

/// Reverse of [`seal`]
pub fn open(
    envelope: &Envelope,
    password: &str,
    params: Option<KeyDerivationParams>,
) -> Result<Zeroizing<Vec<u8>>> {
    let key = derive_key(password, &envelope.salt, params)?;
    decrypt(&envelope.data, &key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_params() -> Option<KeyDerivationParams> {
        Some(KeyDerivationParams {
            log_n: 10,
            r: 8,
            p: 1,
        })
    }

    fn test_key() -> EncryptionKey {
        derive_key("test-password", &generate_salt(), fast_params()).unwrap()
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let key = test_key();
        let plaintext = b"0xdeadbeef";

        let encrypted = encrypt(plaintext, &key).unwrap();
        let decrypted = decrypt(&encrypted, &key).unwrap();

        assert_eq!(decrypted.as_slice(), plaintext);
        assert_eq!(encrypted.ciphertext.len(), plaintext.len());
    }

    #[test]
    fn test_seal_open_roundtrip() {
        let envelope = seal(b"private key material", "dev-password", fast_params()).unwrap();
        let opened = open(&envelope, "dev-password", fast_params()).unwrap();
        assert_eq!(opened.as_slice(), b"private key material");
    }

    #[test]
    fn test_seal_is_randomized() {
        let plaintext = b"same plaintext";

        let first = seal(plaintext, "dev-password", fast_params()).unwrap();
        let second = seal(plaintext, "dev-password", fast_params()).unwrap();

        assert_ne!(first.salt, second.salt);
        assert_ne!(first.data.iv, second.data.iv);
        assert_ne!(first.data.ciphertext, second.data.ciphertext);
    }

    #[test]
    fn test_wrong_password_fails() {
        let envelope = seal(b"secret data", "dev-password", fast_params()).unwrap();
        let result = open(&envelope, "other-password", fast_params());
        assert!(matches!(result, Err(WalletError::DecryptionError(_))));
    }

    #[test]
    fn test_tampered_ciphertext_fails_decryption() {
        let key = test_key();

        let mut encrypted = encrypt(b"secret data", &key).unwrap();
        encrypted.ciphertext[0] ^= 0xFF;

        assert!(decrypt(&encrypted, &key).is_err());
    }

    #[test]
    fn test_tampered_auth_tag_fails_decryption() {
        let key = test_key();

        let mut encrypted = encrypt(b"secret data", &key).unwrap();
        encrypted.auth_tag[0] ^= 0xFF;

        assert!(decrypt(&encrypted, &key).is_err());
    }

    #[test]
    fn test_tampered_iv_fails_decryption() {
        let key = test_key();

        let mut encrypted = encrypt(b"secret data", &key).unwrap();
        encrypted.iv[15] ^= 0x01;

        assert!(decrypt(&encrypted, &key).is_err());
    }
}
