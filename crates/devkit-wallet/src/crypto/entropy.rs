//! Entropy material for private key derivation

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of random bytes drawn when no seed is supplied
pub const RANDOM_ENTROPY_LEN: usize = 32;

/// Raw key-derivation input - automatically zeroed when dropped
///
/// Never persisted; only [`Entropy::digest_hex`] ends up in the wallet file.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    bytes: Vec<u8>,
}

impl Entropy {
    /// Deterministic entropy from a non-empty seed, random entropy otherwise.
    pub fn from_seed(seed: Option<&str>) -> Self {
        match seed.map(str::trim).filter(|s| !s.is_empty()) {
            Some(seed) => Self::deterministic(seed),
            None => Self::random(),
        }
    }

    /// SHA-256 of the trimmed seed
    pub fn deterministic(seed: &str) -> Self {
        let digest = Sha256::digest(seed.trim().as_bytes());
        Self {
            bytes: digest.to_vec(),
        }
    }

    /// 32 bytes from the OS random number generator
    pub fn random() -> Self {
        let mut bytes = vec![0u8; RANDOM_ENTROPY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Hex SHA-256 digest recorded for provenance
    pub fn digest_hex(&self) -> String {
        hex::encode(Sha256::digest(&self.bytes))
    }
}

impl std::fmt::Debug for Entropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entropy")
            .field("len", &self.bytes.len())
            .finish()
    }
}
