//! Key-derived identities for per-credential storage.
//!
//! Records are named by a truncated SHA-256 of the API key so the raw key
//! never appears in a filename. Truncating to 16 hex characters (64 bits)
//! leaves a small collision probability; with a handful of keys per
//! installation this is an accepted, bounded risk.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Number of hex characters kept from the key digest.
pub const IDENTITY_HEX_LEN: usize = 16;

/// Stable storage identifier derived from an API key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyIdentity(String);

impl KeyIdentity {
    /// Hashes an API key into its storage identity.
    pub fn from_api_key(api_key: &str) -> Self {
        let digest = Sha256::digest(api_key.as_bytes());
        let mut hex = hex_encode(&digest);
        hex.truncate(IDENTITY_HEX_LEN);
        Self(hex)
    }

    /// The truncated hex digest, also used as the record file stem.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for KeyIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An API key reduced to what the store needs: its identity and a display preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedKey {
    pub identity: KeyIdentity,
    pub preview: String,
}

impl TrackedKey {
    pub fn from_api_key(api_key: &str) -> Self {
        Self {
            identity: KeyIdentity::from_api_key(api_key),
            preview: key_preview(api_key),
        }
    }
}

/// Redacts an API key to its first 8 and last 4 characters (`sk-abcde...wxyz`).
pub fn key_preview(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    let head: String = chars.iter().take(8).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Encodes bytes as lowercase hex string.
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
#[path = "tests/identity_tests.rs"]
mod tests;
