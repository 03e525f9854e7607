//! Paste keys and their wire identifiers.
//!
//! A paste is addressed by a 6-byte random key. Clients only ever see the
//! key's URL-safe, unpadded base64 form: 8 characters from `[A-Za-z0-9_-]`.
//!
//! ```rust
//! use quickpaste::PasteKey;
//!
//! let key = PasteKey::generate();
//! let id = key.encode();
//! assert_eq!(id.len(), 8);
//! assert_eq!(PasteKey::decode(&id).unwrap(), key);
//! ```

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use thiserror::Error;

/// Length in bytes of every generated key.
pub const KEY_LEN: usize = 6;

/// Length in characters of the wire identifier of a full-length key.
pub const ENCODED_LEN: usize = 8;

/// Why an identifier was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidKey {
    #[error("identifier is not url-safe base64: {0}")]
    Malformed(String),

    #[error("identifier decodes to more than 6 bytes")]
    TooLong,
}

/// The binary key of a paste.
///
/// Keys built by [`PasteKey::generate`] are always [`KEY_LEN`] bytes.
/// Keys decoded from client input may be shorter; such keys are valid but
/// never match a stored record.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct PasteKey {
    bytes: [u8; KEY_LEN],
    len: u8,
}

impl PasteKey {
    /// Draws a fresh key from the thread-local CSPRNG.
    ///
    /// No uniqueness check is made against existing pastes: with 48 bits of
    /// entropy a collision is possible but vanishingly rare, and a colliding
    /// create replaces the older paste.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rand::rng().fill_bytes(&mut bytes);
        Self { bytes, len: KEY_LEN as u8 }
    }

    /// Wire identifier for this key.
    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.as_bytes())
    }

    /// Parses a wire identifier taken from untrusted input.
    ///
    /// Either the whole identifier decodes to at most [`KEY_LEN`] bytes or it
    /// is rejected; there is no partial acceptance.
    pub fn decode(id: &str) -> Result<Self, InvalidKey> {
        // Anything longer cannot decode to KEY_LEN bytes or fewer.
        if id.len() > ENCODED_LEN {
            return Err(InvalidKey::TooLong);
        }
        let decoded = URL_SAFE_NO_PAD
            .decode(id)
            .map_err(|e| InvalidKey::Malformed(e.to_string()))?;
        Self::from_slice(&decoded)
    }

    /// Builds a key from raw bytes, rejecting anything over [`KEY_LEN`].
    pub fn from_slice(raw: &[u8]) -> Result<Self, InvalidKey> {
        if raw.len() > KEY_LEN {
            return Err(InvalidKey::TooLong);
        }
        let mut bytes = [0u8; KEY_LEN];
        bytes[..raw.len()].copy_from_slice(raw);
        Ok(Self { bytes, len: raw.len() as u8 })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

impl FromStr for PasteKey {
    type Err = InvalidKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for PasteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for PasteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PasteKey({})", self.encode())
    }
}
