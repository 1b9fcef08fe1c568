use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

use super::error::CryptoError;

/// Minimum salt length in bytes required to preserve derivation strength
pub const SALT_MIN_SIZE: usize = 32;

/// Randomization input to the key derivation
///
/// The salt is not secret, but both parties must use the same value; it is
/// typically generated by one side and published alongside its public key.
/// Constructed only through [`Salt::from_raw`], which enforces the minimum
/// length, or [`Salt::generate`]. Immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salt(Vec<u8>);

impl Salt {
    /// Create a salt from raw bytes
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidArgument`] if fewer than
    /// [`SALT_MIN_SIZE`] bytes are supplied. No upper bound is enforced.
    pub fn from_raw(raw: &[u8]) -> Result<Self, CryptoError> {
        if raw.len() < SALT_MIN_SIZE {
            return Err(CryptoError::InvalidArgument("too short salt".into()));
        }
        Ok(Self(raw.to_vec()))
    }

    /// Generate a fresh minimum-length salt using a cryptographically secure RNG
    pub fn generate() -> Self {
        let mut buff = [0u8; SALT_MIN_SIZE];
        getrandom::getrandom(&mut buff).expect("failed to generate random bytes");
        Self(buff.to_vec())
    }

    /// Get a reference to the raw salt bytes
    pub fn raw(&self) -> &[u8] {
        &self.0
    }

    /// Render the salt as base64 for display or transport
    ///
    /// The rendering is never used in any cryptographic computation.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.0)
    }
}

/// Application context bound into the key derivation
///
/// An opaque domain-separation label built from three fields concatenated in
/// a fixed order: application identifier, code name, and use-case label. Two
/// parties derive the same key only if they bind the same context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info(Vec<u8>);

impl Info {
    /// Build a context from its three sub-fields
    ///
    /// Pure concatenation in argument order; never fails.
    pub fn build(fqdn: &[u8], code_name: &[u8], use_case: &[u8]) -> Self {
        let mut info = Vec::with_capacity(fqdn.len() + code_name.len() + use_case.len());
        info.extend_from_slice(fqdn);
        info.extend_from_slice(code_name);
        info.extend_from_slice(use_case);
        Self(info)
    }

    /// Get a reference to the raw context bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Render the context as base64 for display or transport
    ///
    /// The rendering is never used in any cryptographic computation.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.0)
    }
}
