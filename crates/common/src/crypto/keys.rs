use std::fmt;

use serde::{Deserialize, Serialize};
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};

use super::error::CryptoError;

/// Size of an X25519 private key in bytes
pub const PRIVATE_KEY_SIZE: usize = 32;
/// Size of an X25519 public key in bytes
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Public key for key agreement
///
/// A thin wrapper around an X25519 (Montgomery curve) public key. May be
/// freely shared and copied; peers exchange these to derive a shared
/// symmetric key.
///
/// # Examples
///
/// ```ignore
/// let secret_key = SecretKey::generate();
/// let public_key = secret_key.public();
///
/// // Serialize to hex for storage/transmission
/// let hex = public_key.to_hex();
/// let recovered = PublicKey::from_hex(&hex)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(pub(crate) X25519PublicKey);

impl From<[u8; PUBLIC_KEY_SIZE]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        PublicKey(X25519PublicKey::from(bytes))
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = CryptoError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(CryptoError::InvalidArgument(format!(
                "invalid public key size, expected {}, got {}",
                PUBLIC_KEY_SIZE,
                bytes.len()
            )));
        }
        let mut buff = [0; PUBLIC_KEY_SIZE];
        buff.copy_from_slice(bytes);
        Ok(buff.into())
    }
}

impl PublicKey {
    /// Parse a public key from a hexadecimal string
    ///
    /// Accepts both plain hex and "0x"-prefixed hex strings.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let mut buff = [0; PUBLIC_KEY_SIZE];
        hex::decode_to_slice(hex, &mut buff)
            .map_err(|_| CryptoError::InvalidArgument("public key hex decode error".into()))?;
        Ok(buff.into())
    }

    /// Convert public key to raw bytes
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0.to_bytes()
    }

    /// Get a reference to the raw public key bytes
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        self.0.as_bytes()
    }

    /// Convert public key to hexadecimal string
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

/// Secret key for key agreement
///
/// The private half of an X25519 keypair. Never serialized, logged, or
/// displayed; it exists only in memory for the lifetime of the holding
/// process.
#[derive(Clone)]
pub struct SecretKey(StaticSecret);

impl From<[u8; PRIVATE_KEY_SIZE]> for SecretKey {
    fn from(secret: [u8; PRIVATE_KEY_SIZE]) -> Self {
        Self(StaticSecret::from(secret))
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").field("key", &"[REDACTED]").finish()
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = CryptoError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(CryptoError::InvalidArgument(format!(
                "invalid private key size, expected {}, got {}",
                PRIVATE_KEY_SIZE,
                bytes.len()
            )));
        }
        let mut buff = [0; PRIVATE_KEY_SIZE];
        buff.copy_from_slice(bytes);
        Ok(buff.into())
    }
}

impl SecretKey {
    /// Generate a new random secret key using a cryptographically secure RNG
    pub fn generate() -> Self {
        let mut bytes = [0u8; PRIVATE_KEY_SIZE];
        getrandom::getrandom(&mut bytes).expect("failed to generate random bytes");
        Self::from(bytes)
    }

    /// Derive the public key from this secret key
    pub fn public(&self) -> PublicKey {
        PublicKey(X25519PublicKey::from(&self.0))
    }

    /// Perform X25519 Diffie-Hellman key agreement with a peer public key
    ///
    /// Both directions produce the same secret: `a.agree(&B)` equals
    /// `b.agree(&A)` for keypairs (a, A) and (b, B).
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Agreement`] if the peer key is a low-order
    /// point, which would yield an all-zero, attacker-predictable secret.
    pub fn agree(&self, peer: &PublicKey) -> Result<SharedSecret, CryptoError> {
        let shared = self.0.diffie_hellman(&peer.0);
        if !shared.was_contributory() {
            return Err(CryptoError::Agreement(
                "peer public key is a low-order point".into(),
            ));
        }
        Ok(SharedSecret(shared))
    }
}

/// Ephemeral output of X25519 key agreement
///
/// Opaque by construction: the raw secret is reachable only inside this
/// module, so callers can never observe it directly. Pass it to
/// [`derive_key`](super::derive_key) to obtain usable key material.
pub struct SharedSecret(x25519_dalek::SharedSecret);

impl SharedSecret {
    /// Raw agreement output, for HKDF input keying material only.
    pub(crate) fn raw(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
