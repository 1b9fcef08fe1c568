use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use super::error::CryptoError;
use super::keys::{PublicKey, PUBLIC_KEY_SIZE};

/// ASN.1 SubjectPublicKeyInfo header for an X25519 public key
///
/// SEQUENCE(42) { SEQUENCE(5) { OID 1.3.101.110 }, BIT STRING(33, 0 unused) }.
/// A fixed constant for this curve and key size; reproduced byte-exact for
/// interoperability with standard tooling.
pub const DER_PREFIX: [u8; 12] = [
    0x30, 0x2a, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x6e, 0x03, 0x21, 0x00,
];

/// Total size of a DER-encoded public key in bytes
pub const PUBLIC_KEY_DER_SIZE: usize = DER_PREFIX.len() + PUBLIC_KEY_SIZE;

/// Opening line of the PEM envelope
pub const PEM_HEADER: &str = "-----BEGIN PUBLIC KEY-----";
/// Closing line of the PEM envelope
pub const PEM_FOOTER: &str = "-----END PUBLIC KEY-----";

const PEM_TAG: &str = "PUBLIC KEY";

impl PublicKey {
    /// Encode as a 44-byte DER SubjectPublicKeyInfo structure
    ///
    /// The constant [`DER_PREFIX`] followed by the 32 raw public key bytes.
    pub fn to_der(&self) -> [u8; PUBLIC_KEY_DER_SIZE] {
        let mut der = [0u8; PUBLIC_KEY_DER_SIZE];
        der[..DER_PREFIX.len()].copy_from_slice(&DER_PREFIX);
        der[DER_PREFIX.len()..].copy_from_slice(self.as_bytes());
        der
    }

    /// Encode as PEM text
    ///
    /// The base64 body is emitted on a single line between header and footer,
    /// with no 64-column wrapping.
    pub fn to_pem(&self) -> String {
        format!("{}\n{}\n{}", PEM_HEADER, BASE64.encode(self.to_der()), PEM_FOOTER)
    }

    /// Decode a public key from a DER SubjectPublicKeyInfo buffer
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidArgument`] for a wrong-length buffer and
    /// [`CryptoError::Decoding`] when the header does not identify an X25519
    /// public key.
    pub fn from_der(der: &[u8]) -> Result<Self, CryptoError> {
        if der.len() != PUBLIC_KEY_DER_SIZE {
            return Err(CryptoError::InvalidArgument(format!(
                "invalid DER public key size, expected {}, got {}",
                PUBLIC_KEY_DER_SIZE,
                der.len()
            )));
        }
        if der[..DER_PREFIX.len()] != DER_PREFIX {
            return Err(CryptoError::Decoding(
                "unexpected SubjectPublicKeyInfo header".into(),
            ));
        }
        Self::try_from(&der[DER_PREFIX.len()..])
    }

    /// Decode a public key from PEM text
    ///
    /// Accepts both single-line and 64-column-wrapped base64 bodies.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Decoding`] if the envelope is malformed or the
    /// tag is not `PUBLIC KEY`, and the errors of [`PublicKey::from_der`] for
    /// the payload.
    pub fn from_pem(text: &str) -> Result<Self, CryptoError> {
        let parsed =
            pem::parse(text).map_err(|e| CryptoError::Decoding(format!("bad PEM: {e}")))?;
        if parsed.tag() != PEM_TAG {
            return Err(CryptoError::Decoding(format!(
                "invalid PEM tag, expected {}, got {}",
                PEM_TAG,
                parsed.tag()
            )));
        }
        Self::from_der(parsed.contents())
    }
}
