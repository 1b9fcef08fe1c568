use std::fmt;

use hkdf::Hkdf;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::context::{Info, Salt};
use super::error::CryptoError;
use super::keys::{PublicKey, SecretKey, SharedSecret};

/// Size of the derived symmetric key in bytes (256 bits)
pub const SYMMETRIC_KEY_SIZE: usize = 32;
/// Size of a key fingerprint in bytes (SHA-256)
pub const FINGERPRINT_SIZE: usize = 32;

/// A 256-bit symmetric key derived from a key agreement
///
/// The final output of the pipeline. Treated as sensitive material: it
/// compares in constant time, zeroizes on drop, and has no serialized or
/// displayed form. To confirm two parties derived the same key, compare
/// [`Fingerprint`]s instead of exchanging the key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey([u8; SYMMETRIC_KEY_SIZE]);

impl SymmetricKey {
    /// Get a reference to the raw key bytes for authenticated use
    pub fn as_bytes(&self) -> &[u8; SYMMETRIC_KEY_SIZE] {
        &self.0
    }

    /// Compute the SHA-256 fingerprint of this key
    ///
    /// The fingerprint is a human-checkable confirmation value, safe to
    /// display; it is never a substitute for the key itself.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint(Sha256::digest(self.0).into())
    }
}

impl PartialEq for SymmetricKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for SymmetricKey {}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// SHA-256 digest of a derived symmetric key
///
/// Lets two parties confirm out-of-band that they derived the same key
/// without revealing the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fingerprint([u8; FINGERPRINT_SIZE]);

impl Fingerprint {
    /// Get a reference to the raw digest bytes
    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_SIZE] {
        &self.0
    }

    /// Render the fingerprint as lowercase hex
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Derive a symmetric key from an agreement secret, salt, and context
///
/// Runs HKDF-SHA256 (extract then expand) with the shared secret as input
/// keying material, the salt as HKDF salt, and the context as the HKDF info
/// parameter. Output length is fixed at 32 bytes. Deterministic: identical
/// inputs always yield the identical key.
///
/// Consumes the [`SharedSecret`]; a fresh agreement is required for every
/// derivation.
pub fn derive_key(secret: SharedSecret, salt: &Salt, info: &Info) -> SymmetricKey {
    let hk = Hkdf::<Sha256>::new(Some(salt.raw()), secret.raw());
    let mut okm = [0u8; SYMMETRIC_KEY_SIZE];
    hk.expand(info.as_bytes(), &mut okm)
        .expect("32 bytes is a valid HKDF-SHA256 output length");
    SymmetricKey(okm)
}

/// Agree with a peer and derive the symmetric key in one step
///
/// Composes [`SecretKey::agree`] and [`derive_key`], propagating agreement
/// failures.
///
/// # Errors
///
/// Returns [`CryptoError::Agreement`] if the peer key is rejected as
/// degenerate.
pub fn agree_and_derive(
    secret_key: &SecretKey,
    peer: &PublicKey,
    salt: &Salt,
    info: &Info,
) -> Result<SymmetricKey, CryptoError> {
    let shared = secret_key.agree(peer)?;
    Ok(derive_key(shared, salt, info))
}

/// Everything a peer publishes to allow a sender to derive the shared key
///
/// Bundles a public key with the salt and context intended for derivation
/// with that key. Contains public material only, so it is freely
/// serializable.
///
/// # Examples
///
/// ```ignore
/// // Receiver publishes their half of the agreement
/// let record = PublicInfo::new(receiver.public(), salt, info);
///
/// // Sender derives the shared key from the published record
/// let key = record.to_symmetric_key(&sender)?;
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicInfo {
    /// The publishing peer's public key
    pub public_key: PublicKey,
    /// Salt to use when deriving with this key
    pub salt: Salt,
    /// Context to bind into the derivation
    pub info: Info,
}

impl PublicInfo {
    /// Bundle a public key with its derivation salt and context
    pub fn new(public_key: PublicKey, salt: Salt, info: Info) -> Self {
        Self {
            public_key,
            salt,
            info,
        }
    }

    /// Derive the shared symmetric key using the local secret key
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Agreement`] if the published key is rejected as
    /// degenerate.
    pub fn to_symmetric_key(&self, secret_key: &SecretKey) -> Result<SymmetricKey, CryptoError> {
        agree_and_derive(secret_key, &self.public_key, &self.salt, &self.info)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // Golden vector: alice = 0x01 * 32, bob = 0x02 * 32, salt = 0x00 * 32,
    // info = "example". Recorded once, computed independently of this crate.
    const GOLDEN_KEY: &str = "5c247dc1fec6df6569d53e9bbd97cd3672cffa393fc668e368b3ae7815f738d3";
    const GOLDEN_FINGERPRINT: &str =
        "fc99b5126c9c5c98a750e22e7cb7634f7dbdd17d4991850dba82ef53951cc671";

    fn fixture() -> (SecretKey, SecretKey, Salt, Info) {
        let alice = SecretKey::from([1u8; 32]);
        let bob = SecretKey::from([2u8; 32]);
        let salt = Salt::from_raw(&[0u8; 32]).unwrap();
        let info = Info::build(b"example", b"", b"");
        (alice, bob, salt, info)
    }

    #[test]
    fn test_derivation_golden_vector() {
        let (alice, bob, salt, info) = fixture();
        let key = agree_and_derive(&alice, &bob.public(), &salt, &info).unwrap();
        assert_eq!(hex::encode(key.as_bytes()), GOLDEN_KEY);
    }

    #[test]
    fn test_derivation_symmetry() {
        let (alice, bob, salt, info) = fixture();
        let key_a = agree_and_derive(&alice, &bob.public(), &salt, &info).unwrap();
        let key_b = agree_and_derive(&bob, &alice.public(), &salt, &info).unwrap();
        assert_eq!(key_a, key_b);
    }

    #[test]
    fn test_derivation_determinism() {
        let (alice, bob, salt, info) = fixture();

        let first = derive_key(alice.agree(&bob.public()).unwrap(), &salt, &info);
        let second = derive_key(alice.agree(&bob.public()).unwrap(), &salt, &info);
        assert_eq!(first, second);
    }

    #[test]
    fn test_context_separates_keys() {
        let (alice, bob, salt, info) = fixture();
        let other_info = Info::build(b"example", b"v2", b"");

        let key = agree_and_derive(&alice, &bob.public(), &salt, &info).unwrap();
        let other = agree_and_derive(&alice, &bob.public(), &salt, &other_info).unwrap();
        assert_ne!(key, other);
    }

    #[test]
    fn test_fingerprint_golden_vector() {
        let (alice, bob, salt, info) = fixture();
        let key = agree_and_derive(&alice, &bob.public(), &salt, &info).unwrap();

        let fingerprint = key.fingerprint();
        assert_eq!(fingerprint.to_hex(), GOLDEN_FINGERPRINT);
        assert_eq!(fingerprint.to_string(), GOLDEN_FINGERPRINT);
    }

    #[test]
    fn test_agree_and_derive_rejects_low_order_point() {
        let (alice, _, salt, info) = fixture();
        let degenerate = PublicKey::from([0u8; 32]);

        assert!(matches!(
            agree_and_derive(&alice, &degenerate, &salt, &info),
            Err(CryptoError::Agreement(_))
        ));
    }

    #[test]
    fn test_public_info_matches_long_hand_pipeline() {
        let (alice, bob, salt, info) = fixture();

        let record = PublicInfo::new(bob.public(), salt.clone(), info.clone());
        let via_record = record.to_symmetric_key(&alice).unwrap();
        let long_hand = agree_and_derive(&alice, &bob.public(), &salt, &info).unwrap();
        assert_eq!(via_record, long_hand);
    }

    #[test]
    fn test_public_info_serde_roundtrip() {
        let (alice, bob, salt, info) = fixture();
        let record = PublicInfo::new(bob.public(), salt, info);

        let json = serde_json::to_string(&record).unwrap();
        let recovered: PublicInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(record, recovered);

        // the recovered record still derives the same key
        let key = record.to_symmetric_key(&alice).unwrap();
        let recovered_key = recovered.to_symmetric_key(&alice).unwrap();
        assert_eq!(key, recovered_key);
    }

    #[test]
    fn test_symmetric_key_debug_redacted() {
        let (alice, bob, salt, info) = fixture();
        let key = agree_and_derive(&alice, &bob.public(), &salt, &info).unwrap();
        assert!(format!("{:?}", key).contains("REDACTED"));
    }
}
