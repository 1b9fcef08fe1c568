/**
 * Cryptographic types and operations.
 *  - Public and Private key implementations
 *  - X25519 key agreement and HKDF-SHA256 key derivation
 *  - DER/PEM encoding of public keys
 */
pub mod crypto;

pub mod prelude {
    pub use crate::crypto::{
        agree_and_derive, derive_key, CryptoError, Fingerprint, Info, PublicInfo, PublicKey, Salt,
        SecretKey, SharedSecret, SymmetricKey,
    };
}
