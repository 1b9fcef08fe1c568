//! Cryptographic primitives for Pact
//!
//! This module provides the cryptographic foundation for Pact's key agreement
//! pipeline:
//!
//! - **Key Agreement**: X25519 Diffie-Hellman between a local secret key and a
//!   peer public key
//! - **Key Derivation**: HKDF-SHA256 over the shared secret, bound to a salt
//!   and an application context string
//! - **Public Key Encoding**: fixed-layout DER (SubjectPublicKeyInfo) and PEM
//!
//! # Protocol Overview
//!
//! To agree on a symmetric key with a peer:
//! 1. Each party holds an X25519 keypair (`SecretKey`/`PublicKey`)
//! 2. The receiving party publishes a `PublicInfo` (public key, salt, context)
//! 3. The sender performs ECDH with their secret key and the published key
//! 4. Both sides run HKDF-SHA256 over the shared secret with the same salt and
//!    context info, yielding the identical 256-bit `SymmetricKey`
//!
//! The raw ECDH output never leaves this module: `SharedSecret` has no public
//! accessor and can only be consumed by [`derive_key`]. Parties confirm they
//! agree by comparing [`Fingerprint`]s (a SHA-256 digest of the key), never
//! the key itself.
//!
//! # Security Model
//!
//! - The salt must be at least 32 bytes and agreed out-of-band; it is not
//!   secret, only its integrity matters
//! - The context info is a non-secret domain-separation label
//! - Low-order peer public keys are rejected at agreement time rather than
//!   silently producing a predictable secret
//! - Secret material (`SecretKey`, `SharedSecret`, `SymmetricKey`) is never
//!   serialized, logged, or displayed; `SymmetricKey` compares in constant
//!   time and zeroizes on drop

mod context;
mod derive;
mod encode;
mod error;
mod keys;

pub use context::{Info, Salt, SALT_MIN_SIZE};
pub use derive::{
    agree_and_derive, derive_key, Fingerprint, PublicInfo, SymmetricKey, FINGERPRINT_SIZE,
    SYMMETRIC_KEY_SIZE,
};
pub use encode::{DER_PREFIX, PEM_FOOTER, PEM_HEADER, PUBLIC_KEY_DER_SIZE};
pub use error::CryptoError;
pub use keys::{PublicKey, SecretKey, SharedSecret, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE};
