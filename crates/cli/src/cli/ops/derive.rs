use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use common::prelude::*;

/// Derive a shared symmetric key from a peer's published public key
///
/// Generates a fresh local keypair, agrees with the peer key read from disk,
/// and prints everything the peer needs to derive the same key: the context
/// and salt in base64, the local public key as PEM, and the fingerprint of
/// the derived key for out-of-band confirmation.
#[derive(Args, Debug, Clone)]
pub struct Derive {
    /// Path to the peer's raw 32-byte public key
    #[arg(long)]
    pub peer_key: PathBuf,

    /// Path to the shared salt (at least 32 bytes); freshly generated when omitted
    #[arg(long)]
    pub salt: Option<PathBuf>,

    /// Application identifier bound into the derivation context
    #[arg(long, default_value = "com.github.takanoriyanagitani")]
    pub fqdn: String,

    /// Code or feature name bound into the derivation context
    #[arg(long, default_value = "pubkey2derived")]
    pub code_name: String,

    /// Use-case label bound into the derivation context
    #[arg(long, default_value = "alice-bob")]
    pub use_case: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DeriveError {
    #[error("unable to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

fn read_bytes(path: &PathBuf) -> Result<Vec<u8>, DeriveError> {
    fs::read(path).map_err(|source| DeriveError::Read {
        path: path.clone(),
        source,
    })
}

impl crate::cli::op::Op for Derive {
    type Error = DeriveError;
    type Output = String;

    fn execute(&self) -> Result<Self::Output, Self::Error> {
        let raw = read_bytes(&self.peer_key)?;
        let peer = PublicKey::try_from(raw.as_slice())?;
        debug!(peer = %peer.to_hex(), "loaded peer public key");

        let salt = match &self.salt {
            Some(path) => Salt::from_raw(&read_bytes(path)?)?,
            None => Salt::generate(),
        };

        let info = Info::build(
            self.fqdn.as_bytes(),
            self.code_name.as_bytes(),
            self.use_case.as_bytes(),
        );

        let my_key = SecretKey::generate();
        let record = PublicInfo::new(peer, salt, info);
        let symmetric = record.to_symmetric_key(&my_key)?;
        debug!("derived symmetric key");

        Ok(format!(
            "Shared Info(base64): {}\nSalt(base64): {}\nMy Public Key(Pem):\n{}\nFingerprint(SHA-256): {}",
            record.info.to_base64(),
            record.salt.to_base64(),
            my_key.public().to_pem(),
            symmetric.fingerprint(),
        ))
    }
}
