use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use common::prelude::*;

/// Encode a raw public key as DER and PEM
#[derive(Args, Debug, Clone)]
pub struct Encode {
    /// Path to a raw 32-byte public key
    #[arg(long)]
    pub key: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("unable to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

impl crate::cli::op::Op for Encode {
    type Error = EncodeError;
    type Output = String;

    fn execute(&self) -> Result<Self::Output, Self::Error> {
        let raw = fs::read(&self.key).map_err(|source| EncodeError::Read {
            path: self.key.clone(),
            source,
        })?;
        let key = PublicKey::try_from(raw.as_slice())?;
        debug!(key = %key.to_hex(), "loaded public key");

        Ok(format!(
            "DER(hex): {}\nPem:\n{}",
            hex::encode(key.to_der()),
            key.to_pem(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::op::Op;

    #[test]
    fn test_encode_output_shape() {
        let dir = tempfile::tempdir().unwrap();
        let key_path = dir.path().join("pub.key");
        let key = SecretKey::generate().public();
        fs::write(&key_path, key.to_bytes()).unwrap();

        let output = Encode { key: key_path }.execute().unwrap();

        assert!(output.contains("DER(hex): 302a300506032b656e032100"));
        assert!(output.contains(&key.to_hex()));
        assert!(output.contains("-----BEGIN PUBLIC KEY-----"));
        assert!(output.contains("-----END PUBLIC KEY-----"));
    }

    #[test]
    fn test_encode_rejects_oversized_key() {
        let dir = tempfile::tempdir().unwrap();
        let key_path = dir.path().join("pub.key");
        fs::write(&key_path, [0u8; 33]).unwrap();

        let result = Encode { key: key_path }.execute();
        assert!(matches!(
            result,
            Err(EncodeError::Crypto(CryptoError::InvalidArgument(_)))
        ));
    }
}
