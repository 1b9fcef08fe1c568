/// Errors that can occur in the key agreement and derivation pipeline
///
/// Every fallible operation in this module reports one of these kinds; all of
/// them are deterministic functions of the input, so retrying without
/// correcting the input never helps. Entropy-source failure during key or
/// salt generation is fatal and deliberately outside this taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// Malformed or too-short raw byte input (wrong-length key, short salt)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Key agreement failed or produced a degenerate, rejected secret
    #[error("key agreement error: {0}")]
    Agreement(String),
    /// A buffer or text envelope does not decode as a valid public key
    #[error("decoding error: {0}")]
    Decoding(String),
}
