use rst_common::standard::serde::{self, Deserialize, Serialize};
use rst_common::with_errors::thiserror::{self, Error};

/// `IdentityError` provides all error types shared by the `identity` sub-domains
///
/// All variants use a `String` payload so the error stays cloneable and can travel
/// through the `JSON-RPC` and storage boundaries without loosing its kind.
#[derive(Debug, PartialEq, Clone, Error, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
pub enum IdentityError {
    #[error("unknown did: {0}")]
    UnknownDid(String),

    #[error("ledger unavailable: {0}")]
    LedgerUnavailable(String),

    #[error("ledger error: {0}")]
    LedgerError(String),

    #[error("pairwise already exists: {0}")]
    DuplicatePairwise(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("decryption error: {0}")]
    DecryptionError(String),

    #[error("encryption error: {0}")]
    EncryptionError(String),

    #[error("sender key mismatch, expected: {expected}, actual: {actual}")]
    SenderKeyMismatch { expected: String, actual: String },

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("deserialization error: {0}")]
    DeserializationError(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("signing error: {0}")]
    SigningError(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_key_mismatch_message() {
        let err = IdentityError::SenderKeyMismatch {
            expected: "aa".to_string(),
            actual: "bb".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "sender key mismatch, expected: aa, actual: bb"
        )
    }
}
