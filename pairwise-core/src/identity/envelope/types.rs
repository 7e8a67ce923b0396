use std::fmt::Debug;

use rst_common::standard::async_trait::async_trait;
use rst_common::standard::serde::{self, Deserialize, Serialize};
use rst_common::standard::serde_json;

use rstdev_domain::entity::ToJSON;
use rstdev_domain::BaseError;

use crate::identity::types::IdentityError;

/// `AnonCryptable` is a trait behavior for any payload that able to be anoncrypted
///
/// Its canonical form is the bytes produced by its `TryInto<Vec<u8>>` implementation,
/// and the decrypted bytes must be parsed back through `TryFrom<Vec<u8>>`
pub trait AnonCryptable:
    Clone
    + Debug
    + Send
    + Sync
    + TryInto<Vec<u8>, Error = IdentityError>
    + TryFrom<Vec<u8>, Error = IdentityError>
{
    /// `get_their_did` returns the `DID` of the recipient
    fn get_their_did(&self) -> String;
}

/// `AuthCryptable` is a trait behavior for any payload that able to be authcrypted
pub trait AuthCryptable:
    Clone
    + Debug
    + Send
    + Sync
    + TryInto<Vec<u8>, Error = IdentityError>
    + TryFrom<Vec<u8>, Error = IdentityError>
{
    /// `get_my_did` returns the `DID` of the sender
    fn get_my_did(&self) -> String;

    /// `get_their_did` returns the `DID` of the recipient
    fn get_their_did(&self) -> String;

    /// `set_their_did` used by the receiver side to stamp the authenticated sender `DID`
    fn set_their_did(&mut self, did: String);
}

/// `AnoncryptedMessage` is the envelope produced by the anoncrypt engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
pub struct AnoncryptedMessage {
    #[serde(with = "hex")]
    pub ciphertext: Vec<u8>,
    pub target_did: String,
}

impl AnoncryptedMessage {
    pub fn new(ciphertext: Vec<u8>, target_did: String) -> Self {
        Self {
            ciphertext,
            target_did,
        }
    }

    pub fn get_target_did(&self) -> String {
        self.target_did.to_owned()
    }
}

impl ToJSON for AnoncryptedMessage {
    fn to_json(&self) -> Result<String, BaseError> {
        serde_json::to_string(&self).map_err(|err| BaseError::ToJSONError(err.to_string()))
    }
}

impl TryInto<Vec<u8>> for AnoncryptedMessage {
    type Error = IdentityError;

    fn try_into(self) -> Result<Vec<u8>, Self::Error> {
        serde_json::to_vec(&self).map_err(|err| IdentityError::SerializationError(err.to_string()))
    }
}

impl TryFrom<Vec<u8>> for AnoncryptedMessage {
    type Error = IdentityError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        serde_json::from_slice(&value)
            .map_err(|err| IdentityError::DeserializationError(err.to_string()))
    }
}

/// `AuthcryptedMessage` is the envelope produced by the authcrypt engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
pub struct AuthcryptedMessage {
    #[serde(with = "hex")]
    pub ciphertext: Vec<u8>,
    pub sender_did: String,
}

impl AuthcryptedMessage {
    pub fn new(ciphertext: Vec<u8>, sender_did: String) -> Self {
        Self {
            ciphertext,
            sender_did,
        }
    }

    pub fn get_sender_did(&self) -> String {
        self.sender_did.to_owned()
    }
}

impl ToJSON for AuthcryptedMessage {
    fn to_json(&self) -> Result<String, BaseError> {
        serde_json::to_string(&self).map_err(|err| BaseError::ToJSONError(err.to_string()))
    }
}

impl TryInto<Vec<u8>> for AuthcryptedMessage {
    type Error = IdentityError;

    fn try_into(self) -> Result<Vec<u8>, Self::Error> {
        serde_json::to_vec(&self).map_err(|err| IdentityError::SerializationError(err.to_string()))
    }
}

impl TryFrom<Vec<u8>> for AuthcryptedMessage {
    type Error = IdentityError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        serde_json::from_slice(&value)
            .map_err(|err| IdentityError::DeserializationError(err.to_string()))
    }
}

/// `AuthcryptResult` pairs an authcrypted payload with its envelope, so the caller
/// able to persist both of them
#[derive(Debug, Clone)]
pub struct AuthcryptResult<T>
where
    T: AuthCryptable,
{
    pub payload: T,
    pub message: AuthcryptedMessage,
}

/// `EnvelopeAPI` is the main entrypoint to encrypt and decrypt the payloads exchanged
/// between two `DID` holders
#[async_trait]
pub trait EnvelopeAPI {
    /// `anon_encrypt` resolves the recipient key of `payload.get_their_did()` and seals
    /// the canonical bytes of the payload to it
    async fn anon_encrypt<T>(&self, payload: T) -> Result<AnoncryptedMessage, IdentityError>
    where
        T: AnonCryptable + 'static;

    /// `anon_decrypt` opens the message using the local key of `target_did`
    async fn anon_decrypt<T>(&self, message: AnoncryptedMessage) -> Result<T, IdentityError>
    where
        T: AnonCryptable + 'static;

    /// `auth_encrypt` encrypts the payload from `get_my_did` to `get_their_did`
    async fn auth_encrypt<T>(&self, payload: T) -> Result<AuthcryptedMessage, IdentityError>
    where
        T: AuthCryptable + 'static;

    /// `auth_decrypt` opens the message using the pairwise relationship of its `sender_did`
    ///
    /// The sender verkey revealed by the envelope must be the same key recorded in the
    /// pairwise, otherwise it fails with [`IdentityError::SenderKeyMismatch`]
    async fn auth_decrypt<T>(&self, message: AuthcryptedMessage) -> Result<T, IdentityError>
    where
        T: AuthCryptable + 'static;

    async fn auth_encrypt_result<T>(&self, payload: T) -> Result<AuthcryptResult<T>, IdentityError>
    where
        T: AuthCryptable + 'static;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ciphertext_json_hex() {
        let message = AnoncryptedMessage::new(vec![0xde, 0xad, 0xbe, 0xef], "did:prople:abc".to_string());
        let json = message.to_json();
        assert!(!json.is_err());
        assert_eq!(
            json.unwrap(),
            r#"{"ciphertext":"deadbeef","target_did":"did:prople:abc"}"#
        );

        let bytes: Vec<u8> = r#"{"ciphertext":"deadbeef","sender_did":"did:prople:abc"}"#
            .as_bytes()
            .to_vec();
        let parsed = AuthcryptedMessage::try_from(bytes);
        assert!(!parsed.is_err());
        assert_eq!(parsed.unwrap().ciphertext, vec![0xde, 0xad, 0xbe, 0xef])
    }

    #[test]
    fn test_parse_invalid_message() {
        let parsed = AnoncryptedMessage::try_from(b"invalid".to_vec());
        assert!(matches!(parsed, Err(IdentityError::DeserializationError(_))))
    }
}
