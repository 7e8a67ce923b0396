use rst_common::standard::chrono::serde::ts_seconds;
use rst_common::standard::chrono::{DateTime, Utc};
use rst_common::standard::serde::{self, Deserialize, Serialize};
use rst_common::standard::serde_json;

use prople_pairwise_core::identity::envelope::types::AuthCryptable;
use prople_pairwise_core::identity::types::IdentityError;

/// `TextMessage` is a plain text message sent through an established pairwise channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
pub struct TextMessage {
    pub my_did: String,
    pub their_did: String,
    pub content: String,

    #[serde(with = "ts_seconds")]
    pub sent_at: DateTime<Utc>,
}

impl TextMessage {
    pub fn new(my_did: String, their_did: String, content: String) -> Self {
        Self {
            my_did,
            their_did,
            content,
            sent_at: Utc::now(),
        }
    }
}

impl TryInto<Vec<u8>> for TextMessage {
    type Error = IdentityError;

    fn try_into(self) -> Result<Vec<u8>, Self::Error> {
        serde_json::to_vec(&self).map_err(|err| IdentityError::SerializationError(err.to_string()))
    }
}

impl TryFrom<Vec<u8>> for TextMessage {
    type Error = IdentityError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        serde_json::from_slice(&value)
            .map_err(|err| IdentityError::DeserializationError(err.to_string()))
    }
}

impl AuthCryptable for TextMessage {
    fn get_my_did(&self) -> String {
        self.my_did.to_owned()
    }

    fn get_their_did(&self) -> String {
        self.their_did.to_owned()
    }

    fn set_their_did(&mut self, did: String) {
        self.their_did = did;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_sender() {
        let mut msg = TextMessage::new(
            "did:prople:me".to_string(),
            "did:prople:peer".to_string(),
            "hello".to_string(),
        );

        msg.set_their_did("did:prople:sender".to_string());
        assert_eq!(msg.get_their_did(), "did:prople:sender");
        assert_eq!(msg.get_my_did(), "did:prople:me");
    }

    #[test]
    fn test_parse_invalid_bytes() {
        let msg = TextMessage::try_from(b"invalid".to_vec());
        assert!(matches!(msg, Err(IdentityError::DeserializationError(_))))
    }
}
