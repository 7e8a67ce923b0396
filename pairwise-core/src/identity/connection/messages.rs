use rst_common::standard::serde::{self, Deserialize, Serialize};
use rst_common::standard::serde_json;

use rstdev_domain::entity::ToJSON;
use rstdev_domain::BaseError;

use crate::identity::envelope::types::AnonCryptable;
use crate::identity::keys::Verkey;
use crate::identity::types::IdentityError;

/// `ConnectionRequest` is an invitation sent by the inviter
///
/// The `nonce` correlates the request and its response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
pub struct ConnectionRequest {
    pub did: String,
    pub nonce: String,
}

impl ConnectionRequest {
    pub fn new(did: String, nonce: String) -> Self {
        Self { did, nonce }
    }
}

impl ToJSON for ConnectionRequest {
    fn to_json(&self) -> Result<String, BaseError> {
        serde_json::to_string(&self).map_err(|err| BaseError::ToJSONError(err.to_string()))
    }
}

impl TryInto<Vec<u8>> for ConnectionRequest {
    type Error = IdentityError;

    fn try_into(self) -> Result<Vec<u8>, Self::Error> {
        serde_json::to_vec(&self).map_err(|err| IdentityError::SerializationError(err.to_string()))
    }
}

impl TryFrom<Vec<u8>> for ConnectionRequest {
    type Error = IdentityError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        serde_json::from_slice(&value)
            .map_err(|err| IdentityError::DeserializationError(err.to_string()))
    }
}

/// `ConnectionResponse` carries the freshly minted `DID` of the invitee back to the
/// inviter, it always travels anoncrypted to `target_did`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
pub struct ConnectionResponse {
    pub did: String,
    pub verkey: Verkey,
    pub nonce: String,
    pub target_did: String,
}

impl TryInto<Vec<u8>> for ConnectionResponse {
    type Error = IdentityError;

    fn try_into(self) -> Result<Vec<u8>, Self::Error> {
        serde_json::to_vec(&self).map_err(|err| IdentityError::SerializationError(err.to_string()))
    }
}

impl TryFrom<Vec<u8>> for ConnectionResponse {
    type Error = IdentityError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        serde_json::from_slice(&value)
            .map_err(|err| IdentityError::DeserializationError(err.to_string()))
    }
}

impl AnonCryptable for ConnectionResponse {
    fn get_their_did(&self) -> String {
        self.target_did.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_canonical_order() {
        let response = ConnectionResponse {
            did: "did:prople:b".to_string(),
            verkey: Verkey::from("aa".to_string()),
            nonce: "n".to_string(),
            target_did: "did:prople:a".to_string(),
        };

        let bytes: Vec<u8> = response.try_into().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"did":"did:prople:b","verkey":"aa","nonce":"n","target_did":"did:prople:a"}"#
        )
    }

    #[test]
    fn test_request_json() {
        let request = ConnectionRequest::new("did:prople:a".to_string(), "n".to_string());
        let json = request.to_json();
        assert!(!json.is_err());

        let parsed = ConnectionRequest::try_from(json.unwrap().into_bytes());
        assert!(!parsed.is_err());
        assert_eq!(parsed.unwrap(), request)
    }
}
