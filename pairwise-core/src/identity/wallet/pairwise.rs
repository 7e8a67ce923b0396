use rst_common::standard::chrono::serde::ts_seconds;
use rst_common::standard::chrono::{DateTime, Utc};
use rst_common::standard::serde::{self, Deserialize, Serialize};
use rst_common::standard::serde_json;

use rstdev_domain::entity::ToJSON;
use rstdev_domain::BaseError;

use crate::identity::keys::Verkey;
use crate::identity::types::IdentityError;

/// `Pairwise` is the relationship between a peer `DID` and one of our `DID`
///
/// A record never mutated after it created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
pub struct Pairwise {
    pub(crate) my_did: String,
    pub(crate) their_did: String,
    pub(crate) their_key: Verkey,
    pub(crate) metadata: String,

    #[serde(with = "ts_seconds")]
    pub(crate) created_at: DateTime<Utc>,
}

impl Pairwise {
    pub fn new(my_did: String, their_did: String, their_key: Verkey, metadata: String) -> Self {
        Self {
            my_did,
            their_did,
            their_key,
            metadata,
            created_at: Utc::now(),
        }
    }

    pub fn get_my_did(&self) -> String {
        self.my_did.to_owned()
    }

    pub fn get_their_did(&self) -> String {
        self.their_did.to_owned()
    }

    pub fn get_their_key(&self) -> Verkey {
        self.their_key.to_owned()
    }

    pub fn get_metadata(&self) -> String {
        self.metadata.to_owned()
    }

    pub fn get_created_at(&self) -> DateTime<Utc> {
        self.created_at.to_owned()
    }
}

impl ToJSON for Pairwise {
    fn to_json(&self) -> Result<String, BaseError> {
        let json_str =
            serde_json::to_string(&self).map_err(|err| BaseError::ToJSONError(err.to_string()))?;

        Ok(json_str)
    }
}

impl TryInto<Vec<u8>> for Pairwise {
    type Error = IdentityError;

    fn try_into(self) -> Result<Vec<u8>, Self::Error> {
        serde_json::to_vec(&self).map_err(|err| IdentityError::SerializationError(err.to_string()))
    }
}

impl TryFrom<Vec<u8>> for Pairwise {
    type Error = IdentityError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        serde_json::from_slice(&value)
            .map_err(|err| IdentityError::DeserializationError(err.to_string()))
    }
}
