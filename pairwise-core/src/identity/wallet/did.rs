use rst_common::standard::chrono::serde::ts_seconds;
use rst_common::standard::chrono::{DateTime, Utc};
use rst_common::standard::serde::{self, Deserialize, Serialize};
use rst_common::standard::serde_json;

use crate::identity::keys::{KeyPair, Verkey};
use crate::identity::types::IdentityError;

use super::types::DidInfo;

/// `DidRecord` is the wallet entity of a `DID` minted by this agent
///
/// This is the only entity that carries private key material, it must only be handled by
/// the wallet and its repository
#[derive(Clone, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
pub struct DidRecord {
    pub(crate) did: String,
    pub(crate) verkey: Verkey,
    pub(crate) seed: String,

    #[serde(with = "ts_seconds")]
    pub(crate) created_at: DateTime<Utc>,
}

impl DidRecord {
    pub fn generate() -> Self {
        let keypair = KeyPair::generate();
        Self {
            did: keypair.did(),
            verkey: keypair.verkey(),
            seed: keypair.seed_hex(),
            created_at: Utc::now(),
        }
    }

    pub fn get_did(&self) -> String {
        self.did.to_owned()
    }

    pub fn get_verkey(&self) -> Verkey {
        self.verkey.to_owned()
    }

    pub fn get_created_at(&self) -> DateTime<Utc> {
        self.created_at.to_owned()
    }

    pub(crate) fn keypair(&self) -> Result<KeyPair, IdentityError> {
        KeyPair::from_seed_hex(&self.seed)
    }

    pub fn to_info(&self) -> DidInfo {
        DidInfo {
            did: self.get_did(),
            verkey: self.get_verkey(),
        }
    }
}

impl std::fmt::Debug for DidRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DidRecord")
            .field("did", &self.did)
            .field("verkey", &self.verkey)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

impl TryInto<Vec<u8>> for DidRecord {
    type Error = IdentityError;

    fn try_into(self) -> Result<Vec<u8>, Self::Error> {
        serde_json::to_vec(&self).map_err(|err| IdentityError::SerializationError(err.to_string()))
    }
}

impl TryFrom<Vec<u8>> for DidRecord {
    type Error = IdentityError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        serde_json::from_slice(&value)
            .map_err(|err| IdentityError::DeserializationError(err.to_string()))
    }
}
