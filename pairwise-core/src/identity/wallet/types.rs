use rst_common::standard::async_trait::async_trait;
use rst_common::standard::chrono::serde::ts_seconds;
use rst_common::standard::chrono::{DateTime, Utc};
use rst_common::standard::serde::{self, Deserialize, Serialize};
use rst_common::standard::serde_json;

use crate::identity::keys::Verkey;
use crate::identity::types::IdentityError;

use super::{DidRecord, Pairwise};

/// `DidInfo` is the public projection of a `DID` minted by the wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
pub struct DidInfo {
    pub did: String,
    pub verkey: Verkey,
}

/// `TheirDid` is a peer `DID` binding recorded through [`WalletAPI::store_their_did`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
pub struct TheirDid {
    pub did: String,
    pub verkey: Verkey,
}

impl TheirDid {
    pub fn new(did: String, verkey: Verkey) -> Self {
        Self { did, verkey }
    }
}

impl TryInto<Vec<u8>> for TheirDid {
    type Error = IdentityError;

    fn try_into(self) -> Result<Vec<u8>, Self::Error> {
        serde_json::to_vec(&self).map_err(|err| IdentityError::SerializationError(err.to_string()))
    }
}

impl TryFrom<Vec<u8>> for TheirDid {
    type Error = IdentityError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        serde_json::from_slice(&value)
            .map_err(|err| IdentityError::DeserializationError(err.to_string()))
    }
}

/// `PendingRequest` is the inviter side bookkeeping of a sent connection request
///
/// It will be consumed exactly once when its connection response arrives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
pub struct PendingRequest {
    pub nonce: String,
    pub my_did: String,

    #[serde(with = "ts_seconds")]
    pub created_at: DateTime<Utc>,
}

impl PendingRequest {
    pub fn new(nonce: String, my_did: String) -> Self {
        Self {
            nonce,
            my_did,
            created_at: Utc::now(),
        }
    }
}

impl TryInto<Vec<u8>> for PendingRequest {
    type Error = IdentityError;

    fn try_into(self) -> Result<Vec<u8>, Self::Error> {
        serde_json::to_vec(&self).map_err(|err| IdentityError::SerializationError(err.to_string()))
    }
}

impl TryFrom<Vec<u8>> for PendingRequest {
    type Error = IdentityError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        serde_json::from_slice(&value)
            .map_err(|err| IdentityError::DeserializationError(err.to_string()))
    }
}

/// `WalletAPI` is the main trait behavior of the wallet
#[async_trait]
pub trait WalletAPI: Send + Sync {
    /// `new_did` generates and persists a fresh key pair, its `DID` derived from the verkey
    async fn new_did(&self) -> Result<DidInfo, IdentityError>;

    /// `store_their_did` upserts a peer binding, the `verkey` must be a valid `Ed25519` key
    async fn store_their_did(&self, did: String, verkey: Verkey) -> Result<(), IdentityError>;

    /// `create_pairwise` records a new relationship between a peer `DID` and a local `DID`
    ///
    /// There is at most one relationship for each `their_did`, a second call will be
    /// rejected with [`IdentityError::DuplicatePairwise`]
    async fn create_pairwise(
        &self,
        their_did: String,
        my_did: String,
        metadata: String,
    ) -> Result<Pairwise, IdentityError>;

    async fn get_pairwise_by_their_did(&self, their_did: String)
        -> Result<Pairwise, IdentityError>;

    async fn list_pairwise(&self) -> Result<Vec<Pairwise>, IdentityError>;

    async fn key_for_local_did(&self, did: String) -> Result<Option<Verkey>, IdentityError>;
    async fn key_for_their_did(&self, did: String) -> Result<Option<Verkey>, IdentityError>;

    async fn anon_decrypt(&self, my_did: String, ciphertext: Vec<u8>)
        -> Result<Vec<u8>, IdentityError>;

    /// `auth_encrypt` makes sure the key pair of `my_did` is the owner of `my_verkey` before
    /// encrypting the message
    async fn auth_encrypt(
        &self,
        my_did: String,
        my_verkey: Verkey,
        their_verkey: Verkey,
        message: Vec<u8>,
    ) -> Result<Vec<u8>, IdentityError>;

    /// `auth_decrypt` returns the revealed sender verkey and the plain message
    async fn auth_decrypt(
        &self,
        my_did: String,
        ciphertext: Vec<u8>,
    ) -> Result<(Verkey, Vec<u8>), IdentityError>;

    /// `sign` returns the hex encoded signature of the message signed by the key of `did`
    async fn sign(&self, did: String, message: Vec<u8>) -> Result<String, IdentityError>;

    async fn save_connection_request(&self, pending: PendingRequest) -> Result<(), IdentityError>;

    /// `get_connection_request` loads the pending request of the given `nonce` without
    /// consuming it
    async fn get_connection_request(&self, nonce: String)
        -> Result<PendingRequest, IdentityError>;

    /// `take_connection_request` loads and removes the pending request of the given `nonce`
    async fn take_connection_request(&self, nonce: String)
        -> Result<PendingRequest, IdentityError>;
}

/// `RepoBuilder` is the persistent storage abstraction used by the wallet
///
/// All records keyed by `DID` strings, except for the pending requests which keyed by
/// their nonce
#[async_trait]
pub trait RepoBuilder: Send + Sync {
    async fn save_did(&self, record: &DidRecord) -> Result<(), IdentityError>;
    async fn get_did(&self, did: String) -> Result<Option<DidRecord>, IdentityError>;

    async fn save_their_did(&self, their_did: &TheirDid) -> Result<(), IdentityError>;
    async fn get_their_did(&self, did: String) -> Result<Option<TheirDid>, IdentityError>;

    async fn save_pairwise(&self, pairwise: &Pairwise) -> Result<(), IdentityError>;
    async fn get_pairwise(&self, their_did: String) -> Result<Option<Pairwise>, IdentityError>;
    async fn list_pairwise(&self) -> Result<Vec<Pairwise>, IdentityError>;

    async fn save_pending_request(&self, pending: &PendingRequest) -> Result<(), IdentityError>;
    async fn get_pending_request(&self, nonce: String)
        -> Result<Option<PendingRequest>, IdentityError>;
    async fn remove_pending_request(&self, nonce: String) -> Result<(), IdentityError>;
}
