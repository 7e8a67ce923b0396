use rst_common::standard::async_trait::async_trait;
use rst_common::standard::serde::{self, Deserialize, Serialize};
use rst_common::standard::serde_json::value::Value;

use crate::identity::keys::Verkey;
use crate::identity::types::IdentityError;

/// `SignedRequest` is a ledger request signed by the wallet key of `did`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
pub struct SignedRequest {
    pub did: String,

    #[serde(with = "hex")]
    pub request: Vec<u8>,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
pub struct LedgerResponse {
    pub result: Value,
}

/// `LedgerBuilder` is the abstraction of the public ledger where `DID` and their
/// verkeys are published
///
/// The implementer must return `Ok(None)` when the ledger doesn't know the `DID`, and
/// [`IdentityError::LedgerUnavailable`] for any network or transport failure
#[async_trait]
pub trait LedgerBuilder: Send + Sync {
    async fn resolve_verkey(&self, did: String) -> Result<Option<Verkey>, IdentityError>;
    async fn submit_request(&self, request: SignedRequest)
        -> Result<LedgerResponse, IdentityError>;
}

#[async_trait]
pub trait LedgerAPI {
    /// `sign_and_submit_request` signs the request using the key of `signing_did`, or the
    /// configured main `DID` when it's not given, and submit it to the ledger
    async fn sign_and_submit_request(
        &self,
        request: Vec<u8>,
        signing_did: Option<String>,
    ) -> Result<LedgerResponse, IdentityError>;

    /// `publish_did` builds a `NYM` request for the given local `DID` and submit it
    /// signed by the same `DID`
    async fn publish_did(&self, did: String) -> Result<LedgerResponse, IdentityError>;
}
