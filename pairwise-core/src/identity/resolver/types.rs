use rst_common::standard::async_trait::async_trait;

use crate::identity::keys::Verkey;
use crate::identity::types::IdentityError;

#[async_trait]
pub trait ResolverAPI: Send + Sync {
    /// `resolve_key` returns the verkey currently bound to the `DID`
    ///
    /// Errors:
    /// - [`IdentityError::UnknownDid`] when nobody knows the `DID`
    /// - [`IdentityError::LedgerUnavailable`] when the ledger can't be reached
    async fn resolve_key(&self, did: String) -> Result<Verkey, IdentityError>;
}
