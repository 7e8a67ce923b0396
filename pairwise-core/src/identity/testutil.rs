use std::collections::HashMap;
use std::sync::Mutex;

use mockall::mock;
use rst_common::standard::async_trait::async_trait;

use crate::identity::keys::Verkey;
use crate::identity::ledger::types::{LedgerBuilder, LedgerResponse, SignedRequest};
use crate::identity::types::IdentityError;
use crate::identity::wallet::types::{PendingRequest, RepoBuilder, TheirDid};
use crate::identity::wallet::{DidRecord, Pairwise};

mock!(
    pub FakeLedger{}

    #[async_trait]
    impl LedgerBuilder for FakeLedger {
        async fn resolve_verkey(&self, did: String) -> Result<Option<Verkey>, IdentityError>;
        async fn submit_request(&self, request: SignedRequest) -> Result<LedgerResponse, IdentityError>;
    }
);

/// `MemoryRepo` is an in-memory [`RepoBuilder`] used by the multi steps flow tests
#[derive(Default)]
pub struct MemoryRepo {
    dids: Mutex<HashMap<String, DidRecord>>,
    their_dids: Mutex<HashMap<String, TheirDid>>,
    pairwises: Mutex<HashMap<String, Pairwise>>,
    pendings: Mutex<HashMap<String, PendingRequest>>,
}

fn lock_error<T>(_: T) -> IdentityError {
    IdentityError::StorageError("poisoned lock".to_string())
}

#[async_trait]
impl RepoBuilder for MemoryRepo {
    async fn save_did(&self, record: &DidRecord) -> Result<(), IdentityError> {
        let mut dids = self.dids.lock().map_err(lock_error)?;
        dids.insert(record.get_did(), record.clone());
        Ok(())
    }

    async fn get_did(&self, did: String) -> Result<Option<DidRecord>, IdentityError> {
        let dids = self.dids.lock().map_err(lock_error)?;
        Ok(dids.get(&did).cloned())
    }

    async fn save_their_did(&self, their_did: &TheirDid) -> Result<(), IdentityError> {
        let mut their_dids = self.their_dids.lock().map_err(lock_error)?;
        their_dids.insert(their_did.did.clone(), their_did.clone());
        Ok(())
    }

    async fn get_their_did(&self, did: String) -> Result<Option<TheirDid>, IdentityError> {
        let their_dids = self.their_dids.lock().map_err(lock_error)?;
        Ok(their_dids.get(&did).cloned())
    }

    async fn save_pairwise(&self, pairwise: &Pairwise) -> Result<(), IdentityError> {
        let mut pairwises = self.pairwises.lock().map_err(lock_error)?;
        pairwises.insert(pairwise.get_their_did(), pairwise.clone());
        Ok(())
    }

    async fn get_pairwise(&self, their_did: String) -> Result<Option<Pairwise>, IdentityError> {
        let pairwises = self.pairwises.lock().map_err(lock_error)?;
        Ok(pairwises.get(&their_did).cloned())
    }

    async fn list_pairwise(&self) -> Result<Vec<Pairwise>, IdentityError> {
        let pairwises = self.pairwises.lock().map_err(lock_error)?;
        Ok(pairwises.values().cloned().collect())
    }

    async fn save_pending_request(&self, pending: &PendingRequest) -> Result<(), IdentityError> {
        let mut pendings = self.pendings.lock().map_err(lock_error)?;
        pendings.insert(pending.nonce.clone(), pending.clone());
        Ok(())
    }

    async fn get_pending_request(
        &self,
        nonce: String,
    ) -> Result<Option<PendingRequest>, IdentityError> {
        let pendings = self.pendings.lock().map_err(lock_error)?;
        Ok(pendings.get(&nonce).cloned())
    }

    async fn remove_pending_request(&self, nonce: String) -> Result<(), IdentityError> {
        let mut pendings = self.pendings.lock().map_err(lock_error)?;
        pendings.remove(&nonce);
        Ok(())
    }
}
