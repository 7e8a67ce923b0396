use std::sync::Arc;

use rst_common::standard::async_trait::async_trait;
use rst_common::with_logging::log::debug;

use crate::identity::envelope::{anoncrypt, authcrypt};
use crate::identity::keys::{KeyPair, Verkey};
use crate::identity::types::IdentityError;

use super::types::{DidInfo, PendingRequest, RepoBuilder, TheirDid, WalletAPI};
use super::{DidRecord, Pairwise};

/// `Usecase` is the base implementation of [`WalletAPI`]
///
/// This object depends on the implementation of [`RepoBuilder`]
pub struct Usecase<TRepo>
where
    TRepo: RepoBuilder,
{
    repo: Arc<TRepo>,
}

impl<TRepo> Usecase<TRepo>
where
    TRepo: RepoBuilder,
{
    pub fn new(repo: Arc<TRepo>) -> Self {
        Self { repo }
    }

    async fn load_keypair(&self, did: String) -> Result<KeyPair, IdentityError> {
        let record = self
            .repo
            .get_did(did.clone())
            .await?
            .ok_or(IdentityError::NotFound(format!("local did: {}", did)))?;

        record.keypair()
    }
}

#[async_trait]
impl<TRepo> WalletAPI for Usecase<TRepo>
where
    TRepo: RepoBuilder,
{
    async fn new_did(&self) -> Result<DidInfo, IdentityError> {
        let record = DidRecord::generate();
        self.repo.save_did(&record).await?;

        debug!("[wallet:new_did] generated did: {}", record.get_did());
        Ok(record.to_info())
    }

    async fn store_their_did(&self, did: String, verkey: Verkey) -> Result<(), IdentityError> {
        let _ = verkey.verifying_key()?;

        debug!("[wallet:store_their_did] did: {}, verkey: {}", did, verkey);
        self.repo.save_their_did(&TheirDid::new(did, verkey)).await
    }

    async fn create_pairwise(
        &self,
        their_did: String,
        my_did: String,
        metadata: String,
    ) -> Result<Pairwise, IdentityError> {
        let their = self
            .repo
            .get_their_did(their_did.clone())
            .await?
            .ok_or(IdentityError::NotFound(format!("their did: {}", their_did)))?;

        let _ = self
            .repo
            .get_did(my_did.clone())
            .await?
            .ok_or(IdentityError::NotFound(format!("local did: {}", my_did)))?;

        let existing = self.repo.get_pairwise(their_did.clone()).await?;
        if existing.is_some() {
            return Err(IdentityError::DuplicatePairwise(their_did));
        }

        let pairwise = Pairwise::new(my_did, their_did, their.verkey, metadata);
        self.repo.save_pairwise(&pairwise).await?;

        debug!(
            "[wallet:create_pairwise] my_did: {}, their_did: {}",
            pairwise.get_my_did(),
            pairwise.get_their_did()
        );

        Ok(pairwise)
    }

    async fn get_pairwise_by_their_did(
        &self,
        their_did: String,
    ) -> Result<Pairwise, IdentityError> {
        self.repo
            .get_pairwise(their_did.clone())
            .await?
            .ok_or(IdentityError::NotFound(format!("pairwise: {}", their_did)))
    }

    async fn list_pairwise(&self) -> Result<Vec<Pairwise>, IdentityError> {
        self.repo.list_pairwise().await
    }

    async fn key_for_local_did(&self, did: String) -> Result<Option<Verkey>, IdentityError> {
        let record = self.repo.get_did(did).await?;
        Ok(record.map(|r| r.get_verkey()))
    }

    async fn key_for_their_did(&self, did: String) -> Result<Option<Verkey>, IdentityError> {
        let their = self.repo.get_their_did(did).await?;
        Ok(their.map(|t| t.verkey))
    }

    async fn anon_decrypt(
        &self,
        my_did: String,
        ciphertext: Vec<u8>,
    ) -> Result<Vec<u8>, IdentityError> {
        let keypair = self.load_keypair(my_did).await?;
        anoncrypt::open(&keypair, &ciphertext)
    }

    async fn auth_encrypt(
        &self,
        my_did: String,
        my_verkey: Verkey,
        their_verkey: Verkey,
        message: Vec<u8>,
    ) -> Result<Vec<u8>, IdentityError> {
        let keypair = self.load_keypair(my_did).await?;
        if keypair.verkey() != my_verkey {
            return Err(IdentityError::SenderKeyMismatch {
                expected: my_verkey.to_string(),
                actual: keypair.verkey().to_string(),
            });
        }

        authcrypt::seal(&keypair, &their_verkey, &message)
    }

    async fn auth_decrypt(
        &self,
        my_did: String,
        ciphertext: Vec<u8>,
    ) -> Result<(Verkey, Vec<u8>), IdentityError> {
        let keypair = self.load_keypair(my_did).await?;
        authcrypt::open(&keypair, &ciphertext)
    }

    async fn sign(&self, did: String, message: Vec<u8>) -> Result<String, IdentityError> {
        let keypair = self
            .load_keypair(did)
            .await
            .map_err(|err| IdentityError::SigningError(err.to_string()))?;

        Ok(keypair.sign(&message))
    }

    async fn save_connection_request(&self, pending: PendingRequest) -> Result<(), IdentityError> {
        self.repo.save_pending_request(&pending).await
    }

    async fn get_connection_request(
        &self,
        nonce: String,
    ) -> Result<PendingRequest, IdentityError> {
        self.repo
            .get_pending_request(nonce.clone())
            .await?
            .ok_or(IdentityError::NotFound(format!("pending request: {}", nonce)))
    }

    async fn take_connection_request(
        &self,
        nonce: String,
    ) -> Result<PendingRequest, IdentityError> {
        let pending = self.get_connection_request(nonce.clone()).await?;
        self.repo.remove_pending_request(nonce).await?;
        Ok(pending)
    }
}
