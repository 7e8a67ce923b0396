use rst_common::standard::async_trait::async_trait;

use rstdev_storage::engine::rocksdb::executor::Executor;
use rstdev_storage::engine::rocksdb::types::{
    Instruction as DbInstruction, OutputOpts as DbOutput,
};

use prople_pairwise_core::identity::types::IdentityError;
use prople_pairwise_core::identity::wallet::types::{PendingRequest, RepoBuilder, TheirDid};
use prople_pairwise_core::identity::wallet::{DidRecord, Pairwise};

use crate::apps::db::merge_operators::MERGE_PAIRWISE_PREFIX;
use crate::apps::{DbBucket, DbError};

const WALLET_KEY_DID: &str = "wallet_did";
const WALLET_KEY_THEIR_DID: &str = "wallet_their_did";
const WALLET_KEY_PAIRWISE: &str = "wallet_pairwise";
const WALLET_KEY_PENDING: &str = "wallet_pending";

/// `Repository` is the `RocksDB` implementation of the wallet [`RepoBuilder`]
#[derive(Clone)]
pub struct Repository {
    db: Executor,
}

impl Repository {
    pub fn new(db: Executor) -> Self {
        Self { db }
    }

    fn build_key(&self, prefix: &str, val: String) -> String {
        format!("{}:{}", prefix, val)
    }

    fn build_pairwise_merge_key(&self) -> String {
        format!("{}:all", MERGE_PAIRWISE_PREFIX)
    }

    async fn save_bytes(&self, key: String, value: Vec<u8>) -> Result<(), IdentityError> {
        let _ = self
            .db
            .exec(DbInstruction::SaveCf { key, value })
            .await
            .map_err(|err| IdentityError::StorageError(err.to_string()))?;

        Ok(())
    }

    async fn get_bytes(&self, key: String) -> Result<Option<Vec<u8>>, IdentityError> {
        let output = self
            .db
            .exec(DbInstruction::GetCf { key })
            .await
            .map_err(|err| IdentityError::StorageError(err.to_string()))?;

        match output {
            DbOutput::SingleByte { value } => Ok(value),
            _ => Err(IdentityError::StorageError(
                "unknown output type".to_string(),
            )),
        }
    }

    async fn get_pairwise_bucket(&self) -> Result<Option<DbBucket<Pairwise>>, IdentityError> {
        let value = self.get_bytes(self.build_pairwise_merge_key()).await?;
        value
            .map(|val| {
                DbBucket::<Pairwise>::try_from(val)
                    .map_err(|err: DbError| IdentityError::DeserializationError(err.to_string()))
            })
            .transpose()
    }
}

#[async_trait]
impl RepoBuilder for Repository {
    async fn save_did(&self, record: &DidRecord) -> Result<(), IdentityError> {
        let key = self.build_key(WALLET_KEY_DID, record.get_did());
        let record_bytes: Vec<u8> = record.to_owned().try_into()?;

        self.save_bytes(key, record_bytes).await
    }

    async fn get_did(&self, did: String) -> Result<Option<DidRecord>, IdentityError> {
        let key = self.build_key(WALLET_KEY_DID, did);
        let value = self.get_bytes(key).await?;

        value.map(DidRecord::try_from).transpose()
    }

    async fn save_their_did(&self, their_did: &TheirDid) -> Result<(), IdentityError> {
        let key = self.build_key(WALLET_KEY_THEIR_DID, their_did.did.clone());
        let their_bytes: Vec<u8> = their_did.to_owned().try_into()?;

        self.save_bytes(key, their_bytes).await
    }

    async fn get_their_did(&self, did: String) -> Result<Option<TheirDid>, IdentityError> {
        let key = self.build_key(WALLET_KEY_THEIR_DID, did);
        let value = self.get_bytes(key).await?;

        value.map(TheirDid::try_from).transpose()
    }

    async fn save_pairwise(&self, pairwise: &Pairwise) -> Result<(), IdentityError> {
        let key = self.build_key(WALLET_KEY_PAIRWISE, pairwise.get_their_did());
        let pairwise_bytes: Vec<u8> = pairwise.to_owned().try_into()?;

        self.save_bytes(key, pairwise_bytes.clone()).await?;

        // the bucket must exist before its values able to be merged
        let merge_key = self.build_pairwise_merge_key();
        match self.get_pairwise_bucket().await?.is_some() {
            true => {
                let _ = self
                    .db
                    .exec(DbInstruction::MergeCf {
                        key: merge_key,
                        value: pairwise_bytes,
                    })
                    .await
                    .map_err(|err| IdentityError::StorageError(err.to_string()))?;
            }
            false => {
                let mut bucket = DbBucket::<Pairwise>::new();
                bucket.add(pairwise.to_owned());

                let bucket_bytes: Vec<u8> = bucket
                    .try_into()
                    .map_err(|err: DbError| IdentityError::SerializationError(err.to_string()))?;

                self.save_bytes(merge_key, bucket_bytes).await?;
            }
        }

        Ok(())
    }

    async fn get_pairwise(&self, their_did: String) -> Result<Option<Pairwise>, IdentityError> {
        let key = self.build_key(WALLET_KEY_PAIRWISE, their_did);
        let value = self.get_bytes(key).await?;

        value.map(Pairwise::try_from).transpose()
    }

    async fn list_pairwise(&self) -> Result<Vec<Pairwise>, IdentityError> {
        let bucket = self.get_pairwise_bucket().await?;
        let output = bucket
            .map(|val| val.iterate().cloned().collect())
            .unwrap_or_default();

        Ok(output)
    }

    async fn save_pending_request(&self, pending: &PendingRequest) -> Result<(), IdentityError> {
        let key = self.build_key(WALLET_KEY_PENDING, pending.nonce.clone());
        let pending_bytes: Vec<u8> = pending.to_owned().try_into()?;

        self.save_bytes(key, pending_bytes).await
    }

    async fn get_pending_request(
        &self,
        nonce: String,
    ) -> Result<Option<PendingRequest>, IdentityError> {
        let key = self.build_key(WALLET_KEY_PENDING, nonce);
        let value = self.get_bytes(key).await?;

        value.map(PendingRequest::try_from).transpose()
    }

    async fn remove_pending_request(&self, nonce: String) -> Result<(), IdentityError> {
        let key = self.build_key(WALLET_KEY_PENDING, nonce);
        let _ = self
            .db
            .exec(DbInstruction::RemoveCf { key })
            .await
            .map_err(|err| IdentityError::StorageError(err.to_string()))?;

        Ok(())
    }
}
