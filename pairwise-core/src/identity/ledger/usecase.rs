use std::sync::Arc;

use rst_common::standard::async_trait::async_trait;
use rst_common::standard::serde_json::{self, json};
use rst_common::with_logging::log::debug;

use crate::identity::types::IdentityError;
use crate::identity::wallet::types::WalletAPI;

use super::types::{LedgerAPI, LedgerBuilder, LedgerResponse, SignedRequest};

pub struct Usecase<TWallet, TLedger>
where
    TWallet: WalletAPI,
    TLedger: LedgerBuilder,
{
    wallet: Arc<TWallet>,
    ledger: Arc<TLedger>,
    main_did: Option<String>,
}

impl<TWallet, TLedger> Usecase<TWallet, TLedger>
where
    TWallet: WalletAPI,
    TLedger: LedgerBuilder,
{
    pub fn new(wallet: Arc<TWallet>, ledger: Arc<TLedger>, main_did: Option<String>) -> Self {
        Self {
            wallet,
            ledger,
            main_did,
        }
    }
}

#[async_trait]
impl<TWallet, TLedger> LedgerAPI for Usecase<TWallet, TLedger>
where
    TWallet: WalletAPI,
    TLedger: LedgerBuilder,
{
    async fn sign_and_submit_request(
        &self,
        request: Vec<u8>,
        signing_did: Option<String>,
    ) -> Result<LedgerResponse, IdentityError> {
        let did = signing_did
            .or(self.main_did.clone())
            .ok_or(IdentityError::SigningError("missing signing did".to_string()))?;

        let signature = self.wallet.sign(did.clone(), request.clone()).await?;

        debug!("[ledger:submit] signing did: {}", did);
        self.ledger
            .submit_request(SignedRequest {
                did,
                request,
                signature,
            })
            .await
    }

    async fn publish_did(&self, did: String) -> Result<LedgerResponse, IdentityError> {
        let verkey = self
            .wallet
            .key_for_local_did(did.clone())
            .await?
            .ok_or(IdentityError::NotFound(format!("local did: {}", did)))?;

        let nym = json!({
            "operation": "NYM",
            "dest": did.clone(),
            "verkey": verkey.to_string(),
        });

        let request = serde_json::to_vec(&nym)
            .map_err(|err| IdentityError::SerializationError(err.to_string()))?;

        self.sign_and_submit_request(request, Some(did)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rst_common::standard::serde_json::value::Value;
    use rst_common::with_tokio::tokio;

    use ed25519_dalek::{Signature, Verifier};

    use crate::identity::testutil::{MemoryRepo, MockFakeLedger};
    use crate::identity::wallet::Usecase as WalletUsecase;

    fn generate_wallet() -> Arc<WalletUsecase<MemoryRepo>> {
        Arc::new(WalletUsecase::new(Arc::new(MemoryRepo::default())))
    }

    #[tokio::test]
    async fn test_submit_with_main_did() {
        let wallet = generate_wallet();
        let main = wallet.new_did().await.unwrap();
        let main_did = main.did.clone();
        let main_verkey = main.verkey.clone();

        let mut ledger = MockFakeLedger::new();
        ledger
            .expect_submit_request()
            .times(1)
            .withf(move |req| {
                let signature_bytes: [u8; 64] = hex::decode(&req.signature)
                    .unwrap()
                    .try_into()
                    .unwrap();
                let signature = Signature::from_bytes(&signature_bytes);

                req.did == main_did
                    && main_verkey
                        .verifying_key()
                        .unwrap()
                        .verify(&req.request, &signature)
                        .is_ok()
            })
            .returning(|_| {
                Ok(LedgerResponse {
                    result: Value::String("ok".to_string()),
                })
            });

        let uc = Usecase::new(wallet, Arc::new(ledger), Some(main.did.clone()));
        let output = uc.sign_and_submit_request(b"{}".to_vec(), None).await;
        assert!(!output.is_err());
        assert_eq!(output.unwrap().result, Value::String("ok".to_string()))
    }

    #[tokio::test]
    async fn test_submit_missing_signing_did() {
        let wallet = generate_wallet();

        let mut ledger = MockFakeLedger::new();
        ledger.expect_submit_request().never();

        let uc = Usecase::new(wallet, Arc::new(ledger), None);
        let output = uc.sign_and_submit_request(b"{}".to_vec(), None).await;
        assert!(matches!(output, Err(IdentityError::SigningError(_))))
    }

    #[tokio::test]
    async fn test_submit_ledger_unavailable() {
        let wallet = generate_wallet();
        let main = wallet.new_did().await.unwrap();

        let mut ledger = MockFakeLedger::new();
        ledger
            .expect_submit_request()
            .returning(|_| Err(IdentityError::LedgerUnavailable("timeout".to_string())));

        let uc = Usecase::new(wallet, Arc::new(ledger), None);
        let output = uc
            .sign_and_submit_request(b"{}".to_vec(), Some(main.did.clone()))
            .await;
        assert!(matches!(output, Err(IdentityError::LedgerUnavailable(_))))
    }

    #[tokio::test]
    async fn test_publish_did() {
        let wallet = generate_wallet();
        let mine = wallet.new_did().await.unwrap();
        let expected_did = mine.did.clone();
        let expected_verkey = mine.verkey.to_string();

        let mut ledger = MockFakeLedger::new();
        ledger
            .expect_submit_request()
            .times(1)
            .withf(move |req| {
                let nym: Value = serde_json::from_slice(&req.request).unwrap();
                nym["operation"] == "NYM"
                    && nym["dest"] == expected_did.as_str()
                    && nym["verkey"] == expected_verkey.as_str()
            })
            .returning(|_| {
                Ok(LedgerResponse {
                    result: Value::Null,
                })
            });

        let uc = Usecase::new(wallet, Arc::new(ledger), None);
        let output = uc.publish_did(mine.did.clone()).await;
        assert!(!output.is_err())
    }

    #[tokio::test]
    async fn test_publish_unknown_did() {
        let wallet = generate_wallet();

        let mut ledger = MockFakeLedger::new();
        ledger.expect_submit_request().never();

        let uc = Usecase::new(wallet, Arc::new(ledger), None);
        let output = uc.publish_did("did:prople:unknown".to_string()).await;
        assert!(matches!(output, Err(IdentityError::NotFound(_))))
    }
}
