use std::sync::Arc;

use rst_common::standard::async_trait::async_trait;
use rst_common::with_logging::log::debug;

use crate::identity::keys::Verkey;
use crate::identity::ledger::types::LedgerBuilder;
use crate::identity::types::IdentityError;
use crate::identity::wallet::types::WalletAPI;

use super::types::ResolverAPI;

/// `Usecase` resolves a key by looking into our own `DID` first, then the stored peer
/// `DID` and fallback to the ledger
///
/// There is no cache here, a caller that needs memoization must provide it by itself
pub struct Usecase<TWallet, TLedger>
where
    TWallet: WalletAPI,
    TLedger: LedgerBuilder,
{
    wallet: Arc<TWallet>,
    ledger: Arc<TLedger>,
}

impl<TWallet, TLedger> Usecase<TWallet, TLedger>
where
    TWallet: WalletAPI,
    TLedger: LedgerBuilder,
{
    pub fn new(wallet: Arc<TWallet>, ledger: Arc<TLedger>) -> Self {
        Self { wallet, ledger }
    }
}

#[async_trait]
impl<TWallet, TLedger> ResolverAPI for Usecase<TWallet, TLedger>
where
    TWallet: WalletAPI,
    TLedger: LedgerBuilder,
{
    async fn resolve_key(&self, did: String) -> Result<Verkey, IdentityError> {
        if let Some(verkey) = self.wallet.key_for_local_did(did.clone()).await? {
            debug!("[resolver] local did: {}", did);
            return Ok(verkey);
        }

        if let Some(verkey) = self.wallet.key_for_their_did(did.clone()).await? {
            debug!("[resolver] stored peer did: {}", did);
            return Ok(verkey);
        }

        debug!("[resolver] fallback to ledger: {}", did);
        self.ledger
            .resolve_verkey(did.clone())
            .await?
            .ok_or(IdentityError::UnknownDid(did))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rst_common::with_tokio::tokio;

    use crate::identity::keys::KeyPair;
    use crate::identity::testutil::{MemoryRepo, MockFakeLedger};
    use crate::identity::wallet::Usecase as WalletUsecase;

    fn generate_wallet() -> Arc<WalletUsecase<MemoryRepo>> {
        Arc::new(WalletUsecase::new(Arc::new(MemoryRepo::default())))
    }

    #[tokio::test]
    async fn test_resolve_local_did() {
        let wallet = generate_wallet();
        let mine = wallet.new_did().await.unwrap();

        let mut ledger = MockFakeLedger::new();
        ledger.expect_resolve_verkey().never();

        let uc = Usecase::new(wallet, Arc::new(ledger));
        let output = uc.resolve_key(mine.did.clone()).await;
        assert!(!output.is_err());
        assert_eq!(output.unwrap(), mine.verkey)
    }

    #[tokio::test]
    async fn test_resolve_stored_peer_did() {
        let wallet = generate_wallet();
        let peer = KeyPair::generate();
        let _ = wallet.store_their_did(peer.did(), peer.verkey()).await;

        let mut ledger = MockFakeLedger::new();
        ledger.expect_resolve_verkey().never();

        let uc = Usecase::new(wallet, Arc::new(ledger));
        let output = uc.resolve_key(peer.did()).await;
        assert!(!output.is_err());
        assert_eq!(output.unwrap(), peer.verkey())
    }

    #[tokio::test]
    async fn test_resolve_from_ledger() {
        let peer = KeyPair::generate();
        let peer_verkey = peer.verkey();

        let mut ledger = MockFakeLedger::new();
        ledger
            .expect_resolve_verkey()
            .times(1)
            .returning(move |_| Ok(Some(peer_verkey.clone())));

        let uc = Usecase::new(generate_wallet(), Arc::new(ledger));
        let output = uc.resolve_key(peer.did()).await;
        assert!(!output.is_err());
        assert_eq!(output.unwrap(), peer.verkey())
    }

    #[tokio::test]
    async fn test_resolve_unknown_did() {
        let mut ledger = MockFakeLedger::new();
        ledger.expect_resolve_verkey().returning(|_| Ok(None));

        let uc = Usecase::new(generate_wallet(), Arc::new(ledger));
        let output = uc.resolve_key("did:prople:unknown".to_string()).await;
        assert!(matches!(output, Err(IdentityError::UnknownDid(_))))
    }

    #[tokio::test]
    async fn test_resolve_ledger_unavailable() {
        let mut ledger = MockFakeLedger::new();
        ledger
            .expect_resolve_verkey()
            .returning(|_| Err(IdentityError::LedgerUnavailable("connection refused".to_string())));

        let uc = Usecase::new(generate_wallet(), Arc::new(ledger));
        let output = uc.resolve_key("did:prople:unknown".to_string()).await;
        assert!(matches!(output, Err(IdentityError::LedgerUnavailable(_))))
    }
}
