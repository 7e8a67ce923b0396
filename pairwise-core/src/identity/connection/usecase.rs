use std::sync::Arc;

use rst_common::standard::async_trait::async_trait;
use rst_common::standard::uuid::Uuid;
use rst_common::with_logging::log::{debug, info};

use crate::identity::envelope::types::{AnoncryptedMessage, EnvelopeAPI};
use crate::identity::envelope::Usecase as EnvelopeUsecase;
use crate::identity::keys::did_from_verkey;
use crate::identity::resolver::types::ResolverAPI;
use crate::identity::types::IdentityError;
use crate::identity::wallet::types::{PendingRequest, WalletAPI};
use crate::identity::wallet::Pairwise;

use super::types::{ConnectionAPI, State};
use super::{ConnectionRequest, ConnectionResponse};

/// `Usecase` is the connection handshake orchestrator
///
/// It holds no lock, two handshakes for the same peer must be serialized by the caller
pub struct Usecase<TWallet, TResolver>
where
    TWallet: WalletAPI,
    TResolver: ResolverAPI,
{
    owner: String,
    wallet: Arc<TWallet>,
    resolver: Arc<TResolver>,
    envelope: EnvelopeUsecase<TWallet, TResolver>,
}

impl<TWallet, TResolver> Usecase<TWallet, TResolver>
where
    TWallet: WalletAPI,
    TResolver: ResolverAPI,
{
    pub fn new(owner: String, wallet: Arc<TWallet>, resolver: Arc<TResolver>) -> Self {
        let envelope = EnvelopeUsecase::new(owner.clone(), wallet.clone(), resolver.clone());
        Self {
            owner,
            wallet,
            resolver,
            envelope,
        }
    }

    /// `advance` moves the handshake to the `expected` state, which must be the direct
    /// successor of `current`
    fn advance(&self, current: State, expected: State) -> Result<State, IdentityError> {
        match current.next() {
            Some(next) if next == expected => {
                debug!(
                    "[{}][connection] state: {:?} -> {:?}",
                    self.owner, current, next
                );
                Ok(next)
            }
            _ => Err(IdentityError::InvalidResponse(format!(
                "invalid handshake transition: {:?} -> {:?}",
                current, expected
            ))),
        }
    }

    /// `accept` runs the invitee pipeline and reports the state it ended on
    async fn accept(
        &self,
        request: ConnectionRequest,
    ) -> Result<(State, AnoncryptedMessage), IdentityError> {
        let state = State::ReceivedRequest;
        debug!(
            "[{}][connection:accept] request from: {}, nonce: {}",
            self.owner, request.did, request.nonce
        );

        let my_did = self.wallet.new_did().await?;
        let response = ConnectionResponse {
            did: my_did.did.clone(),
            verkey: my_did.verkey.clone(),
            nonce: request.nonce.clone(),
            target_did: request.did.clone(),
        };

        let their_key = self.resolver.resolve_key(request.did.clone()).await?;
        let state = self.advance(state, State::KeyResolved)?;

        self.wallet
            .store_their_did(request.did.clone(), their_key)
            .await?;

        let _ = self
            .wallet
            .create_pairwise(request.did.clone(), my_did.did.clone(), String::new())
            .await?;

        let state = self.advance(state, State::PairwiseStored)?;

        let message = self.envelope.anon_encrypt(response).await?;
        let state = self.advance(state, State::ResponseReady)?;

        info!(
            "[{}][connection:accept] pairwise established, my_did: {}, their_did: {}",
            self.owner, my_did.did, request.did
        );

        Ok((state, message))
    }
}

#[async_trait]
impl<TWallet, TResolver> ConnectionAPI for Usecase<TWallet, TResolver>
where
    TWallet: WalletAPI,
    TResolver: ResolverAPI,
{
    async fn create_connection_request(&self) -> Result<ConnectionRequest, IdentityError> {
        let my_did = self.wallet.new_did().await?;
        let nonce = Uuid::new_v4().to_string();

        self.wallet
            .save_connection_request(PendingRequest::new(nonce.clone(), my_did.did.clone()))
            .await?;

        debug!(
            "[{}][connection:request] did: {}, nonce: {}",
            self.owner, my_did.did, nonce
        );

        Ok(ConnectionRequest::new(my_did.did, nonce))
    }

    async fn accept_connection_request(
        &self,
        request: ConnectionRequest,
    ) -> Result<AnoncryptedMessage, IdentityError> {
        let (_, message) = self.accept(request).await?;
        Ok(message)
    }

    async fn complete_connection(
        &self,
        message: AnoncryptedMessage,
    ) -> Result<Pairwise, IdentityError> {
        let response = self
            .envelope
            .anon_decrypt::<ConnectionResponse>(message)
            .await?;

        // the pending request is only consumed once the pairwise has been created
        let pending = self
            .wallet
            .get_connection_request(response.nonce.clone())
            .await?;

        if response.target_did != pending.my_did {
            return Err(IdentityError::InvalidResponse(format!(
                "unexpected target did: {}",
                response.target_did
            )));
        }

        if did_from_verkey(&response.verkey) != response.did {
            return Err(IdentityError::InvalidResponse(format!(
                "did doesn't match its verkey: {}",
                response.did
            )));
        }

        self.wallet
            .store_their_did(response.did.clone(), response.verkey.clone())
            .await?;

        let pairwise = self
            .wallet
            .create_pairwise(response.did.clone(), pending.my_did, String::new())
            .await?;

        let _ = self
            .wallet
            .take_connection_request(response.nonce)
            .await?;

        info!(
            "[{}][connection:complete] pairwise established, my_did: {}, their_did: {}",
            self.owner,
            pairwise.get_my_did(),
            pairwise.get_their_did()
        );

        Ok(pairwise)
    }
}
