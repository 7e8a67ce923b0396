use std::sync::Arc;

use rst_common::standard::async_trait::async_trait;
use rst_common::with_logging::log::debug;

use crate::identity::resolver::types::ResolverAPI;
use crate::identity::types::IdentityError;
use crate::identity::wallet::types::WalletAPI;

use super::anoncrypt;
use super::types::{
    AnonCryptable, AnoncryptedMessage, AuthCryptable, AuthcryptResult, AuthcryptedMessage,
    EnvelopeAPI,
};

/// `Usecase` is the base implementation of [`EnvelopeAPI`]
pub struct Usecase<TWallet, TResolver>
where
    TWallet: WalletAPI,
    TResolver: ResolverAPI,
{
    owner: String,
    wallet: Arc<TWallet>,
    resolver: Arc<TResolver>,
}

impl<TWallet, TResolver> Usecase<TWallet, TResolver>
where
    TWallet: WalletAPI,
    TResolver: ResolverAPI,
{
    pub fn new(owner: String, wallet: Arc<TWallet>, resolver: Arc<TResolver>) -> Self {
        Self {
            owner,
            wallet,
            resolver,
        }
    }
}

#[async_trait]
impl<TWallet, TResolver> EnvelopeAPI for Usecase<TWallet, TResolver>
where
    TWallet: WalletAPI,
    TResolver: ResolverAPI,
{
    async fn anon_encrypt<T>(&self, payload: T) -> Result<AnoncryptedMessage, IdentityError>
    where
        T: AnonCryptable + 'static,
    {
        let target_did = payload.get_their_did();
        let verkey = self.resolver.resolve_key(target_did.clone()).await?;

        debug!("[{}][envelope:anon_encrypt] target: {}", self.owner, target_did);

        let bytes: Vec<u8> = payload.try_into()?;
        let ciphertext = anoncrypt::seal(&verkey, &bytes)?;
        Ok(AnoncryptedMessage::new(ciphertext, target_did))
    }

    async fn anon_decrypt<T>(&self, message: AnoncryptedMessage) -> Result<T, IdentityError>
    where
        T: AnonCryptable + 'static,
    {
        debug!(
            "[{}][envelope:anon_decrypt] target: {}",
            self.owner, message.target_did
        );

        let bytes = self
            .wallet
            .anon_decrypt(message.target_did, message.ciphertext)
            .await?;

        T::try_from(bytes)
    }

    async fn auth_encrypt<T>(&self, payload: T) -> Result<AuthcryptedMessage, IdentityError>
    where
        T: AuthCryptable + 'static,
    {
        let my_did = payload.get_my_did();
        let my_verkey = self.resolver.resolve_key(my_did.clone()).await?;
        let their_verkey = self.resolver.resolve_key(payload.get_their_did()).await?;

        debug!(
            "[{}][envelope:auth_encrypt] from: {}, to: {}",
            self.owner,
            my_did,
            payload.get_their_did()
        );

        let bytes: Vec<u8> = payload.try_into()?;
        let ciphertext = self
            .wallet
            .auth_encrypt(my_did.clone(), my_verkey, their_verkey, bytes)
            .await?;

        Ok(AuthcryptedMessage::new(ciphertext, my_did))
    }

    async fn auth_decrypt<T>(&self, message: AuthcryptedMessage) -> Result<T, IdentityError>
    where
        T: AuthCryptable + 'static,
    {
        let pairwise = self
            .wallet
            .get_pairwise_by_their_did(message.get_sender_did())
            .await?;

        let (sender_verkey, bytes) = self
            .wallet
            .auth_decrypt(pairwise.get_my_did(), message.ciphertext.clone())
            .await?;

        if sender_verkey != pairwise.get_their_key() {
            return Err(IdentityError::SenderKeyMismatch {
                expected: pairwise.get_their_key().to_string(),
                actual: sender_verkey.to_string(),
            });
        }

        debug!(
            "[{}][envelope:auth_decrypt] sender: {}",
            self.owner, message.sender_did
        );

        let mut payload = T::try_from(bytes)?;
        payload.set_their_did(message.get_sender_did());
        Ok(payload)
    }

    async fn auth_encrypt_result<T>(&self, payload: T) -> Result<AuthcryptResult<T>, IdentityError>
    where
        T: AuthCryptable + 'static,
    {
        let message = self.auth_encrypt(payload.clone()).await?;
        Ok(AuthcryptResult { payload, message })
    }
}
