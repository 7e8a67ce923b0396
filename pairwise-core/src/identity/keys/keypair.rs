use std::fmt;

use rand::rngs::OsRng;

use crypto_box::SecretKey as BoxSecretKey;
use ed25519_dalek::{Signer, SigningKey};

use crate::identity::types::IdentityError;

use super::{did_from_verkey, Verkey};

/// `KeyPair` wraps an `Ed25519` signing key owned by the wallet
///
/// The same key pair used for two purposes, signing ledger requests and decrypting
/// envelopes by converting it to its `X25519` form.
#[derive(Clone)]
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    pub fn generate() -> Self {
        let mut csprng = OsRng;
        Self {
            signing_key: SigningKey::generate(&mut csprng),
        }
    }

    /// `from_seed_hex` restores a key pair from its hex encoded 32 bytes seed
    pub fn from_seed_hex(seed: &str) -> Result<Self, IdentityError> {
        let decoded = hex::decode(seed).map_err(|err| IdentityError::InvalidKey(err.to_string()))?;
        let bytes: [u8; 32] = decoded
            .try_into()
            .map_err(|_| IdentityError::InvalidKey("invalid seed length".to_string()))?;

        Ok(Self {
            signing_key: SigningKey::from_bytes(&bytes),
        })
    }

    pub(crate) fn seed_hex(&self) -> String {
        hex::encode(self.signing_key.to_bytes())
    }

    pub fn verkey(&self) -> Verkey {
        Verkey::from_bytes(&self.verkey_bytes())
    }

    pub fn verkey_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    pub fn did(&self) -> String {
        did_from_verkey(&self.verkey())
    }

    /// `sign` returns the hex encoded `Ed25519` signature of the given message
    pub fn sign(&self, message: &[u8]) -> String {
        let signature = self.signing_key.sign(message);
        hex::encode(signature.to_bytes())
    }

    /// `to_box_secret_key` converts the signing key into its `X25519` form
    pub fn to_box_secret_key(&self) -> BoxSecretKey {
        BoxSecretKey::from(self.signing_key.to_scalar_bytes())
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("verkey", &self.verkey())
            .finish_non_exhaustive()
    }
}
