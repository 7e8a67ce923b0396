//! `authcrypt` provides recipient confidentiality and sender authenticity
//!
//! Envelope layout before it sealed to the recipient:
//!
//! ```text
//! sender_verkey (32 bytes) || nonce (24 bytes) || box(sender_sk, recipient_pk, message)
//! ```
//!
//! The inner box can only be opened using the secret key that belongs to the revealed
//! sender verkey, so a successful [`open`] proves the sender holds that key.
use crypto_box::aead::generic_array::GenericArray;
use crypto_box::aead::{Aead, AeadCore, OsRng};
use crypto_box::SalsaBox;

use crate::identity::keys::{KeyPair, Verkey};
use crate::identity::types::IdentityError;

const VERKEY_LENGTH: usize = 32;
const NONCE_LENGTH: usize = 24;

pub fn seal(sender: &KeyPair, recipient: &Verkey, message: &[u8]) -> Result<Vec<u8>, IdentityError> {
    let recipient_pk = recipient.to_box_public_key()?;
    let salsa_box = SalsaBox::new(&recipient_pk, &sender.to_box_secret_key());
    let nonce = SalsaBox::generate_nonce(&mut OsRng);

    let boxed = salsa_box
        .encrypt(&nonce, message)
        .map_err(|err| IdentityError::EncryptionError(err.to_string()))?;

    let mut inner = Vec::with_capacity(VERKEY_LENGTH + NONCE_LENGTH + boxed.len());
    inner.extend_from_slice(&sender.verkey_bytes());
    inner.extend_from_slice(nonce.as_slice());
    inner.extend_from_slice(&boxed);

    recipient_pk
        .seal(&mut OsRng, &inner)
        .map_err(|err| IdentityError::EncryptionError(err.to_string()))
}

/// `open` returns the revealed sender verkey and the plain message
pub fn open(recipient: &KeyPair, ciphertext: &[u8]) -> Result<(Verkey, Vec<u8>), IdentityError> {
    let inner = recipient
        .to_box_secret_key()
        .unseal(ciphertext)
        .map_err(|err| IdentityError::DecryptionError(err.to_string()))?;

    if inner.len() < VERKEY_LENGTH + NONCE_LENGTH {
        return Err(IdentityError::DecryptionError(
            "malformed authcrypt envelope".to_string(),
        ));
    }

    let (sender_bytes, rest) = inner.split_at(VERKEY_LENGTH);
    let (nonce_bytes, boxed) = rest.split_at(NONCE_LENGTH);

    let sender_bytes: [u8; VERKEY_LENGTH] = sender_bytes
        .try_into()
        .map_err(|_| IdentityError::DecryptionError("invalid sender verkey".to_string()))?;

    let sender_verkey = Verkey::from_bytes(&sender_bytes);
    let sender_pk = sender_verkey
        .to_box_public_key()
        .map_err(|err| IdentityError::DecryptionError(err.to_string()))?;

    let salsa_box = SalsaBox::new(&sender_pk, &recipient.to_box_secret_key());
    let message = salsa_box
        .decrypt(GenericArray::from_slice(nonce_bytes), boxed)
        .map_err(|err| IdentityError::DecryptionError(err.to_string()))?;

    Ok((sender_verkey, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seal_open() {
        let sender = KeyPair::generate();
        let recipient = KeyPair::generate();

        let sealed = seal(&sender, &recipient.verkey(), b"hello world");
        assert!(!sealed.is_err());

        let opened = open(&recipient, &sealed.unwrap());
        assert!(!opened.is_err());

        let (sender_verkey, message) = opened.unwrap();
        assert_eq!(sender_verkey, sender.verkey());
        assert_eq!(message, b"hello world".to_vec())
    }

    #[test]
    fn test_open_tampered() {
        let sender = KeyPair::generate();
        let recipient = KeyPair::generate();

        let mut ciphertext = seal(&sender, &recipient.verkey(), b"hello world").unwrap();
        let last = ciphertext.len() - 1;
        ciphertext[last] ^= 0x01;

        let opened = open(&recipient, &ciphertext);
        assert!(matches!(opened, Err(IdentityError::DecryptionError(_))))
    }

    #[test]
    fn test_open_wrong_recipient() {
        let sender = KeyPair::generate();
        let recipient = KeyPair::generate();
        let other = KeyPair::generate();

        let ciphertext = seal(&sender, &recipient.verkey(), b"hello world").unwrap();
        let opened = open(&other, &ciphertext);
        assert!(matches!(opened, Err(IdentityError::DecryptionError(_))))
    }

    #[test]
    fn test_open_forged_sender() {
        let sender = KeyPair::generate();
        let impersonated = KeyPair::generate();
        let recipient = KeyPair::generate();
        let recipient_pk = recipient.verkey().to_box_public_key().unwrap();

        // boxed by the real sender, but claiming another verkey
        let salsa_box = SalsaBox::new(&recipient_pk, &sender.to_box_secret_key());
        let nonce = SalsaBox::generate_nonce(&mut OsRng);
        let boxed = salsa_box.encrypt(&nonce, b"hello world".as_ref()).unwrap();

        let mut inner = impersonated.verkey_bytes().to_vec();
        inner.extend_from_slice(nonce.as_slice());
        inner.extend_from_slice(&boxed);
        let ciphertext = recipient_pk.seal(&mut OsRng, &inner).unwrap();

        let opened = open(&recipient, &ciphertext);
        assert!(matches!(opened, Err(IdentityError::DecryptionError(_))))
    }
}
