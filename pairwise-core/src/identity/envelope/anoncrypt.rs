//! `anoncrypt` provides recipient confidentiality only
//!
//! The payload sealed to the `X25519` form of the recipient verkey using an ephemeral
//! sender key, which means the recipient can't learn anything about the sender.
use crypto_box::aead::OsRng;

use crate::identity::keys::{KeyPair, Verkey};
use crate::identity::types::IdentityError;

pub fn seal(recipient: &Verkey, message: &[u8]) -> Result<Vec<u8>, IdentityError> {
    let public_key = recipient.to_box_public_key()?;
    public_key
        .seal(&mut OsRng, message)
        .map_err(|err| IdentityError::EncryptionError(err.to_string()))
}

pub fn open(recipient: &KeyPair, ciphertext: &[u8]) -> Result<Vec<u8>, IdentityError> {
    recipient
        .to_box_secret_key()
        .unseal(ciphertext)
        .map_err(|err| IdentityError::DecryptionError(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seal_open() {
        let recipient = KeyPair::generate();
        let sealed = seal(&recipient.verkey(), b"hello world");
        assert!(!sealed.is_err());

        let ciphertext = sealed.unwrap();
        assert_ne!(ciphertext, b"hello world".to_vec());

        let opened = open(&recipient, &ciphertext);
        assert!(!opened.is_err());
        assert_eq!(opened.unwrap(), b"hello world".to_vec())
    }

    #[test]
    fn test_open_wrong_recipient() {
        let recipient = KeyPair::generate();
        let other = KeyPair::generate();

        let ciphertext = seal(&recipient.verkey(), b"hello world").unwrap();
        let opened = open(&other, &ciphertext);
        assert!(matches!(opened, Err(IdentityError::DecryptionError(_))))
    }

    #[test]
    fn test_open_malformed() {
        let recipient = KeyPair::generate();
        let opened = open(&recipient, b"short");
        assert!(matches!(opened, Err(IdentityError::DecryptionError(_))))
    }

    #[test]
    fn test_seal_invalid_verkey() {
        let sealed = seal(&Verkey::from("invalid".to_string()), b"hello world");
        assert!(matches!(sealed, Err(IdentityError::InvalidKey(_))))
    }
}
