use derive_more::{Display, From, Into};

use rst_common::standard::serde::{self, Deserialize, Serialize};

use crypto_box::PublicKey as BoxPublicKey;
use ed25519_dalek::VerifyingKey;

use crate::identity::types::IdentityError;

/// `Verkey` is the hex encoded `Ed25519` public key of a `DID`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Into, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
#[serde(transparent)]
pub struct Verkey(String);

impl Verkey {
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_bytes(&self) -> Result<[u8; 32], IdentityError> {
        let decoded =
            hex::decode(&self.0).map_err(|err| IdentityError::InvalidKey(err.to_string()))?;

        decoded
            .try_into()
            .map_err(|_| IdentityError::InvalidKey(format!("invalid key length: {}", self.0)))
    }

    /// `verifying_key` parses the verkey and make sure it is a valid `Ed25519` point
    pub fn verifying_key(&self) -> Result<VerifyingKey, IdentityError> {
        let bytes = self.to_bytes()?;
        VerifyingKey::from_bytes(&bytes).map_err(|err| IdentityError::InvalidKey(err.to_string()))
    }

    /// `to_box_public_key` converts the `Ed25519` verkey into its `X25519` form
    pub fn to_box_public_key(&self) -> Result<BoxPublicKey, IdentityError> {
        let verifying_key = self.verifying_key()?;
        Ok(BoxPublicKey::from(verifying_key.to_montgomery().to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use table_test::table_test;

    #[test]
    fn test_invalid_verkeys() {
        let table = vec![
            ("not-hex", "invalid hex"),
            ("aabb", "invalid length"),
            ("", "empty"),
        ];

        for (validator, input, expected) in table_test!(table) {
            let verkey = Verkey::from(input.to_string());
            let result = verkey.verifying_key();

            validator
                .given(&format!("{:?}", input))
                .when("verifying_key")
                .then(&format!("it should be an error: {}", expected))
                .assert_eq(true, matches!(result, Err(IdentityError::InvalidKey(_))));
        }
    }

    #[test]
    fn test_bytes_conversion() {
        let bytes = [7u8; 32];
        let verkey = Verkey::from_bytes(&bytes);

        assert_eq!(verkey.as_str().len(), 64);
        assert_eq!(verkey.to_bytes().unwrap(), bytes);

        let raw: String = verkey.clone().into();
        assert_eq!(raw, verkey.to_string())
    }
}
