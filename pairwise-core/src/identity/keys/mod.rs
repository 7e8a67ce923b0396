//! `keys` maintains the key material of a `DID`
//!
//! A `DID` minted by this crate always derived from its `Ed25519` public key, the
//! [`Verkey`]. The [`KeyPair`] never leaves the wallet boundary, only the wallet
//! repository able to persist its seed.
mod keypair;
mod verkey;

pub use keypair::KeyPair;
pub use verkey::Verkey;

/// `DID_METHOD_PREFIX` is the method prefix used by all `DID` minted by this crate
pub const DID_METHOD_PREFIX: &str = "did:prople";

/// `did_from_verkey` build the `DID` identifier from the first 16 bytes of its [`Verkey`]
pub fn did_from_verkey(verkey: &Verkey) -> String {
    let id = verkey.as_str().chars().take(32).collect::<String>();
    format!("{}:{}", DID_METHOD_PREFIX, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_did_from_verkey() {
        let keypair = KeyPair::generate();
        let did = did_from_verkey(&keypair.verkey());

        assert!(did.starts_with("did:prople:"));
        assert_eq!(did.len(), "did:prople:".len() + 32);
        assert_eq!(did, keypair.did())
    }
}
