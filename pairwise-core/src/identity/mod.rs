//! `identity` is the main domain of this crate. It covers everything needed to open and
//! use a pairwise channel between two `DID` holders, for example an issuer (university)
//! and a holder (student).
//!
//! The domain is split into multiple sub-domains:
//!
//! - `keys`
//! - `envelope`
//! - `resolver`
//! - `wallet`
//! - `ledger`
//! - `connection`
//!
//! ---
//!
//! The `keys` sub-domain maintains the key material of a `DID`. A `DID` minted by this
//! crate is derived from its `Ed25519` verification key (the `verkey`). The same key pair
//! is converted into its `X25519` form when it is used to encrypt or decrypt envelopes.
//!
//! ---
//!
//! The `envelope` sub-domain provides two encryption disciplines:
//!
//! - `anoncrypt`, recipient confidentiality only, the recipient can't know who sent the message
//! - `authcrypt`, recipient confidentiality and sender authenticity
//!
//! ---
//!
//! The `resolver` sub-domain used to find the current `verkey` of some `DID`. It will look into
//! the local wallet first, and fallback to the ledger.
//!
//! ---
//!
//! The `wallet` sub-domain is the only place where private keys live. It also maintains the
//! pairwise relationships, there is at most one relationship for each peer `DID`.
//!
//! ---
//!
//! The `ledger` sub-domain defines the ledger collaborator abstraction and the signed
//! request submission.
//!
//! ---
//!
//! The `connection` sub-domain composes all of the above into the connection handshake.
//! An inviter sends a `ConnectionRequest`, the invitee mints a fresh `DID`, records the
//! pairwise relationship, and answers with an anoncrypted `ConnectionResponse`.
pub mod types;

pub mod connection;
pub mod envelope;
pub mod keys;
pub mod ledger;
pub mod resolver;
pub mod wallet;

#[cfg(test)]
pub(crate) mod testutil;
