//! `wallet` is the only place where private keys live
//!
//! It maintains the `DID` minted by this agent, the peer `DID` bindings and the pairwise
//! relationships. All of the operations that need a private key (decrypting, authcrypting
//! and signing) executed inside the wallet, the key itself never returned to the callers.
pub mod did;
pub mod pairwise;
pub mod types;
pub mod usecase;

pub use did::DidRecord;
pub use pairwise::Pairwise;
pub use usecase::Usecase;
