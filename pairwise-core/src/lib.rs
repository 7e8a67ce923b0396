//! `prople-pairwise-core` provides the domain logic used to build private, pairwise
//! communication channels between two `DID` holders.
//!
//! The crate doesn't touch any network or storage engine directly. Every external
//! collaborator (ledger, wallet storage) is modeled as a trait that must be implemented
//! by the outer layers, see the `prople-pairwise-agent` crate.
pub mod identity;
