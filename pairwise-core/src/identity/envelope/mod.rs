//! `envelope` provides the `anoncrypt` and `authcrypt` engines
//!
//! The primitives in [`anoncrypt`] and [`authcrypt`] work on raw bytes and key material,
//! while the [`Usecase`] works on typed payloads, resolving the keys through the resolver
//! and delegating every private key operation to the wallet.
pub mod anoncrypt;
pub mod authcrypt;
pub mod types;
pub mod usecase;

pub use usecase::Usecase;
