//! `ledger` defines the ledger collaborator abstraction, the [`types::LedgerBuilder`],
//! and the signed requests submission logic
pub mod types;
pub mod usecase;

pub use usecase::Usecase;
