//! `resolver` used to find the current verkey of a `DID`
pub mod types;
pub mod usecase;

pub use usecase::Usecase;
