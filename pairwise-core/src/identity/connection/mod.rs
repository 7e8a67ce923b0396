//! `connection` composes the wallet, the resolver and the envelope engines into the
//! connection handshake
//!
//! ```text
//! Inviter                                   Invitee
//!   | create_connection_request               |
//!   |---------- ConnectionRequest ----------->|
//!   |                                         | accept_connection_request
//!   |<----- AnoncryptedMessage(Response) -----|
//!   | complete_connection                     |
//! ```
//!
//! After both sides finished, each of them has a pairwise record for the other's `DID`.
pub mod messages;
pub mod types;
pub mod usecase;

pub use messages::{ConnectionRequest, ConnectionResponse};
pub use usecase::Usecase;
