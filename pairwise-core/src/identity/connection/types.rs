use rst_common::standard::async_trait::async_trait;
use rst_common::standard::serde::{self, Deserialize, Serialize};

use crate::identity::envelope::types::AnoncryptedMessage;
use crate::identity::types::IdentityError;
use crate::identity::wallet::Pairwise;

use super::ConnectionRequest;

/// `State` represents the invitee side handshake progress
///
/// Each step only moves forward, a failure at any step stops the handshake
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "self::serde")]
pub enum State {
    ReceivedRequest,
    KeyResolved,
    PairwiseStored,
    ResponseReady,
}

impl State {
    pub fn next(&self) -> Option<State> {
        match self {
            State::ReceivedRequest => Some(State::KeyResolved),
            State::KeyResolved => Some(State::PairwiseStored),
            State::PairwiseStored => Some(State::ResponseReady),
            State::ResponseReady => None,
        }
    }
}

#[async_trait]
pub trait ConnectionAPI {
    /// `create_connection_request` mints a fresh `DID` and a random nonce, and remembers
    /// the request until its response arrives
    async fn create_connection_request(&self) -> Result<ConnectionRequest, IdentityError>;

    /// `accept_connection_request` runs the invitee side of the handshake
    ///
    /// Steps:
    /// - mint a fresh `DID` for this relationship
    /// - resolve the key of the inviter `DID`
    /// - store the inviter `DID` and create the pairwise record
    /// - anoncrypt the [`super::ConnectionResponse`] to the inviter
    ///
    /// The first failure stops the handshake and its error returned as is
    async fn accept_connection_request(
        &self,
        request: ConnectionRequest,
    ) -> Result<AnoncryptedMessage, IdentityError>;

    /// `complete_connection` runs the inviter side when the anoncrypted response arrives
    async fn complete_connection(
        &self,
        message: AnoncryptedMessage,
    ) -> Result<Pairwise, IdentityError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        let mut state = State::ReceivedRequest;
        let mut visited = vec![state];
        while let Some(next) = state.next() {
            visited.push(next);
            state = next;
        }

        assert_eq!(
            visited,
            vec![
                State::ReceivedRequest,
                State::KeyResolved,
                State::PairwiseStored,
                State::ResponseReady
            ]
        )
    }
}
