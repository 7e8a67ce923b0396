use rst_common::standard::serde::de::DeserializeOwned;
use rst_common::standard::serde::Serialize;
use rst_common::standard::serde_json;
use rst_common::with_logging::log::debug;
use rst_common::with_tracing::tracing_subscriber::{
    self, layer::SubscriberExt, util::SubscriberInitExt,
};

use prople_pairwise_agent::PairwiseAgent;

use prople_pairwise_core::identity::connection::types::ConnectionAPI;
use prople_pairwise_core::identity::connection::ConnectionRequest;
use prople_pairwise_core::identity::envelope::types::{
    AnoncryptedMessage, AuthcryptedMessage, EnvelopeAPI,
};
use prople_pairwise_core::identity::ledger::types::LedgerAPI;
use prople_pairwise_core::identity::wallet::types::WalletAPI;

use crate::errors::PairwisedError;

use super::message::TextMessage;

/// `Handler` executes a single command against the agent built from the given
/// configuration file, every output is rendered as a `JSON` string
pub struct Handler {
    agent: PairwiseAgent,
}

impl Handler {
    pub fn new(config: String) -> Result<Self, PairwisedError> {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    format!(
                        "{}=debug,prople_pairwise_core=debug,prople_pairwise_agent=debug",
                        env!("CARGO_CRATE_NAME")
                    )
                    .into()
                }),
            )
            .with(tracing_subscriber::fmt::layer().without_time())
            .init();

        let agent = PairwiseAgent::from_file(config)?;
        Ok(Self { agent })
    }

    pub async fn new_did(&self) -> Result<String, PairwisedError> {
        let did = self.agent.wallet().new_did().await?;
        to_json(&did)
    }

    pub async fn create_connection_request(&self) -> Result<String, PairwisedError> {
        let request = self.agent.connection().create_connection_request().await?;
        to_json(&request)
    }

    pub async fn accept_connection_request(
        &self,
        request: String,
    ) -> Result<String, PairwisedError> {
        let request: ConnectionRequest = from_json(&request)?;
        debug!("[pairwised:accept] request from: {}", request.did);

        let message = self
            .agent
            .connection()
            .accept_connection_request(request)
            .await?;

        to_json(&message)
    }

    pub async fn complete_connection(&self, response: String) -> Result<String, PairwisedError> {
        let message: AnoncryptedMessage = from_json(&response)?;
        let pairwise = self.agent.connection().complete_connection(message).await?;
        to_json(&pairwise)
    }

    pub async fn get_pairwise(&self, their_did: String) -> Result<String, PairwisedError> {
        let pairwise = self
            .agent
            .wallet()
            .get_pairwise_by_their_did(their_did)
            .await?;

        to_json(&pairwise)
    }

    pub async fn list_pairwise(&self) -> Result<String, PairwisedError> {
        let list = self.agent.wallet().list_pairwise().await?;
        to_json(&list)
    }

    pub async fn send_message(
        &self,
        their_did: String,
        content: String,
    ) -> Result<String, PairwisedError> {
        let pairwise = self
            .agent
            .wallet()
            .get_pairwise_by_their_did(their_did.clone())
            .await?;

        let msg = TextMessage::new(pairwise.get_my_did(), their_did, content);
        let envelope = self.agent.envelope().auth_encrypt(msg).await?;
        to_json(&envelope)
    }

    pub async fn open_message(&self, message: String) -> Result<String, PairwisedError> {
        let message: AuthcryptedMessage = from_json(&message)?;
        let msg: TextMessage = self.agent.envelope().auth_decrypt(message).await?;
        to_json(&msg)
    }

    pub async fn publish_did(&self, did: String) -> Result<String, PairwisedError> {
        let response = self.agent.ledger().publish_did(did).await?;
        to_json(&response)
    }

    pub async fn submit_request(
        &self,
        request: String,
        did: Option<String>,
    ) -> Result<String, PairwisedError> {
        let response = self
            .agent
            .ledger()
            .sign_and_submit_request(request.into_bytes(), did)
            .await?;

        to_json(&response)
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, PairwisedError> {
    serde_json::to_string_pretty(value).map_err(|err| PairwisedError::OutputError(err.to_string()))
}

fn from_json<T: DeserializeOwned>(input: &str) -> Result<T, PairwisedError> {
    serde_json::from_str(input).map_err(|err| PairwisedError::InputError(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_invalid_request() {
        let request: Result<ConnectionRequest, PairwisedError> = from_json("{\"did\": 1}");
        assert!(matches!(request, Err(PairwisedError::InputError(_))))
    }

    #[test]
    fn test_from_json_request() {
        let request: Result<ConnectionRequest, PairwisedError> =
            from_json(r#"{"did":"did:prople:abc","nonce":"n-1"}"#);
        assert!(!request.is_err());
        assert_eq!(request.unwrap().nonce, "n-1")
    }
}
