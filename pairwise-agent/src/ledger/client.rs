use std::time::Duration;

use rst_common::standard::async_trait::async_trait;
use rst_common::standard::serde::de::DeserializeOwned;
use rst_common::standard::serde::{self, Deserialize, Serialize};
use rst_common::standard::serde_json::Value;
use rst_common::with_logging::log::debug;

use prople_pairwise_core::identity::keys::Verkey;
use prople_pairwise_core::identity::ledger::types::{LedgerBuilder, LedgerResponse, SignedRequest};
use prople_pairwise_core::identity::types::IdentityError;

use crate::common::types::CommonError;
use crate::config::Ledger as LedgerConfig;

use super::endpoint::build_endpoint;
use super::rpc_method::{build_rpc_method, Method};
use super::rpc_param::Param;

const JSONRPC_VERSION: &str = "2.0";
const RPC_PATH: &str = "/rpc";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Option<Value>,
    pub id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
pub struct RpcResponse<T> {
    pub jsonrpc: String,

    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub result: Option<T>,

    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// `LedgerClient` is the `JSON-RPC` over `HTTP` implementation of [`LedgerBuilder`]
///
/// Every call is a `POST` request sent to `<endpoint>/rpc`. Transport failures, including
/// the configured timeout, are reported as [`IdentityError::LedgerUnavailable`], while an
/// error object returned by the ledger is reported as [`IdentityError::LedgerError`]
#[derive(Clone)]
pub struct LedgerClient {
    client: reqwest::Client,
    endpoint: String,
}

impl LedgerClient {
    pub fn new(config: &LedgerConfig) -> Result<Self, CommonError> {
        let addr = config.get_address()?;
        let endpoint =
            build_endpoint(addr).map_err(|err| CommonError::LedgerError(err.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.get_timeout_secs()))
            .build()
            .map_err(|err| CommonError::LedgerError(err.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn get_endpoint(&self) -> String {
        self.endpoint.to_owned()
    }

    async fn call<T>(&self, method: Method, param: Param) -> Result<Option<T>, IdentityError>
    where
        T: DeserializeOwned,
    {
        let params = param
            .build_serde_value()
            .map_err(|err| IdentityError::SerializationError(err.to_string()))?;

        let payload = RpcRequest {
            jsonrpc: String::from(JSONRPC_VERSION),
            method: build_rpc_method(method),
            params: Some(params),
            id: None,
        };

        let url = format!("{}{}", self.endpoint, RPC_PATH);
        debug!("[ledger:call] sending {} to {}", payload.method, url);

        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| IdentityError::LedgerUnavailable(err.to_string()))?;

        if response.status().is_server_error() {
            return Err(IdentityError::LedgerUnavailable(format!(
                "ledger responded with status: {}",
                response.status()
            )));
        }

        let rpc_response = response
            .json::<RpcResponse<T>>()
            .await
            .map_err(|err| IdentityError::LedgerError(err.to_string()))?;

        if let Some(err) = rpc_response.error {
            return Err(IdentityError::LedgerError(format!(
                "[{}] {}",
                err.code, err.message
            )));
        }

        Ok(rpc_response.result)
    }
}

#[async_trait]
impl LedgerBuilder for LedgerClient {
    async fn resolve_verkey(&self, did: String) -> Result<Option<Verkey>, IdentityError> {
        let result: Option<String> = self
            .call(Method::GetVerkey, Param::GetVerkey { did: did.clone() })
            .await?;

        match result {
            Some(key) => {
                let verkey = Verkey::from(key);
                let _ = verkey.verifying_key()?;

                debug!("[ledger:resolve_verkey] verkey found for: {}", did);
                Ok(Some(verkey))
            }
            None => {
                debug!("[ledger:resolve_verkey] unknown did: {}", did);
                Ok(None)
            }
        }
    }

    async fn submit_request(
        &self,
        request: SignedRequest,
    ) -> Result<LedgerResponse, IdentityError> {
        let result: Option<Value> = self
            .call(Method::SubmitRequest, Param::SubmitRequest { request })
            .await?;

        Ok(LedgerResponse {
            result: result.unwrap_or(Value::Null),
        })
    }
}
