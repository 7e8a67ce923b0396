//! `ledger` provides the `JSON-RPC` client used to talk with the public ledger, it is
//! the concrete implementation of the core `LedgerBuilder`
mod endpoint;
pub use endpoint::{build_endpoint, EndpointError};

mod rpc_method;
pub use rpc_method::{build_rpc_method, Method};

mod rpc_param;
pub use rpc_param::Param;

mod client;
pub use client::{LedgerClient, RpcErrorObject, RpcRequest, RpcResponse};
