use crate::common::types::CommonError;

pub const RPC_METHOD_PREFIX: &str = "prople.ledger";

const METHOD_GET_VERKEY: &str = "get_verkey";
const METHOD_SUBMIT_REQUEST: &str = "submit_request";

#[derive(Clone, Debug, PartialEq)]
pub enum Method {
    GetVerkey,
    SubmitRequest,
}

impl Method {
    pub fn build_path(&self) -> &str {
        match self {
            Method::GetVerkey => METHOD_GET_VERKEY,
            Method::SubmitRequest => METHOD_SUBMIT_REQUEST,
        }
    }
}

pub fn build_rpc_method(method: Method) -> String {
    format!("{}.{}", RPC_METHOD_PREFIX, method.build_path())
}

impl TryFrom<String> for Method {
    type Error = CommonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let path = value
            .strip_prefix(RPC_METHOD_PREFIX)
            .and_then(|val| val.strip_prefix('.'))
            .ok_or(CommonError::LedgerError(format!("unknown method: {}", value)))?;

        match path {
            METHOD_GET_VERKEY => Ok(Self::GetVerkey),
            METHOD_SUBMIT_REQUEST => Ok(Self::SubmitRequest),
            _ => Err(CommonError::LedgerError(format!("unknown method: {}", value))),
        }
    }
}
