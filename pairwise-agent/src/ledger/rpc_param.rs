use rst_common::standard::serde::{self, Deserialize, Serialize};
use rst_common::standard::serde_json::{self, Value};

use prople_pairwise_core::identity::ledger::types::SignedRequest;

use crate::common::types::CommonError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "self::serde")]
#[serde(tag = "param", content = "payload")]
pub enum Param {
    GetVerkey { did: String },
    SubmitRequest { request: SignedRequest },
}

impl Param {
    pub fn build_serde_value(&self) -> Result<Value, CommonError> {
        serde_json::to_value(self).map_err(|err| CommonError::LedgerError(err.to_string()))
    }
}

impl TryFrom<Value> for Param {
    type Error = CommonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value).map_err(|err| CommonError::LedgerError(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_get_verkey_json_str() {
        let param = Param::GetVerkey {
            did: String::from("did:prople:abc"),
        };

        let try_json = serde_json::to_string(&param);
        assert!(!try_json.is_err());
        assert_eq!(
            try_json.unwrap(),
            r#"{"param":"GetVerkey","payload":{"did":"did:prople:abc"}}"#
        )
    }

    #[test]
    fn test_parse_submit_request() {
        let param = Param::SubmitRequest {
            request: SignedRequest {
                did: "did:prople:abc".to_string(),
                request: b"{}".to_vec(),
                signature: "aabb".to_string(),
            },
        };

        let value = param.build_serde_value();
        assert!(!value.is_err());

        let parsed = Param::try_from(value.unwrap());
        assert!(!parsed.is_err());
        assert_eq!(parsed.unwrap(), param)
    }
}
