use multiaddr::Multiaddr;

use rst_common::standard::serde::{self, Deserialize};

use crate::common::types::{CommonError, ToValidate};

#[derive(Deserialize, Debug, Clone)]
#[serde(crate = "self::serde")]
pub struct Ledger {
    pub(super) address: String,
    pub(super) timeout_secs: u64,
}

impl Ledger {
    pub fn new(address: String, timeout_secs: u64) -> Self {
        Self {
            address,
            timeout_secs,
        }
    }

    pub fn get_address(&self) -> Result<Multiaddr, CommonError> {
        self.address
            .parse::<Multiaddr>()
            .map_err(|err| CommonError::ValidationError(format!("config: ledger:address {}", err)))
    }

    pub fn get_timeout_secs(&self) -> u64 {
        self.timeout_secs.to_owned()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            address: "/ip4/127.0.0.1/tcp/9701".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ToValidate for Ledger {
    fn validate(&self) -> Result<(), CommonError> {
        let _ = self.get_address()?;

        if self.timeout_secs == 0 {
            return Err(CommonError::ValidationError(
                "config: ledger:timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
