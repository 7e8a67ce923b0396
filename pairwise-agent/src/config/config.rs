use rst_common::standard::serde::{self, Deserialize};

use crate::common::types::{CommonError, ToValidate};

use super::{Agent, Database, Ledger};

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(crate = "self::serde")]
pub struct Config {
    pub(super) agent: Agent,
    pub(super) ledger: Ledger,
    pub(super) database: Database,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn db(&self) -> &Database {
        &self.database
    }
}

impl ToValidate for Config {
    fn validate(&self) -> Result<(), CommonError> {
        _ = self.agent.validate()?;
        _ = self.ledger.validate()?;
        _ = self.database.validate()?;

        Ok(())
    }
}
