use rst_common::standard::serde::{self, Deserialize};

use crate::common::types::{CommonError, ToValidate};

#[derive(Deserialize, Debug, Clone)]
#[serde(crate = "self::serde")]
pub struct Agent {
    pub(super) name: String,
    pub(super) main_did: Option<String>,
}

impl Agent {
    pub fn get_name(&self) -> String {
        self.name.to_owned()
    }

    pub fn get_main_did(&self) -> Option<String> {
        self.main_did.to_owned()
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self {
            name: "".to_string(),
            main_did: None,
        }
    }
}

impl ToValidate for Agent {
    fn validate(&self) -> Result<(), CommonError> {
        if self.name.is_empty() {
            return Err(CommonError::ValidationError(
                "config: agent:name is missing".to_string(),
            ));
        }

        Ok(())
    }
}
