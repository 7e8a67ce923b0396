use rst_common::with_errors::thiserror::{self, Error};

use prople_pairwise_agent::common::types::CommonError;
use prople_pairwise_core::identity::types::IdentityError;

#[derive(Debug, Error)]
pub enum PairwisedError {
    #[error("agent error: {0}")]
    AgentError(#[from] CommonError),

    #[error("identity error: {0}")]
    IdentityError(#[from] IdentityError),

    #[error("input error: {0}")]
    InputError(String),

    #[error("output error: {0}")]
    OutputError(String),
}
