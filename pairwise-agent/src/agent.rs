use std::sync::Arc;

use rst_common::with_logging::log::debug;

use prople_pairwise_core::identity::connection::Usecase as ConnectionUsecase;
use prople_pairwise_core::identity::envelope::Usecase as EnvelopeUsecase;
use prople_pairwise_core::identity::ledger::Usecase as LedgerUsecase;
use prople_pairwise_core::identity::resolver::Usecase as ResolverUsecase;
use prople_pairwise_core::identity::wallet::Usecase as WalletUsecase;

use crate::apps::wallet::Repository;
use crate::apps::DbBuilder;
use crate::common::helpers;
use crate::common::types::CommonError;
use crate::config::{Config, Parser as ConfigManager};
use crate::ledger::LedgerClient;

pub type Wallet = WalletUsecase<Repository>;
pub type Resolver = ResolverUsecase<Wallet, LedgerClient>;
pub type Connection = ConnectionUsecase<Wallet, Resolver>;
pub type Envelope = EnvelopeUsecase<Wallet, Resolver>;
pub type Ledger = LedgerUsecase<Wallet, LedgerClient>;

/// `PairwiseAgent` wires the core usecases with their concrete collaborators
///
/// The wallet is backed by the `RocksDB` repository and the resolver falls back to the
/// `JSON-RPC` ledger client. Usecases sharing the same wallet and resolver instances are
/// built on demand
pub struct PairwiseAgent {
    config: Config,
    wallet: Arc<Wallet>,
    resolver: Arc<Resolver>,
    ledger_client: Arc<LedgerClient>,
}

impl PairwiseAgent {
    pub fn from_file(conf_file: String) -> Result<Self, CommonError> {
        let config = ConfigManager::new(conf_file)
            .parse()
            .map_err(|err| CommonError::ConfigError(err.to_string()))?;

        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, CommonError> {
        helpers::validate(config.clone())?;

        let name = config.agent().get_name();
        debug!("[{}][agent] building wallet storage", name);

        let mut db_builder = DbBuilder::new(config.clone());
        let db_executor = db_builder.build(|opts| opts.db().wallet().clone())?;

        let repo = Repository::new(db_executor);
        let wallet = Arc::new(WalletUsecase::new(Arc::new(repo)));

        let ledger_client = Arc::new(LedgerClient::new(config.ledger())?);
        debug!(
            "[{}][agent] ledger endpoint: {}",
            name,
            ledger_client.get_endpoint()
        );

        let resolver = Arc::new(ResolverUsecase::new(wallet.clone(), ledger_client.clone()));

        Ok(Self {
            config,
            wallet,
            resolver,
            ledger_client,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn wallet(&self) -> Arc<Wallet> {
        self.wallet.clone()
    }

    pub fn resolver(&self) -> Arc<Resolver> {
        self.resolver.clone()
    }

    pub fn connection(&self) -> Connection {
        ConnectionUsecase::new(
            self.config.agent().get_name(),
            self.wallet.clone(),
            self.resolver.clone(),
        )
    }

    pub fn envelope(&self) -> Envelope {
        EnvelopeUsecase::new(
            self.config.agent().get_name(),
            self.wallet.clone(),
            self.resolver.clone(),
        )
    }

    pub fn ledger(&self) -> Ledger {
        LedgerUsecase::new(
            self.wallet.clone(),
            self.ledger_client.clone(),
            self.config.agent().get_main_did(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_missing() {
        let agent = PairwiseAgent::from_file("./not-exists.toml".to_string());
        assert!(matches!(agent, Err(CommonError::ConfigError(_))))
    }

    #[test]
    fn test_from_config_invalid() {
        let agent = PairwiseAgent::from_config(Config::new());
        assert!(matches!(agent, Err(CommonError::ValidationError(_))))
    }
}
