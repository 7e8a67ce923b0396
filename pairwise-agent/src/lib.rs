//! `prople-pairwise-agent` provides the concrete collaborators used by the
//! `prople-pairwise-core` usecases: the `TOML` configuration, the `RocksDB` wallet
//! repository and the `JSON-RPC` ledger client
pub mod common;
pub mod config;
pub mod ledger;

mod apps;
pub use apps::wallet::Repository as WalletRepository;
pub use apps::DbBuilder;

mod agent;
pub use agent::{Connection, Envelope, Ledger, PairwiseAgent, Resolver, Wallet};
