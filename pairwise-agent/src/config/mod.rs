mod agent;
pub use agent::Agent;

mod ledger;
pub use ledger::Ledger;

mod database;
pub use database::{Database, StoreLocation, StoreOptions, WalletStore};

mod config;
pub use config::Config;

mod parser;
pub use parser::Parser;
