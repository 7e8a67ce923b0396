use rstdev_config::format::use_toml;
use rstdev_config::parser::from_file;
use rstdev_config::{types::ConfigError, Builder};

use super::Config;

pub struct Parser {
    conf_file: String,
}

impl Parser {
    pub fn new(conf_file: String) -> Self {
        Self { conf_file }
    }

    pub fn parse(&self) -> Result<Config, ConfigError> {
        let config_toml = {
            let config_builder: Result<Config, ConfigError> =
                Builder::new(from_file(self.conf_file.to_owned()))
                    .fetch()?
                    .parse(use_toml);

            config_builder
        };

        config_toml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    use crate::common::helpers;

    #[test]
    fn test_parse_config() {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("src/config/fixtures");

        let toml_file = format!("{}/config.toml", path.display());
        let parser = Parser::new(toml_file);
        let config_builder = parser.parse();

        assert!(!config_builder.is_err());

        let config = config_builder.unwrap();
        assert_eq!(config.agent().get_name(), "university".to_string());
        assert!(config.agent().get_main_did().is_none());
        assert_eq!(config.ledger().get_timeout_secs(), 10);

        let location = config.db().wallet().location();
        assert_eq!(location.path(), "./wallet-storage");
        assert_eq!(location.cf_name(), "wallet-cf");

        let options = config.db().wallet().options();
        assert_eq!(options.wal_dir(), "./wallet-db-wal");
        assert!(options.create_if_missing());
        assert!(options.create_missing_columns());
        assert!(!options.error_if_exists());

        assert!(!helpers::validate(config).is_err())
    }

    #[test]
    fn test_parse_missing_file() {
        let parser = Parser::new("/not/exists/config.toml".to_string());
        assert!(parser.parse().is_err())
    }
}
