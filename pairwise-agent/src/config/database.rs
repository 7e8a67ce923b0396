use rst_common::standard::serde::{self, Deserialize};

use crate::common::types::{CommonError, ToValidate};

/// `StoreLocation` is where the wallet lives on disk: the `RocksDB` path and the column
/// family holding every wallet record
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(crate = "self::serde")]
pub struct StoreLocation {
    path: String,
    cf_name: String,
}

impl StoreLocation {
    pub fn path(&self) -> String {
        self.path.to_owned()
    }

    pub fn cf_name(&self) -> String {
        self.cf_name.to_owned()
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(crate = "self::serde")]
pub struct StoreOptions {
    create_if_missing: bool,
    create_missing_columns: bool,
    set_error_if_exists: bool,
    set_wal_dir: String,
}

impl StoreOptions {
    pub fn create_if_missing(&self) -> bool {
        self.create_if_missing
    }

    pub fn create_missing_columns(&self) -> bool {
        self.create_missing_columns
    }

    pub fn error_if_exists(&self) -> bool {
        self.set_error_if_exists
    }

    pub fn wal_dir(&self) -> String {
        self.set_wal_dir.to_owned()
    }
}

/// `WalletStore` maps the `[database.wallet.common]` and `[database.wallet.db]` tables
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(crate = "self::serde")]
pub struct WalletStore {
    common: StoreLocation,
    db: StoreOptions,
}

impl WalletStore {
    pub fn location(&self) -> &StoreLocation {
        &self.common
    }

    pub fn options(&self) -> &StoreOptions {
        &self.db
    }
}

impl ToValidate for WalletStore {
    fn validate(&self) -> Result<(), CommonError> {
        let required = [
            ("common.path", &self.common.path),
            ("common.cf_name", &self.common.cf_name),
            ("db.set_wal_dir", &self.db.set_wal_dir),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(CommonError::ValidationError(format!(
                "config: database.wallet missing: {}",
                missing.join(", ")
            )));
        }

        Ok(())
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(crate = "self::serde")]
pub struct Database {
    wallet: WalletStore,
}

impl Database {
    pub fn wallet(&self) -> &WalletStore {
        &self.wallet
    }
}

impl ToValidate for Database {
    fn validate(&self) -> Result<(), CommonError> {
        self.wallet.validate()
    }
}
