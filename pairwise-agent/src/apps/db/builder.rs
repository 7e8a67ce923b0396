use rstdev_storage::engine::rocksdb::db::DB;
use rstdev_storage::engine::rocksdb::executor::Executor;
use rstdev_storage::engine::rocksdb::options::Options;

use crate::common::types::CommonError;
use crate::config::{Config, WalletStore};

use super::merge_operators::{merge_bucket, MERGE_BUCKET_ID};

pub struct Builder {
    cfg: Config,
}

impl Builder {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    pub fn build(
        &mut self,
        db_callback: impl FnOnce(&Config) -> WalletStore,
    ) -> Result<Executor, CommonError> {
        let store = db_callback(&self.cfg);
        let cf_name = store.location().cf_name();
        let store_opts = store.options().to_owned();

        let mut db_opts = Options::new(store.location().path(), cf_name.clone());
        db_opts
            .build_default_opts()
            .set_db_opts(move |opt| {
                opt.create_if_missing(store_opts.create_if_missing());
                opt.create_missing_column_families(store_opts.create_missing_columns());
                opt.set_error_if_exists(store_opts.error_if_exists());
                opt.set_wal_dir(store_opts.wal_dir());

                opt
            })
            .set_cf_opts(|opt| {
                opt.set_merge_operator_associative(MERGE_BUCKET_ID, merge_bucket);

                opt
            });

        let mut db = DB::new(db_opts).map_err(|err| CommonError::DbError(err.to_string()))?;

        let db_instance = db
            .build()
            .map_err(|err| CommonError::DbError(err.to_string()))?;

        db.set_db(db_instance);

        Ok(Executor::new(db, cf_name))
    }
}
