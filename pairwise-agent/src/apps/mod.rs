mod db;
pub use db::{Bucket as DbBucket, Builder as DbBuilder, DbError};

pub mod wallet;
