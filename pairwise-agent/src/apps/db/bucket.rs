use rst_common::standard::serde::de::DeserializeOwned;
use rst_common::standard::serde::{self, Deserialize, Serialize};
use rst_common::standard::serde_json;

use rstdev_domain::entity::ToJSON;
use rstdev_domain::BaseError;

use super::types::DbError;

/// `Bucket` is a collection of values saved under a single key, its values appended
/// through the `RocksDB` merge operator
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(crate = "self::serde")]
pub struct Bucket<T>
where
    T: TryInto<Vec<u8>> + Serialize,
{
    collections: Vec<T>,
}

impl<T> Bucket<T>
where
    T: TryInto<Vec<u8>> + Serialize + DeserializeOwned,
{
    pub fn new() -> Self {
        Self {
            collections: Vec::new(),
        }
    }

    pub fn add(&mut self, val: T) {
        self.collections.push(val)
    }

    pub fn iterate(&self) -> impl Iterator<Item = &T> {
        self.collections.iter()
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

impl<T> Default for Bucket<T>
where
    T: TryInto<Vec<u8>> + Serialize + DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TryInto<Vec<u8>> for Bucket<T>
where
    T: TryInto<Vec<u8>> + Serialize,
{
    type Error = DbError;
    fn try_into(self) -> Result<Vec<u8>, Self::Error> {
        let json =
            serde_json::to_vec(&self).map_err(|err| DbError::BucketError(err.to_string()))?;

        Ok(json)
    }
}

impl<T> TryFrom<Vec<u8>> for Bucket<T>
where
    T: TryInto<Vec<u8>> + Serialize + DeserializeOwned,
{
    type Error = DbError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        let bucket: Self =
            serde_json::from_slice(&value).map_err(|err| DbError::BucketError(err.to_string()))?;
        Ok(bucket)
    }
}

impl<T> ToJSON for Bucket<T>
where
    T: TryInto<Vec<u8>> + Serialize,
{
    fn to_json(&self) -> Result<String, BaseError> {
        let json_str =
            serde_json::to_string(&self).map_err(|err| BaseError::ToJSONError(err.to_string()))?;

        Ok(json_str)
    }
}
