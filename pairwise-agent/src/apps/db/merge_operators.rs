use rstdev_storage::engine::rocksdb::lib::rust_rocksdb::merge_operator::MergeOperands;

use prople_pairwise_core::identity::wallet::Pairwise;

use super::{Bucket, DbError};

pub const MERGE_BUCKET_ID: &str = "merge_bucket";
pub const MERGE_PAIRWISE_PREFIX: &str = "merge_pairwise";

/// `extend_bucket` appends a single operand into the bucket
///
/// An operand is either a single [`Pairwise`] written by the repository, or a whole
/// bucket produced by an earlier partial merge during flush or compaction
fn extend_bucket(bucket: &mut Bucket<Pairwise>, operand: &[u8]) -> Result<(), DbError> {
    if let Ok(pairwise) = Pairwise::try_from(operand.to_vec()) {
        bucket.add(pairwise);
        return Ok(());
    }

    let partial = Bucket::<Pairwise>::try_from(operand.to_vec())?;
    for pairwise in partial.iterate() {
        bucket.add(pairwise.to_owned());
    }

    Ok(())
}

fn merge_pairwise_values<'a>(
    existing: Option<&[u8]>,
    operands: impl Iterator<Item = &'a [u8]>,
) -> Option<Vec<u8>> {
    let mut bucket = match existing {
        Some(val) => Bucket::<Pairwise>::try_from(val.to_vec()).ok()?,
        None => Bucket::<Pairwise>::new(),
    };

    for operand in operands {
        extend_bucket(&mut bucket, operand).ok()?;
    }

    let bucket_bin: Result<Vec<u8>, DbError> = bucket.try_into();
    bucket_bin.ok()
}

/// `merge_values` is the merge logic behind [`merge_bucket`], detached from the
/// `RocksDB` operands type
///
/// Keys prefixed by [`MERGE_PAIRWISE_PREFIX`] collect their operands into a [`Bucket`].
/// Any other key behaves like a plain write: the latest operand wins, falling back to
/// the existing value and finally to an empty value
pub(crate) fn merge_values<'a>(
    key: &[u8],
    existing: Option<&[u8]>,
    operands: impl Iterator<Item = &'a [u8]>,
) -> Option<Vec<u8>> {
    if key.starts_with(MERGE_PAIRWISE_PREFIX.as_bytes()) {
        return merge_pairwise_values(existing, operands);
    }

    let latest = operands.last().or(existing).unwrap_or_default();
    Some(latest.to_vec())
}

/// `merge_bucket` is registered as an associative operator, so it runs both as the full
/// merge and as the partial merge of pending operands
pub fn merge_bucket(
    new_key: &[u8],
    existing: Option<&[u8]>,
    operands: &MergeOperands,
) -> Option<Vec<u8>> {
    merge_values(new_key, existing, operands.into_iter())
}
