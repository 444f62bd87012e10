use log::debug;

use crate::{DEFAULT_CONFIG, SortConfig, SortError};

use super::common::{self, IntegerKey};
use super::insertion_sort::insertion_sort;

/// Each bucket is insertion sorted, so the result is stable. Like
/// [`counting_sort`](crate::counting_sort), the default config rejects more
/// than 2^24 buckets.
pub fn bucket_sort<K: IntegerKey>(data: &[K], bucket_width: usize) -> Result<Vec<K>, SortError> {
    bucket_sort_with_config(data, &DEFAULT_CONFIG.with_bucket_width(bucket_width))
}

pub fn bucket_sort_with_config<K: IntegerKey>(
    data: &[K],
    config: &SortConfig,
) -> Result<Vec<K>, SortError> {
    if config.bucket_width == 0 {
        return Err(SortError::InvalidBucketWidth);
    }
    let Some((min, max)) = common::min_max(data) else {
        return Ok(Vec::new());
    };

    let width = config.bucket_width as u128;
    let bucket_count = common::table_len(min, max, width, config.max_table_len)?;
    debug!(
        "bucket sort: {} values into {bucket_count} buckets of width {width}",
        data.len()
    );

    let mut buckets: Vec<Vec<K>> = vec![Vec::new(); bucket_count];
    for &x in data {
        buckets[(common::offset(x, min) / width) as usize].push(x);
    }

    let mut out = Vec::with_capacity(data.len());
    for mut bucket in buckets {
        insertion_sort(&mut bucket);
        out.extend(bucket);
    }
    Ok(out)
}
