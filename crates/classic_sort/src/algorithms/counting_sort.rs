use log::debug;

use crate::{DEFAULT_CONFIG, SortConfig, SortError};

use super::common::{self, IntegerKey};

/// Values are offset by the minimum, so negative inputs are accepted. The
/// count table has one slot per value in `min..=max`, and with
/// [`DEFAULT_CONFIG`] a range of more than 2^24 values returns
/// [`SortError::RangeTooLarge`]. Raise `max_table_len` through
/// [`counting_sort_with_config`] to sort wider ranges.
pub fn counting_sort<K: IntegerKey>(data: &[K]) -> Result<Vec<K>, SortError> {
    counting_sort_with_config(data, &DEFAULT_CONFIG)
}

pub fn counting_sort_with_config<K: IntegerKey>(
    data: &[K],
    config: &SortConfig,
) -> Result<Vec<K>, SortError> {
    let Some((min, max)) = common::min_max(data) else {
        return Ok(Vec::new());
    };
    let range = common::table_len(min, max, 1, config.max_table_len).inspect_err(|err| {
        debug!("counting sort rejected {} values: {err}", data.len());
    })?;
    debug!("counting sort: {} values, table of {range} slots", data.len());

    let mut counts = vec![0usize; range];
    for &x in data {
        counts[common::offset(x, min) as usize] += 1;
    }
    for i in 1..range {
        counts[i] += counts[i - 1];
    }

    // Walking backwards keeps equal values in input order.
    let mut out = data.to_vec();
    for &x in data.iter().rev() {
        let slot = &mut counts[common::offset(x, min) as usize];
        *slot -= 1;
        out[*slot] = x;
    }

    Ok(out)
}
