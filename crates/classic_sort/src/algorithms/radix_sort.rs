use log::debug;

use crate::SortError;

use super::common::{self, IntegerKey};

/// Negative values are rejected rather than offset.
pub fn radix_sort<K: IntegerKey>(data: &[K]) -> Result<Vec<K>, SortError> {
    if let Some((index, value)) = data.iter().enumerate().find(|(_, x)| x.key() < 0) {
        debug!("radix sort rejected negative value at index {index}");
        return Err(SortError::NegativeValue {
            index,
            value: value.key(),
        });
    }
    let Some((_, max)) = common::min_max(data) else {
        return Ok(Vec::new());
    };

    let digits = decimal_digits(max);
    debug!("radix sort: {} values, {digits} digit passes", data.len());

    let mut out = data.to_vec();
    for digit in 0..digits {
        out = counting_sort_by_digit(&out, digit);
    }
    Ok(out)
}

/// Stable counting sort keyed on decimal digit `digit` (0 = ones). Digits
/// past the width of every value read as 0.
///
/// # Panics
///
/// Panics if `data` contains a negative value.
pub fn counting_sort_by_digit<K: IntegerKey>(data: &[K], digit: u32) -> Vec<K> {
    let divisor = 10_i128.checked_pow(digit);
    let digit_of = |x: K| {
        let key = x.key();
        assert!(key >= 0, "counting_sort_by_digit requires non-negative values");
        divisor.map_or(0, |d| (key / d % 10) as usize)
    };

    let mut counts = [0usize; 10];
    for &x in data {
        counts[digit_of(x)] += 1;
    }
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    let mut out = data.to_vec();
    for &x in data.iter().rev() {
        let slot = &mut counts[digit_of(x)];
        *slot -= 1;
        out[*slot] = x;
    }
    out
}

fn decimal_digits(mut value: i128) -> u32 {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}
