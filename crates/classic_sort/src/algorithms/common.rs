use crate::SortError;

/// Integer values the non-comparison sorts can index tables with.
///
/// The `PartialOrd` impl must agree with the order of [`IntegerKey::key`].
pub trait IntegerKey: Copy + PartialOrd {
    fn key(self) -> i128;
}

macro_rules! impl_integer_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntegerKey for $ty {
                #[inline]
                fn key(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_integer_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[inline]
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}

#[inline]
pub fn min_max<K: IntegerKey>(data: &[K]) -> Option<(i128, i128)> {
    let (&first, rest) = data.split_first()?;
    let mut min = first.key();
    let mut max = min;
    for &x in rest {
        let k = x.key();
        if k < min {
            min = k;
        }
        if k > max {
            max = k;
        }
    }
    Some((min, max))
}

/// Number of slots needed to cover `min..=max` with slots `width` values wide.
pub(crate) fn table_len(
    min: i128,
    max: i128,
    width: u128,
    limit: usize,
) -> Result<usize, SortError> {
    debug_assert!(min <= max && width > 0);
    let range = (max - min) as u128 / width + 1;
    if range > limit as u128 {
        return Err(SortError::RangeTooLarge { range, limit });
    }
    Ok(range as usize)
}

#[inline]
pub(crate) fn offset<K: IntegerKey>(value: K, min: i128) -> u128 {
    (value.key() - min) as u128
}

/// Element whose order ignores `tag`, so equal keys expose reordering.
#[cfg(test)]
#[derive(Clone, Copy, Debug)]
pub(crate) struct Tagged {
    pub key: i64,
    pub tag: usize,
}

#[cfg(test)]
impl Tagged {
    pub fn from_keys(keys: &[i64]) -> Vec<Self> {
        keys.iter()
            .enumerate()
            .map(|(tag, &key)| Self { key, tag })
            .collect()
    }
}

#[cfg(test)]
impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

#[cfg(test)]
impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

#[cfg(test)]
impl IntegerKey for Tagged {
    fn key(self) -> i128 {
        self.key as i128
    }
}

#[cfg(test)]
pub(crate) fn tags(data: &[Tagged]) -> Vec<usize> {
    data.iter().map(|t| t.tag).collect()
}
