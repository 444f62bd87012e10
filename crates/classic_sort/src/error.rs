use thiserror::Error;

/// Inputs the non-comparison sorts refuse instead of producing a wrong order.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SortError {
    #[error("bucket width must be at least 1")]
    InvalidBucketWidth,
    #[error("radix sort requires non-negative values, found {value} at index {index}")]
    NegativeValue { index: usize, value: i128 },
    #[error("value range needs {range} table slots, limit is {limit}")]
    RangeTooLarge { range: u128, limit: usize },
}
