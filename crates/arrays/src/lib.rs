mod remove_duplicates;
mod two_sum;

pub use remove_duplicates::{
    remove_duplicates, remove_duplicates_unsorted, remove_duplicates_with_set,
};
pub use two_sum::{two_sum, two_sum_brute_force};
