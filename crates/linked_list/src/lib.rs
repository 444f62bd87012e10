mod node;
mod reverse;

use thiserror::Error;

pub use node::{Link, ListNode, format_list, from_slice, len, to_vec};
pub use reverse::{
    reverse_between, reverse_first_n, reverse_list, reverse_list_recursive,
    reverse_list_with_stack,
};

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ListError {
    #[error("position {position} is outside a list of length {len}")]
    InvalidPosition { position: usize, len: usize },
    #[error("range {left}..={right} is empty")]
    EmptyRange { left: usize, right: usize },
}
