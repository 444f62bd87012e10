mod palindrome;
mod reverse;

pub use palindrome::{
    count_palindromic_substrings, is_palindrome, is_palindrome_two_pointer, is_simple_palindrome,
    longest_palindrome,
};
pub use reverse::{reverse_in_place, reverse_recursive, reverse_string, reverse_words};
