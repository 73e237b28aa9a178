pub mod fibonacci;
pub mod merge_sort;
pub mod palindrome;

pub use fibonacci::{fibonacci, fibonacci_memo, FibonacciMemo, MAX_FIBONACCI_INDEX};
pub use merge_sort::{merge_sort, merge_sort_by};
pub use palindrome::{is_palindrome, is_palindrome_str};
