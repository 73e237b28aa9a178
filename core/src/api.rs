//! Stable re-exports for consumers (`cli` and external crates).
//!
//! Prefer importing from `recurse_core::api` instead of reaching into internal modules.

pub use crate::algorithms::{
    fibonacci, fibonacci_memo, is_palindrome, is_palindrome_str, merge_sort, merge_sort_by,
    FibonacciMemo, MAX_FIBONACCI_INDEX,
};
pub use crate::config::{AppConfig, LimitsConfig, LoggingConfig};
pub use crate::errors::{AlgorithmError, CliError, ConfigError, MenuError};
pub use crate::menu::{MenuSession, Operation, Outcome, Param, ParamKind};
