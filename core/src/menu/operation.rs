use std::fmt;

use crate::algorithms::{fibonacci, fibonacci_memo, is_palindrome_str, merge_sort, FibonacciMemo};
use crate::config::AppConfig;
use crate::errors::MenuError;

use super::outcome::Outcome;
use super::param::Param;

/// The fixed menu. Order here is the order shown to the user (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    MergeSort,
    Fibonacci,
    FibonacciMemo,
    Palindrome,
}

/// What a menu entry expects as its single parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    List,
    Int,
    Str,
}

impl ParamKind {
    pub fn type_name(self) -> &'static str {
        match self {
            ParamKind::List => "list",
            ParamKind::Int => "int",
            ParamKind::Str => "str",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::MergeSort,
        Operation::Fibonacci,
        Operation::FibonacciMemo,
        Operation::Palindrome,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::MergeSort => "MergeSort",
            Operation::Fibonacci => "Fibonacci",
            Operation::FibonacciMemo => "FibonacciMemo",
            Operation::Palindrome => "Palindrome",
        }
    }

    pub fn param_kind(self) -> ParamKind {
        match self {
            Operation::MergeSort => ParamKind::List,
            Operation::Fibonacci | Operation::FibonacciMemo => ParamKind::Int,
            Operation::Palindrome => ParamKind::Str,
        }
    }

    /// Resolves a 1-based menu selection. Never falls back to a default entry.
    pub fn from_selection(raw: &str) -> Result<Self, MenuError> {
        let trimmed = raw.trim();
        let selection: i64 = trimmed
            .parse()
            .map_err(|_| MenuError::InvalidSelection(trimmed.to_string()))?;

        usize::try_from(selection)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(MenuError::SelectionOutOfRange {
                selection,
                max: Self::ALL.len(),
            })
    }

    /// Parses `raw` for this operation and runs it.
    pub fn run(self, raw: &str, config: &AppConfig) -> Result<Outcome, MenuError> {
        let param = Param::parse(self.param_kind(), raw)?;
        self.invoke(param, config)
    }

    pub fn invoke(self, param: Param, config: &AppConfig) -> Result<Outcome, MenuError> {
        tracing::debug!(operation = %self, ?param, "invoking operation");

        let outcome = match (self, param) {
            (Operation::MergeSort, Param::Integers(items)) => Outcome::Integers(merge_sort(&items)),
            (Operation::MergeSort, Param::Chars(items)) => Outcome::Chars(merge_sort(&items)),
            (Operation::Fibonacci, Param::Index(n)) => {
                if n > config.limits.naive_fibonacci_warn_above {
                    tracing::warn!(
                        n,
                        threshold = config.limits.naive_fibonacci_warn_above,
                        "naive fibonacci is exponential; this may take a long time"
                    );
                }
                Outcome::Number(fibonacci(n)?)
            }
            (Operation::FibonacciMemo, Param::Index(n)) => {
                let mut memo = FibonacciMemo::new();
                let value = fibonacci_memo(n, &mut memo)?;
                tracing::debug!(n, memo_entries = memo.len(), "memoized fibonacci done");
                Outcome::Number(value)
            }
            (Operation::Palindrome, Param::Text(text)) => Outcome::Flag(is_palindrome_str(&text)),
            (op, param) => {
                return Err(MenuError::InvalidParameter {
                    kind: op.param_kind().type_name(),
                    input: format!("{param:?}"),
                    reason: format!("{op} does not accept this parameter"),
                })
            }
        };

        Ok(outcome)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
