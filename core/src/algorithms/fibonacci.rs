use std::collections::HashMap;

use crate::errors::AlgorithmError;

/// Largest index whose Fibonacci number fits in a `u128`.
pub const MAX_FIBONACCI_INDEX: u32 = 186;

/// Memo table for [`fibonacci_memo`]: index -> F(index).
pub type FibonacciMemo = HashMap<u32, u128>;

/// Naive recursive Fibonacci. Exponential time.
pub fn fibonacci(n: u32) -> Result<u128, AlgorithmError> {
    check_index(n)?;
    match n {
        0 => Ok(0),
        1 => Ok(1),
        _ => {
            let a = fibonacci(n - 1)?;
            let b = fibonacci(n - 2)?;
            a.checked_add(b).ok_or(AlgorithmError::Overflow { n })
        }
    }
}

/// Memoized Fibonacci. Linear in `n` when `memo` starts empty.
///
/// Results for `n - 1` and `n - 2` are stored before they are combined, so after
/// a top-level call the memo holds every index below `n` that the recursion
/// touched. Every stored entry is the true Fibonacci number for its key.
pub fn fibonacci_memo(n: u32, memo: &mut FibonacciMemo) -> Result<u128, AlgorithmError> {
    check_index(n)?;
    if let Some(&v) = memo.get(&n) {
        return Ok(v);
    }
    if n <= 1 {
        return Ok(n as u128);
    }

    let a = fibonacci_memo(n - 1, memo)?;
    memo.insert(n - 1, a);
    let b = fibonacci_memo(n - 2, memo)?;
    memo.insert(n - 2, b);

    a.checked_add(b).ok_or(AlgorithmError::Overflow { n })
}

/// Rejects indices whose result cannot fit before any recursion happens.
fn check_index(n: u32) -> Result<(), AlgorithmError> {
    if n > MAX_FIBONACCI_INDEX {
        return Err(AlgorithmError::Overflow { n });
    }
    Ok(())
}
