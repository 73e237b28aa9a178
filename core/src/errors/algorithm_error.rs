// core/src/errors/algorithm_error.rs
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlgorithmError {
    #[error("fibonacci({n}) does not fit in 128 bits")]
    Overflow { n: u32 },
}
