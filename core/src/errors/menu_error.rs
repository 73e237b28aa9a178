// core/src/errors/menu_error.rs
use thiserror::Error;

use crate::errors::AlgorithmError;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("invalid selection: {0:?} is not a number")]
    InvalidSelection(String),

    #[error("selection {selection} is out of range (expected 1..={max})")]
    SelectionOutOfRange { selection: i64, max: usize },

    #[error("invalid parameter of type {kind}: {input:?} ({reason})")]
    InvalidParameter {
        kind: &'static str,
        input: String,
        reason: String,
    },

    #[error("input ended before {0} was answered")]
    MissingInput(&'static str),

    #[error("terminal i/o error")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
}
