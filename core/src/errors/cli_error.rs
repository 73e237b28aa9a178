// core/src/errors/cli_error.rs
use thiserror::Error;

use crate::errors::{ConfigError, MenuError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error("logging setup failed: {0}")]
    Logging(String),
}
