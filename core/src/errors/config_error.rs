// core/src/errors/config_error.rs
use thiserror::Error;

/// Failures while building `AppConfig` from `recurse.toml` and `RECURSE_*` env vars.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {0} does not exist")]
    Missing(String),

    #[error("could not load config file")]
    Parse(#[source] anyhow::Error),

    #[error("{key} must be a non-negative integer")]
    EnvInvalid {
        key: &'static str,
        #[source]
        source: std::num::ParseIntError,
    },
}
