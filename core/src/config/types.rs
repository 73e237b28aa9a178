use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Naive Fibonacci above this index logs a slowness warning.
    #[serde(default = "default_naive_fibonacci_warn_above")]
    pub naive_fibonacci_warn_above: u32,
}

fn default_naive_fibonacci_warn_above() -> u32 {
    35
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            naive_fibonacci_warn_above: default_naive_fibonacci_warn_above(),
        }
    }
}
