use std::path::Path;

use anyhow::Context;

use super::types::AppConfig;
use crate::errors::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "recurse.toml";

pub const ENV_LOG_LEVEL: &str = "RECURSE_LOG_LEVEL";
pub const ENV_NAIVE_FIB_WARN_ABOVE: &str = "RECURSE_NAIVE_FIB_WARN_ABOVE";

/// Loads `recurse.toml` from the working directory if present, then applies env overrides.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    let path = Path::new(DEFAULT_CONFIG_FILE);
    let mut cfg = if path.exists() {
        read_file(path)?
    } else {
        AppConfig::default()
    };
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    Ok(cfg)
}

/// Loads an explicit config file (which must exist), or falls back to [`load_default`].
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let Some(path) = path else {
        return load_default();
    };
    if !path.exists() {
        return Err(ConfigError::Missing(path.display().to_string()));
    }
    let mut cfg = read_file(path)?;
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    Ok(cfg)
}

fn read_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let cfg = parse_file(path).map_err(ConfigError::Parse)?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(cfg)
}

fn parse_file(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str::<AppConfig>(&s).with_context(|| format!("parsing {}", path.display()))
}

/// Env lookup is injected so tests don't have to mutate the process environment.
pub(crate) fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup(ENV_LOG_LEVEL) {
        if !v.trim().is_empty() {
            cfg.logging.level = v.trim().to_string();
        }
    }

    if let Some(v) = lookup(ENV_NAIVE_FIB_WARN_ABOVE) {
        if !v.trim().is_empty() {
            cfg.limits.naive_fibonacci_warn_above =
                v.trim()
                    .parse()
                    .map_err(|source| ConfigError::EnvInvalid {
                        key: ENV_NAIVE_FIB_WARN_ABOVE,
                        source,
                    })?;
        }
    }

    Ok(())
}
