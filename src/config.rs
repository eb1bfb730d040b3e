//! Environment defaults.
//!
//! `.env` is loaded once (if present); these variables then provide defaults
//! that command-line flags override:
//!
//! - `LINEFIT_PRECISION`: `0.1`, `0.01` or `0.001`
//! - `LINEFIT_WORKERS`: parallel search workers (`0` = all cores)
//! - `LINEFIT_TIMEOUT_MS`: search deadline in milliseconds
//!
//! Logging is configured separately through `RUST_LOG`.

use std::time::Duration;

use crate::domain::Precision;
use crate::error::AppError;

pub const ENV_PRECISION: &str = "LINEFIT_PRECISION";
pub const ENV_WORKERS: &str = "LINEFIT_WORKERS";
pub const ENV_TIMEOUT_MS: &str = "LINEFIT_TIMEOUT_MS";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvDefaults {
    pub precision: Option<Precision>,
    pub workers: Option<usize>,
    pub timeout: Option<Duration>,
}

impl EnvDefaults {
    /// Read defaults from the process environment (after loading `.env`).
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read defaults through an arbitrary lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let precision = lookup(ENV_PRECISION)
            .map(|v| v.parse::<Precision>())
            .transpose()
            .map_err(|e| AppError::new(2, format!("{ENV_PRECISION}: {e}")))?;

        let workers = lookup(ENV_WORKERS)
            .map(|v| v.trim().parse::<usize>())
            .transpose()
            .map_err(|e| AppError::new(2, format!("{ENV_WORKERS}: {e}")))?;

        let timeout = lookup(ENV_TIMEOUT_MS)
            .map(|v| v.trim().parse::<u64>())
            .transpose()
            .map_err(|e| AppError::new(2, format!("{ENV_TIMEOUT_MS}: {e}")))?
            .map(Duration::from_millis);

        Ok(Self {
            precision,
            workers,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_has_no_defaults() {
        assert_eq!(EnvDefaults::from_lookup(lookup(&[])).unwrap(), EnvDefaults::default());
    }

    #[test]
    fn values_are_parsed() {
        let env = EnvDefaults::from_lookup(lookup(&[
            (ENV_PRECISION, "0.001"),
            (ENV_WORKERS, " 4 "),
            (ENV_TIMEOUT_MS, "1500"),
        ]))
        .unwrap();
        assert_eq!(env.precision, Some(Precision::Thousandth));
        assert_eq!(env.workers, Some(4));
        assert_eq!(env.timeout, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn invalid_values_are_config_errors() {
        let err = EnvDefaults::from_lookup(lookup(&[(ENV_PRECISION, "0.5")])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with(ENV_PRECISION));

        let err = EnvDefaults::from_lookup(lookup(&[(ENV_WORKERS, "many")])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
