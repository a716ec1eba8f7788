//! Process configuration read from the environment.
//!
//! `.env` is loaded by `main` before this runs, so values can come from
//! either place.

use std::{env, fmt::Display, str::FromStr, time::Duration};

use remote_store::{DEFAULT_TIMEOUT_SECS, StoreConfig};
use thiserror::Error;
use tracing::{info, warn};

pub const API_URL_KEY: &str = "PORTFOLIO_API_URL";
pub const API_TIMEOUT_KEY: &str = "PORTFOLIO_API_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the remote portfolio store.
    pub api_url: String,
    pub api_timeout: Duration,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when the store URL is absent or a value does not parse.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a key to its raw value.
    ///
    /// # Errors
    ///
    /// See [`Settings::load`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup(API_URL_KEY)
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing(API_URL_KEY))?;
        let timeout_secs: u64 = try_load(&lookup, API_TIMEOUT_KEY, &DEFAULT_TIMEOUT_SECS.to_string())?;

        Ok(Self {
            api_url,
            api_timeout: Duration::from_secs(timeout_secs.max(1)),
        })
    }

    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.api_url).with_timeout(self.api_timeout)
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_owned()
    });
    raw.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }
    })
}
