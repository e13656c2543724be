//! Trip search backend configuration.
//!
//! Read from the environment:
//! - `TRAINLINE_FIXTURE`: JSON fixture path; when set, searches are answered
//!   offline by [`MockTrainlineClient`]
//! - `TRAINLINE_BASE_URL`: base URL of the trip search service
//! - `TRAINLINE_API_KEY`: optional API key
//! - `TRAINLINE_TIMEOUT_SECS`: request timeout in seconds

use std::path::PathBuf;

use crate::trainline::{
    DEFAULT_BASE_URL, MockTrainlineClient, SearchError, TrainlineClient, TrainlineConfig,
    TripSearch,
};

pub const FIXTURE_VAR: &str = "TRAINLINE_FIXTURE";
pub const BASE_URL_VAR: &str = "TRAINLINE_BASE_URL";
pub const API_KEY_VAR: &str = "TRAINLINE_API_KEY";
pub const TIMEOUT_VAR: &str = "TRAINLINE_TIMEOUT_SECS";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("TRAINLINE_TIMEOUT_SECS must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { value: String },
}

/// Where searches are sent.
#[derive(Debug, Clone)]
pub enum Backend {
    /// Live trip search service
    Http(TrainlineConfig),
    /// JSON fixture file
    Fixture(PathBuf),
}

/// Backend settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub backend: Backend,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through a variable lookup function.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(path) = get(FIXTURE_VAR) {
            return Ok(Self {
                backend: Backend::Fixture(PathBuf::from(path)),
            });
        }

        let mut config = TrainlineConfig::new(get(BASE_URL_VAR).unwrap_or_else(|| {
            DEFAULT_BASE_URL.to_string()
        }));

        if let Some(key) = get(API_KEY_VAR) {
            config = config.with_api_key(key);
        }

        if let Some(value) = get(TIMEOUT_VAR) {
            let secs = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout {
                    value: value.clone(),
                })?;
            config = config.with_timeout(secs);
        }

        Ok(Self {
            backend: Backend::Http(config),
        })
    }

    /// Build the trip search for the configured backend.
    pub fn connect(self) -> Result<Box<dyn TripSearch>, SearchError> {
        match self.backend {
            Backend::Http(config) => Ok(Box::new(TrainlineClient::new(config)?)),
            Backend::Fixture(path) => Ok(Box::new(MockTrainlineClient::new(path)?)),
        }
    }
}
