//! Walkthrough configuration.
//!
//! Loaded once at startup from environment variables. Every value has a
//! default, so an empty environment replays the stock session.

use std::env;
use std::num::ParseIntError;

/// Variable holding the signed distance used by the offset step.
pub const OFFSET_KEY: &str = "WALKTHROUGH_OFFSET";

/// Variable holding the text appended to every value in the map step.
pub const MAP_SUFFIX_KEY: &str = "WALKTHROUGH_MAP_SUFFIX";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Settings for one walkthrough run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkthroughConfig {
    /// Distance moved from the end cursor in the offset step.
    pub offset: isize,
    /// Suffix appended to each rendered value in the map step.
    pub map_suffix: String,
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            offset: -5,
            map_suffix: "0".to_string(),
        }
    }
}

impl WalkthroughConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `WALKTHROUGH_OFFSET`: signed step count from the end (optional, default: -5)
    /// - `WALKTHROUGH_MAP_SUFFIX`: suffix for the map step (optional, default: "0")
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let offset = match lookup(OFFSET_KEY) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|error: ParseIntError| ConfigError::InvalidValue {
                    key: OFFSET_KEY.to_string(),
                    message: error.to_string(),
                })?,
            None => defaults.offset,
        };
        let map_suffix = lookup(MAP_SUFFIX_KEY).unwrap_or(defaults.map_suffix);

        Ok(Self { offset, map_suffix })
    }
}
