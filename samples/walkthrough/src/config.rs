//! Walkthrough configuration.
//!
//! Values come from environment variables, optionally loaded from a `.env`
//! file. Every variable is optional and falls back to a default.
//!
//! # Example
//!
//! ```rust,ignore
//! use walkthrough::config::WalkthroughConfig;
//!
//! let config = WalkthroughConfig::from_env()?;
//! println!("Checkout total: {}", config.checkout_total);
//! ```

use std::env;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::lessons::Lesson;

/// Filter used when `WALKTHROUGH_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,walkthrough=debug";

/// Cart total used when `WALKTHROUGH_CHECKOUT_TOTAL` is not set.
pub const DEFAULT_CHECKOUT_TOTAL: u64 = 50;

const LOG_KEY: &str = "WALKTHROUGH_LOG";
const CHECKOUT_TOTAL_KEY: &str = "WALKTHROUGH_CHECKOUT_TOTAL";
const LESSONS_KEY: &str = "WALKTHROUGH_LESSONS";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
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

impl ConfigError {
    fn invalid(key: &str, message: impl ToString) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}

/// Walkthrough configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkthroughConfig {
    /// `tracing` filter directive.
    pub log_filter: String,
    /// Total of the cart used by the checkout lesson.
    pub checkout_total: u64,
    /// Lessons to run, in order.
    pub lessons: Vec<Lesson>,
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            checkout_total: DEFAULT_CHECKOUT_TOTAL,
            lessons: Lesson::ALL.to_vec(),
        }
    }
}

impl WalkthroughConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `WALKTHROUGH_LOG`: log filter (optional, default: `info,walkthrough=debug`)
    /// - `WALKTHROUGH_CHECKOUT_TOTAL`: checkout cart total (optional, default: 50)
    /// - `WALKTHROUGH_LESSONS`: comma-separated lesson names (optional, default: all)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable has an invalid value.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(LOG_KEY).map_or_else(
            || Ok(DEFAULT_LOG_FILTER.to_string()),
            |filter| {
                EnvFilter::try_new(&filter)
                    .map(|_| filter)
                    .map_err(|error| ConfigError::invalid(LOG_KEY, error))
            },
        )?;

        let checkout_total =
            lookup(CHECKOUT_TOTAL_KEY).map_or(Ok(DEFAULT_CHECKOUT_TOTAL), |value| {
                value
                    .trim()
                    .parse()
                    .map_err(|error| ConfigError::invalid(CHECKOUT_TOTAL_KEY, error))
            })?;

        let lessons = lookup(LESSONS_KEY)
            .map_or_else(|| Ok(Lesson::ALL.to_vec()), |value| parse_lessons(&value))?;

        Ok(Self {
            log_filter,
            checkout_total,
            lessons,
        })
    }
}

/// Parses a comma-separated lesson list, skipping blank entries.
fn parse_lessons(value: &str) -> Result<Vec<Lesson>, ConfigError> {
    let lessons = value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| name.parse().map_err(|error| ConfigError::invalid(LESSONS_KEY, error)))
        .collect::<Result<Vec<Lesson>, ConfigError>>()?;

    if lessons.is_empty() {
        return Err(ConfigError::invalid(LESSONS_KEY, "no lesson selected"));
    }

    Ok(lessons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| values.get(key).cloned()
    }

    #[rstest]
    fn config_error_invalid_value_display() {
        let error = ConfigError::invalid("WALKTHROUGH_CHECKOUT_TOTAL", "must be a number");
        assert_eq!(
            format!("{error}"),
            "Invalid value for WALKTHROUGH_CHECKOUT_TOTAL: must be a number"
        );
    }

    #[rstest]
    fn empty_environment_gives_defaults() {
        let config = WalkthroughConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, Ok(WalkthroughConfig::default()));
    }

    #[rstest]
    fn values_are_read_from_the_lookup() {
        let config = WalkthroughConfig::from_lookup(lookup_from(&[
            ("WALKTHROUGH_LOG", "warn"),
            ("WALKTHROUGH_CHECKOUT_TOTAL", " 120 "),
            ("WALKTHROUGH_LESSONS", "checkout, login-name,"),
        ]));

        assert_eq!(
            config,
            Ok(WalkthroughConfig {
                log_filter: "warn".to_string(),
                checkout_total: 120,
                lessons: vec![Lesson::Checkout, Lesson::LoginName],
            })
        );
    }

    #[rstest]
    #[case("WALKTHROUGH_CHECKOUT_TOTAL", "fifty")]
    #[case("WALKTHROUGH_CHECKOUT_TOTAL", "-1")]
    #[case("WALKTHROUGH_LESSONS", "checkout,karaoke")]
    #[case("WALKTHROUGH_LESSONS", " , ")]
    #[case("WALKTHROUGH_LOG", "walkthrough=loud")]
    fn invalid_values_are_reported(#[case] key: &str, #[case] value: &str) {
        let config = WalkthroughConfig::from_lookup(lookup_from(&[(key, value)]));
        assert!(matches!(
            config,
            Err(ConfigError::InvalidValue { key: reported, .. }) if reported == key
        ));
    }
}
