//! # Configuration Management for Encoded Query
//!
//! This crate provides the configuration structures used by the query builder,
//! controlling how datetime operands are rendered and how strictly separator
//! placement is checked when a query is built.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{BuilderConfig, HourClock, SeparatorPolicy};
//!
//! let builder_config = BuilderConfig::new(HourClock::TwentyFour, SeparatorPolicy::Strict);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [builder]
//! hour_clock = "twenty_four"
//! separator_policy = "permissive"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from ENCODED_QUERY_CONFIG or ./encoded_query.toml, falling back to defaults
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./encoded_query.toml";
const CONFIG_PATH_ENV: &str = "ENCODED_QUERY_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub builder: BuilderConfig,
}

/// Query builder configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub hour_clock: HourClock,
    pub separator_policy: SeparatorPolicy,
}

/// Hour field convention used when rendering datetime operands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourClock {
    /// `00`..`23`, what the remote service parses
    #[default]
    TwentyFour,
    /// `01`..`12` with no meridiem marker, kept for consumers of the old output
    Twelve,
}

/// How `build()` treats separator and ordering placement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorPolicy {
    /// Emit whatever was appended
    #[default]
    Permissive,
    /// Reject leading, trailing or doubled separators and unnamed orderings
    Strict,
}

impl AppConfig {
    /// Load configuration from the TOML file named in .env, the default path, or defaults
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err.into());
            }
        }

        match env::var(CONFIG_PATH_ENV) {
            Ok(config_path) => {
                if config_path.trim().is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "{} is set but empty",
                        CONFIG_PATH_ENV
                    )));
                }
                tracing::debug!("Loading query builder config from {}", config_path);
                Self::from_file(&config_path)
            }
            Err(env::VarError::NotPresent) => {
                if Path::new(DEFAULT_CONFIG_PATH).exists() {
                    tracing::debug!("Loading query builder config from {}", DEFAULT_CONFIG_PATH);
                    Self::from_file(DEFAULT_CONFIG_PATH)
                } else {
                    tracing::debug!("No query builder config found, using defaults");
                    Ok(Self::default())
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}

impl BuilderConfig {
    /// Create a new builder configuration
    pub fn new(hour_clock: HourClock, separator_policy: SeparatorPolicy) -> Self {
        Self {
            hour_clock,
            separator_policy,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.separator_policy == SeparatorPolicy::Strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.builder.hour_clock, HourClock::TwentyFour);
        assert_eq!(config.builder.separator_policy, SeparatorPolicy::Permissive);
        assert!(!config.builder.is_strict());
    }

    #[test]
    fn test_parse_full_document() {
        let config = AppConfig::from_toml_str(
            r#"
            [builder]
            hour_clock = "twelve"
            separator_policy = "strict"
            "#,
        )
        .unwrap();

        assert_eq!(config.builder.hour_clock, HourClock::Twelve);
        assert!(config.builder.is_strict());
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config = AppConfig::from_toml_str("[builder]\nseparator_policy = \"strict\"\n").unwrap();
        assert_eq!(config.builder.hour_clock, HourClock::TwentyFour);
        assert!(config.builder.is_strict());

        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let result = AppConfig::from_toml_str("[builder]\nhour_clock = \"sundial\"\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_from_file() {
        let path = env::temp_dir().join(format!("encoded_query_config_{}.toml", std::process::id()));
        std::fs::write(&path, "[builder]\nhour_clock = \"twelve\"\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.builder.hour_clock, HourClock::Twelve);
        assert_eq!(config.builder.separator_policy, SeparatorPolicy::Permissive);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_missing_file() {
        let result = AppConfig::from_file("/definitely/not/here/encoded_query.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = AppConfig {
            builder: BuilderConfig::new(HourClock::Twelve, SeparatorPolicy::Strict),
        };
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("hour_clock = \"twelve\""));
        assert_eq!(AppConfig::from_toml_str(&text).unwrap(), config);
    }
}
