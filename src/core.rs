//! Configured entry point
//!
//! `EncodedQuery` holds the loaded configuration and hands out builders that
//! share it.

use crate::errors::EncodedQueryError;
use config::AppConfig;
use query_object::QueryBuilder;

#[derive(Debug, Clone, Default)]
pub struct EncodedQuery {
    config: AppConfig,
}

impl EncodedQuery {
    pub fn new(config: AppConfig) -> Self {
        tracing::debug!(
            "Encoded query configured: hour_clock={:?}, separator_policy={:?}",
            config.builder.hour_clock,
            config.builder.separator_policy
        );
        Self { config }
    }

    /// Load configuration from the environment or `./encoded_query.toml`
    pub fn load() -> Result<Self, EncodedQueryError> {
        let config = AppConfig::load()?;
        Ok(Self::new(config))
    }

    /// Start a new query with this instance's builder settings
    pub fn builder(&self) -> QueryBuilder {
        QueryBuilder::with_config(self.config.builder)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
