//! Error types for the Encoded Query crate
//!
//! This module contains all error types that can be returned by Encoded Query operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodedQueryError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Query error: {0}")]
    Query(#[from] query_object::QueryError),
}
