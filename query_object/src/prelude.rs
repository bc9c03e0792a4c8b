//! Convenience re-exports for common query-object usage

// Query building
pub use crate::query_builder::{LogicalOperator, QueryBuilder, QueryOperator, QueryToken, SortOrder};

// Operands
pub use crate::value::{QueryValue, ValueKind};

// Error types
pub use crate::errors::{QueryError, QueryResult};

// Builder configuration
pub use config::{BuilderConfig, HourClock, SeparatorPolicy};

// Common external dependencies that are frequently used
pub use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
pub use serde_json::json;
