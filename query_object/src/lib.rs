//! Query Object - encoded query construction for Encoded Query
//!
//! This crate provides the fluent [`QueryBuilder`], the operand model it accepts,
//! and the datetime normalization used for date-valued comparisons.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod datetime;
pub mod errors;
pub mod prelude;
pub mod query_builder;
pub mod value;

pub use config::{BuilderConfig, HourClock, SeparatorPolicy};
pub use datetime::format_datetime;
pub use errors::{QueryError, QueryResult};
pub use query_builder::{LogicalOperator, QueryBuilder, QueryOperator, QueryToken, SortOrder};
pub use value::{QueryValue, ValueKind};
