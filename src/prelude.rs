//! Convenience re-exports for common Encoded Query usage
//!
//! # Example
//!
//! ```rust
//! use encoded_query::prelude::*;
//!
//! let query = QueryBuilder::new().field("active").equals("true")?.build()?;
//! assert_eq!(query, "active=true");
//! # Ok::<(), QueryError>(())
//! ```

// Core components
pub use crate::core::EncodedQuery;
pub use crate::errors::EncodedQueryError;

// Re-export centralized config
pub use config::{AppConfig, BuilderConfig, ConfigError, HourClock, SeparatorPolicy};

// Re-export commonly used query-object types for convenience
pub use query_object::prelude::*;
