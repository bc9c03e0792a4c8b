//! # Encoded Query
//!
//! A fluent builder for the encoded query strings understood by record-management
//! services: field/operator/operand triplets joined by `^`, `^OR` and `^NQ`
//! separators, with `ORDERBY`/`ORDERBYDESC` sort directives.
//!
//! ## Quick Start
//!
//! ```rust
//! use encoded_query::prelude::*;
//!
//! fn main() -> Result<(), EncodedQueryError> {
//!     let query = QueryBuilder::new()
//!         .field("priority")
//!         .equals(1)?
//!         .and()
//!         .field("state")
//!         .not_equals(6)?
//!         .build()?;
//!
//!     assert_eq!(query, "priority=1^state!=6");
//!
//!     // Builders configured from ./encoded_query.toml or ENCODED_QUERY_CONFIG
//!     let encoded = EncodedQuery::load()?;
//!     let recent = encoded
//!         .builder()
//!         .field("sys_created_on")
//!         .greater_than(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())?
//!         .build()?;
//!     println!("{}", recent);
//!
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::EncodedQuery;
pub use errors::EncodedQueryError;

// Re-export centralized config
pub use config::{AppConfig, BuilderConfig, HourClock, SeparatorPolicy};

// Re-export internal crates used by the public API
pub use config;
pub use query_object;
pub use query_object::{QueryBuilder, QueryError, QueryResult, QueryValue};

// Re-export external dependencies used in public API
pub use chrono;
pub use serde_json;
