//! Query builder utilities
//!
//! This module provides encoded query construction utilities.

pub mod builder;
pub mod operator;
pub mod ordering;
pub mod token;



pub use builder::QueryBuilder;
pub use operator::QueryOperator;
pub use ordering::SortOrder;
pub use token::{LogicalOperator, QueryToken};
