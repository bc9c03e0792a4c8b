//! Query tokens
//!
//! A query is an ordered list of tokens concatenated without delimiters.
//! Separators carry their own `^` marker.

use crate::errors::{QueryError, QueryResult};
use crate::query_builder::operator::QueryOperator;
use crate::query_builder::ordering::SortOrder;
use std::fmt;

/// Logical operators for combining conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
    /// Starts an independent OR'd group of conditions
    NewQuery,
}

impl LogicalOperator {
    pub fn marker(&self) -> &'static str {
        match self {
            LogicalOperator::And => "^",
            LogicalOperator::Or => "^OR",
            LogicalOperator::NewQuery => "^NQ",
        }
    }
}

/// One unit of an encoded query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryToken {
    Condition {
        field: String,
        operator: QueryOperator,
        operand: String,
    },
    Separator(LogicalOperator),
    Ordering(SortOrder, String),
}

impl QueryToken {
    pub fn is_separator(&self) -> bool {
        matches!(self, QueryToken::Separator(_))
    }
}

impl fmt::Display for QueryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryToken::Condition {
                field,
                operator,
                operand,
            } => write!(f, "{}{}{}", field, operator, operand),
            QueryToken::Separator(operator) => f.write_str(operator.marker()),
            QueryToken::Ordering(order, field) => write!(f, "{}{}", order.marker(), field),
        }
    }
}

/// Placement rules applied by `build()` under the strict separator policy
pub(crate) fn check_placement(tokens: &[QueryToken]) -> QueryResult<()> {
    if let Some(first) = tokens.first() {
        if first.is_separator() {
            return Err(QueryError::MalformedQuery(format!(
                "query starts with separator '{}'",
                first
            )));
        }
    }

    if let Some(last) = tokens.last() {
        if last.is_separator() {
            return Err(QueryError::MalformedQuery(format!(
                "query ends with separator '{}'",
                last
            )));
        }
    }

    for (index, token) in tokens.iter().enumerate() {
        let previous = index.checked_sub(1).map(|i| &tokens[i]);

        match token {
            QueryToken::Separator(_) => {
                if let Some(prev) = previous.filter(|prev| prev.is_separator()) {
                    return Err(QueryError::MalformedQuery(format!(
                        "separators '{}' and '{}' are adjacent",
                        prev, token
                    )));
                }
            }
            QueryToken::Ordering(order, field) => {
                if field.is_empty() {
                    return Err(QueryError::MalformedQuery(format!(
                        "{} has no field",
                        order.marker()
                    )));
                }
                if previous.is_some_and(|prev| !prev.is_separator()) {
                    return Err(QueryError::MalformedQuery(format!(
                        "'{}' must start the query or follow a separator",
                        token
                    )));
                }
            }
            QueryToken::Condition { .. } => {}
        }
    }

    Ok(())
}
