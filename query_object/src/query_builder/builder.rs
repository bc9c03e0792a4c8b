//! Query builder utilities
//!
//! This module provides the fluent encoded query builder.

use crate::errors::{QueryError, QueryResult};
use crate::query_builder::operator::QueryOperator;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::token::{check_placement, LogicalOperator, QueryToken};
use crate::value::{render_number, QueryValue, ValueKind};
use config::BuilderConfig;
use std::fmt;

const TEXT: &[ValueKind] = &[ValueKind::String];
const SCALAR_OR_LIST: &[ValueKind] = &[ValueKind::String, ValueKind::Number, ValueKind::Array];
const LIST: &[ValueKind] = &[ValueKind::Array];
const COMPARABLE: &[ValueKind] = &[ValueKind::Number, ValueKind::String, ValueKind::Date];
const LIST_ELEMENT: &[ValueKind] = &[ValueKind::String, ValueKind::Number, ValueKind::Date];

/// Fluent builder for encoded query strings
///
/// Select a field with [`field`](Self::field), then add conditions against it.
/// Condition methods consume the builder and hand it back on success, so chains
/// read naturally with `?`:
///
/// ```rust
/// use query_object::QueryBuilder;
///
/// let query = QueryBuilder::new()
///     .field("priority")
///     .equals(1)?
///     .and()
///     .field("state")
///     .not_equals(6)?
///     .build()?;
///
/// assert_eq!(query, "priority=1^state!=6");
/// # Ok::<(), query_object::QueryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    pub(crate) tokens: Vec<QueryToken>,
    pub(crate) current_field: Option<String>,
    pub(crate) config: BuilderConfig,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            tokens: Vec::new(),
            current_field: None,
            config,
        }
    }

    /// Select the field subsequent conditions apply to
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.current_field = Some(name.into());
        self
    }

    /// Sort ascending by the current field
    ///
    /// Before any `field()` call this emits a marker with an empty field name.
    pub fn order_ascending(self) -> Self {
        self.order(SortOrder::Asc)
    }

    /// Sort descending by the current field
    pub fn order_descending(self) -> Self {
        self.order(SortOrder::Desc)
    }

    pub fn starts_with(self, value: impl Into<QueryValue>) -> QueryResult<Self> {
        self.text_condition(QueryOperator::StartsWith, value.into())
    }

    pub fn ends_with(self, value: impl Into<QueryValue>) -> QueryResult<Self> {
        self.text_condition(QueryOperator::EndsWith, value.into())
    }

    pub fn contains(self, value: impl Into<QueryValue>) -> QueryResult<Self> {
        self.text_condition(QueryOperator::Like, value.into())
    }

    pub fn does_not_contain(self, value: impl Into<QueryValue>) -> QueryResult<Self> {
        self.text_condition(QueryOperator::NotLike, value.into())
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn is_empty(self) -> QueryResult<Self> {
        self.valueless_condition(QueryOperator::IsEmpty)
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn is_not_empty(self) -> QueryResult<Self> {
        self.valueless_condition(QueryOperator::IsNotEmpty)
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn is_anything(self) -> QueryResult<Self> {
        self.valueless_condition(QueryOperator::Anything)
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn is_empty_string(self) -> QueryResult<Self> {
        self.valueless_condition(QueryOperator::EmptyString)
    }

    /// `=` for a string or number, `IN` for a list
    pub fn equals(self, value: impl Into<QueryValue>) -> QueryResult<Self> {
        self.equality(value.into(), QueryOperator::Eq, QueryOperator::In)
    }

    /// `!=` for a string or number, `NOT IN` for a list
    pub fn not_equals(self, value: impl Into<QueryValue>) -> QueryResult<Self> {
        self.equality(value.into(), QueryOperator::Ne, QueryOperator::NotIn)
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn is_one_of(self, values: impl Into<QueryValue>) -> QueryResult<Self> {
        self.require_field()?;
        match values.into() {
            QueryValue::List(items) => {
                let operand = self.join_list(&items)?;
                Ok(self.push_condition(QueryOperator::In, operand))
            }
            other => Err(type_mismatch(LIST, other.kind())),
        }
    }

    pub fn greater_than(self, value: impl Into<QueryValue>) -> QueryResult<Self> {
        self.comparison(QueryOperator::Gt, value.into())
    }

    pub fn greater_than_or_is(self, value: impl Into<QueryValue>) -> QueryResult<Self> {
        self.comparison(QueryOperator::Gte, value.into())
    }

    pub fn less_than(self, value: impl Into<QueryValue>) -> QueryResult<Self> {
        self.comparison(QueryOperator::Lt, value.into())
    }

    pub fn less_than_or_is(self, value: impl Into<QueryValue>) -> QueryResult<Self> {
        self.comparison(QueryOperator::Lte, value.into())
    }

    /// Inclusive range, rendered as `<start>@<end>`
    ///
    /// Both bounds must be of the same kind: two numbers, two strings or two dates.
    pub fn between(
        self,
        start: impl Into<QueryValue>,
        end: impl Into<QueryValue>,
    ) -> QueryResult<Self> {
        self.require_field()?;
        let hour_clock = self.config.hour_clock;
        let (start, end) = (start.into(), end.into());
        let bounds = (
            start.render_scalar(hour_clock),
            end.render_scalar(hour_clock),
        );
        let operand = match bounds {
            (Some(from), Some(to)) if start.kind() == end.kind() => format!("{}@{}", from, to),
            _ => {
                return Err(QueryError::TypeMismatch {
                    expected: "two numbers, two strings or two dates".to_string(),
                    actual: format!("{} and {}", start.kind(), end.kind()),
                })
            }
        };
        Ok(self.push_condition(QueryOperator::Between, operand))
    }

    pub fn and(self) -> Self {
        self.push(QueryToken::Separator(LogicalOperator::And))
    }

    pub fn or(self) -> Self {
        self.push(QueryToken::Separator(LogicalOperator::Or))
    }

    /// Start a new, independently OR'd query group
    pub fn nq(self) -> Self {
        self.push(QueryToken::Separator(LogicalOperator::NewQuery))
    }

    /// Concatenate all tokens into the encoded query
    ///
    /// Leaves the builder untouched, so repeated calls return the same string.
    pub fn build(&self) -> QueryResult<String> {
        if self.tokens.is_empty() {
            return Err(QueryError::EmptyQuery);
        }
        if self.config.is_strict() {
            check_placement(&self.tokens)?;
        }

        let query = self.to_string();
        crate::trace_log!("[QUERY_BUILDER] Built query from {} tokens: {}", self.tokens.len(), query);
        Ok(query)
    }

    pub fn current_field(&self) -> Option<&str> {
        self.current_field.as_deref()
    }

    pub fn tokens(&self) -> &[QueryToken] {
        &self.tokens
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty_query(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    fn order(self, order: SortOrder) -> Self {
        let field = self.current_field.clone().unwrap_or_default();
        self.push(QueryToken::Ordering(order, field))
    }

    fn text_condition(self, operator: QueryOperator, value: QueryValue) -> QueryResult<Self> {
        self.require_field()?;
        match value {
            QueryValue::Text(operand) => Ok(self.push_condition(operator, operand)),
            other => Err(type_mismatch(TEXT, other.kind())),
        }
    }

    fn valueless_condition(self, operator: QueryOperator) -> QueryResult<Self> {
        self.require_field()?;
        Ok(self.push_condition(operator, String::new()))
    }

    fn equality(
        self,
        value: QueryValue,
        scalar_operator: QueryOperator,
        list_operator: QueryOperator,
    ) -> QueryResult<Self> {
        self.require_field()?;
        match value {
            QueryValue::Text(text) => Ok(self.push_condition(scalar_operator, text)),
            QueryValue::Number(number) => {
                Ok(self.push_condition(scalar_operator, render_number(&number)))
            }
            QueryValue::List(items) => {
                let operand = self.join_list(&items)?;
                Ok(self.push_condition(list_operator, operand))
            }
            other => Err(type_mismatch(SCALAR_OR_LIST, other.kind())),
        }
    }

    fn comparison(self, operator: QueryOperator, value: QueryValue) -> QueryResult<Self> {
        self.require_field()?;
        match value.render_scalar(self.config.hour_clock) {
            Some(operand) => Ok(self.push_condition(operator, operand)),
            None => Err(type_mismatch(COMPARABLE, value.kind())),
        }
    }

    fn join_list(&self, items: &[QueryValue]) -> QueryResult<String> {
        let parts = items
            .iter()
            .map(|item| {
                item.render_scalar(self.config.hour_clock)
                    .ok_or_else(|| type_mismatch(LIST_ELEMENT, item.kind()))
            })
            .collect::<QueryResult<Vec<_>>>()?;
        Ok(parts.join(","))
    }

    fn require_field(&self) -> QueryResult<&str> {
        self.current_field.as_deref().ok_or(QueryError::MissingField)
    }

    fn push_condition(self, operator: QueryOperator, operand: String) -> Self {
        let field = self.current_field.clone().unwrap_or_default();
        self.push(QueryToken::Condition {
            field,
            operator,
            operand,
        })
    }

    fn push(mut self, token: QueryToken) -> Self {
        crate::debug_log!("[QUERY_BUILDER] Appending token: {}", token);
        self.tokens.push(token);
        self
    }
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

fn type_mismatch(expected: &[ValueKind], actual: ValueKind) -> QueryError {
    let names: Vec<&str> = expected.iter().map(ValueKind::as_str).collect();
    let expected = match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {}", rest.join(", "), last),
        _ => names.join(""),
    };
    QueryError::TypeMismatch {
        expected,
        actual: actual.to_string(),
    }
}
