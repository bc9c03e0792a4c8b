//! Condition operators of the encoded query grammar

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOperator {
    StartsWith,  // STARTSWITH
    EndsWith,    // ENDSWITH
    Like,        // LIKE
    NotLike,     // NOTLIKE
    IsEmpty,     // ISEMPTY
    IsNotEmpty,  // ISNOTEMPTY
    Anything,    // ANYTHING
    EmptyString, // EMPTYSTRING
    Eq,          // =
    Ne,          // !=
    In,          // IN
    NotIn,       // NOT IN
    Gt,          // >
    Gte,         // >=
    Lt,          // <
    Lte,         // <=
    Between,     // BETWEEN
}

impl QueryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryOperator::StartsWith => "STARTSWITH",
            QueryOperator::EndsWith => "ENDSWITH",
            QueryOperator::Like => "LIKE",
            QueryOperator::NotLike => "NOTLIKE",
            QueryOperator::IsEmpty => "ISEMPTY",
            QueryOperator::IsNotEmpty => "ISNOTEMPTY",
            QueryOperator::Anything => "ANYTHING",
            QueryOperator::EmptyString => "EMPTYSTRING",
            QueryOperator::Eq => "=",
            QueryOperator::Ne => "!=",
            QueryOperator::In => "IN",
            QueryOperator::NotIn => "NOT IN",
            QueryOperator::Gt => ">",
            QueryOperator::Gte => ">=",
            QueryOperator::Lt => "<",
            QueryOperator::Lte => "<=",
            QueryOperator::Between => "BETWEEN",
        }
    }
}

impl fmt::Display for QueryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
