use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Missing field: call field() before adding a condition")]
    MissingField,

    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Empty query: no conditions, separators or orderings were added")]
    EmptyQuery,

    #[error("Malformed query: {0}")]
    MalformedQuery(String),
}

pub type QueryResult<T> = Result<T, QueryError>;
