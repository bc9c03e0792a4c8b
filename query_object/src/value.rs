//! Operand values
//!
//! This module provides the operand model accepted by condition methods
//! and the conversions from common Rust and JSON types.

use crate::datetime::{format_datetime, to_utc};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use config::HourClock;
use serde_json::{Map, Number, Value};
use std::fmt;

/// Runtime type of an operand, as reported by type mismatch errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Number,
    Date,
    Array,
    Boolean,
    Object,
    Null,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Date => "date",
            ValueKind::Array => "array",
            ValueKind::Boolean => "boolean",
            ValueKind::Object => "object",
            ValueKind::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operand passed to a condition method
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Number(Number),
    DateTime(DateTime<Utc>),
    List(Vec<QueryValue>),
    Boolean(bool),
    Object(Map<String, Value>),
    Null,
}

impl QueryValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            QueryValue::Text(_) => ValueKind::String,
            QueryValue::Number(_) => ValueKind::Number,
            QueryValue::DateTime(_) => ValueKind::Date,
            QueryValue::List(_) => ValueKind::Array,
            QueryValue::Boolean(_) => ValueKind::Boolean,
            QueryValue::Object(_) => ValueKind::Object,
            QueryValue::Null => ValueKind::Null,
        }
    }

    /// Render a string, number or date operand; other kinds have no operand form
    pub fn render_scalar(&self, hour_clock: HourClock) -> Option<String> {
        match self {
            QueryValue::Text(text) => Some(text.clone()),
            QueryValue::Number(number) => Some(render_number(number)),
            QueryValue::DateTime(value) => Some(format_datetime(value, hour_clock)),
            _ => None,
        }
    }
}

/// Integers keep their literal; floats use `f64`'s `Display`, so `1.0` renders as `1`
pub(crate) fn render_number(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() => float.to_string(),
        _ => number.to_string(),
    }
}

impl From<String> for QueryValue {
    fn from(val: String) -> Self {
        QueryValue::Text(val)
    }
}

impl From<&str> for QueryValue {
    fn from(val: &str) -> Self {
        QueryValue::Text(val.to_string())
    }
}

impl From<&String> for QueryValue {
    fn from(val: &String) -> Self {
        QueryValue::Text(val.clone())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(val: $ty) -> Self {
                    QueryValue::Number(Number::from(val))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Non-finite floats have no literal form and become `Null`
impl From<f64> for QueryValue {
    fn from(val: f64) -> Self {
        Number::from_f64(val)
            .map(QueryValue::Number)
            .unwrap_or(QueryValue::Null)
    }
}

/// Goes through the `f32` literal so `0.1f32` stays `0.1` instead of its widened `f64` value
impl From<f32> for QueryValue {
    fn from(val: f32) -> Self {
        val.to_string()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(QueryValue::Number)
            .unwrap_or(QueryValue::Null)
    }
}

impl From<bool> for QueryValue {
    fn from(val: bool) -> Self {
        QueryValue::Boolean(val)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for QueryValue {
    fn from(val: DateTime<Tz>) -> Self {
        QueryValue::DateTime(to_utc(&val))
    }
}

/// Naive datetimes are taken to already be in UTC
impl From<NaiveDateTime> for QueryValue {
    fn from(val: NaiveDateTime) -> Self {
        QueryValue::DateTime(Utc.from_utc_datetime(&val))
    }
}

impl From<NaiveDate> for QueryValue {
    fn from(val: NaiveDate) -> Self {
        QueryValue::from(NaiveDateTime::from(val))
    }
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    fn from(val: Vec<T>) -> Self {
        QueryValue::List(val.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<QueryValue>, const N: usize> From<[T; N]> for QueryValue {
    fn from(val: [T; N]) -> Self {
        QueryValue::List(val.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<QueryValue>> From<&[T]> for QueryValue {
    fn from(val: &[T]) -> Self {
        QueryValue::List(val.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => QueryValue::Null,
        }
    }
}

impl From<Value> for QueryValue {
    fn from(val: Value) -> Self {
        match val {
            Value::String(text) => QueryValue::Text(text),
            Value::Number(number) => QueryValue::Number(number),
            Value::Array(items) => QueryValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => QueryValue::Object(map),
            Value::Bool(flag) => QueryValue::Boolean(flag),
            Value::Null => QueryValue::Null,
        }
    }
}
