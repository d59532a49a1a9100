//! This module provides [Value], a dynamically typed field value for rows
//! whose column types are only known at runtime.

use delegate::delegate;

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

use crate::printer::{FieldPrinter, Null};

/// Enum of the storage classes a field value can have.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    Null,
    /// Signed 64bit integer
    Integer(i64),
    /// 64bit floating point number
    Real(f64),
    /// Unicode text
    Text(String),
    /// Opaque binary data
    Blob(Vec<u8>),
}

impl Value {
    /// Return `true` if this is [Value::Null].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl FieldPrinter for Value {
    delegate! {
        to match self {
            Value::Null => Null,
            Value::Integer(value) => value,
            Value::Real(value) => value,
            Value::Text(value) => value,
            Value::Blob(value) => value,
        } {
            fn print_field(&self) -> String;
        }
    }
}

impl From<Null> for Value {
    fn from(_: Null) -> Self {
        Value::Null
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Blob(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 5 {
            0 => Value::Null,
            1 => Value::Integer(i64::arbitrary(g)),
            2 => Value::Real(f64::arbitrary(g)),
            3 => Value::Text(String::arbitrary(g)),
            _ => Value::Blob(Vec::<u8>::arbitrary(g)),
        }
    }
}
