//! The tagged scalar value type used between records and the driver.
//!
//! A [`Value`] is the dynamically-typed interchange scalar: record fields
//! marshal into values, query results marshal out of them. The coercion
//! methods implement the fixed dispatch for loading a value into a field of
//! a given kind; each failure names the offending column so the caller can
//! tell which mapping broke.
//!
//! Text and blob columns are always captured owned: the driver's scan
//! buffers are only valid for a single cursor step.

use rusqlite::types::ValueRef;

use crate::error::{Error, Result};

/// Kind tag for a record field, as recorded in its field descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// UTF-8 text.
    Text,
    /// Boolean, stored as an integer column.
    Bool,
    /// Signed integer family.
    Int,
    /// Floating-point family.
    Float,
    /// Raw bytes.
    Bytes,
}

/// A dynamically-typed scalar column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// Owned text.
    Text(String),
    /// Owned blob.
    Bytes(Vec<u8>),
}

impl Value {
    /// Coerce into owned text.
    ///
    /// Only a text value passes; anything else is a coercion error naming
    /// `column`.
    pub fn as_text(&self, column: &str) -> Result<String> {
        match self {
            Self::Text(s) => Ok(s.clone()),
            other => Err(Error::type_coercion(
                column,
                format!("expected text, found {}", other.kind_name()),
            )),
        }
    }

    /// Coerce into a boolean.
    ///
    /// Text `"1"` is true and any other text false; integers are true when
    /// nonzero (booleans round-trip through integer columns).
    pub fn as_bool(&self, column: &str) -> Result<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Int(i) => Ok(*i != 0),
            Self::Text(s) => Ok(s == "1"),
            other => Err(Error::type_coercion(
                column,
                format!("expected bool, found {}", other.kind_name()),
            )),
        }
    }

    /// Coerce into a 64-bit integer.
    ///
    /// Text is parsed; floats are truncated; booleans become 0 or 1.
    pub fn as_int(&self, column: &str) -> Result<i64> {
        match self {
            Self::Int(i) => Ok(*i),
            Self::Bool(b) => Ok(i64::from(*b)),
            Self::Float(f) => Ok(*f as i64),
            Self::Text(s) => s.parse().map_err(|_| {
                Error::type_coercion(column, format!("cannot parse {s:?} as an integer"))
            }),
            other => Err(Error::type_coercion(
                column,
                format!("expected integer, found {}", other.kind_name()),
            )),
        }
    }

    /// Coerce into a 64-bit float.
    ///
    /// Text is parsed; integers are widened.
    pub fn as_float(&self, column: &str) -> Result<f64> {
        match self {
            Self::Float(f) => Ok(*f),
            Self::Int(i) => Ok(*i as f64),
            Self::Text(s) => s.parse().map_err(|_| {
                Error::type_coercion(column, format!("cannot parse {s:?} as a float"))
            }),
            other => Err(Error::type_coercion(
                column,
                format!("expected float, found {}", other.kind_name()),
            )),
        }
    }

    /// Coerce into owned bytes. Text yields its UTF-8 bytes.
    pub fn as_bytes(&self, column: &str) -> Result<Vec<u8>> {
        match self {
            Self::Bytes(b) => Ok(b.clone()),
            Self::Text(s) => Ok(s.clone().into_bytes()),
            other => Err(Error::type_coercion(
                column,
                format!("expected bytes, found {}", other.kind_name()),
            )),
        }
    }

    /// Human-readable name of the value's kind, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
        }
    }

    /// Convert to the driver's owned value type for parameter binding.
    pub(crate) fn to_sqlite(&self) -> rusqlite::types::Value {
        match self {
            Self::Null => rusqlite::types::Value::Null,
            Self::Bool(b) => rusqlite::types::Value::Integer(i64::from(*b)),
            Self::Int(i) => rusqlite::types::Value::Integer(*i),
            Self::Float(f) => rusqlite::types::Value::Real(*f),
            Self::Text(s) => rusqlite::types::Value::Text(s.clone()),
            Self::Bytes(b) => rusqlite::types::Value::Blob(b.clone()),
        }
    }

    /// Copy a value out of the driver's row buffer.
    pub(crate) fn from_sqlite(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Self::Null,
            ValueRef::Integer(i) => Self::Int(i),
            ValueRef::Real(f) => Self::Float(f),
            ValueRef::Text(bytes) => Self::Text(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(bytes) => Self::Bytes(bytes.to_vec()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}
