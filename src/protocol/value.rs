//! Value model
//!
//! The closed set of protocol value variants and their narrowing accessors.

use std::fmt;

use bytes::Bytes;

use crate::error::{RespError, Result};

/// Value kinds, paired with their wire tag bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    SimpleString,
    Error,
    Integer,
    BulkString,
    Array,
}

impl ValueKind {
    /// Map a leading tag byte to its kind, `None` for unrecognized bytes
    pub fn from_tag(tag: u8) -> Option<ValueKind> {
        match tag {
            b'+' => Some(ValueKind::SimpleString),
            b'-' => Some(ValueKind::Error),
            b':' => Some(ValueKind::Integer),
            b'$' => Some(ValueKind::BulkString),
            b'*' => Some(ValueKind::Array),
            _ => None,
        }
    }

    /// The wire tag byte for this kind
    pub fn tag(self) -> u8 {
        match self {
            ValueKind::SimpleString => b'+',
            ValueKind::Error => b'-',
            ValueKind::Integer => b':',
            ValueKind::BulkString => b'$',
            ValueKind::Array => b'*',
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::SimpleString => "simple string",
            ValueKind::Error => "error",
            ValueKind::Integer => "integer",
            ValueKind::BulkString => "bulk string",
            ValueKind::Array => "array",
        };
        f.write_str(name)
    }
}

/// A decoded protocol value
///
/// Immutable once constructed. Payloads are owned copies, independent of the
/// decoder's read buffer. A decoded `BulkString` always holds exactly the
/// number of bytes its header declared; an `Array` holds exactly its declared
/// element count.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `+OK\r\n`
    SimpleString(String),

    /// `-ERR message\r\n`
    Error(String),

    /// `:42\r\n`
    Integer(i64),

    /// `$3\r\nget\r\n`
    BulkString(Bytes),

    /// `*2\r\n...` (recursive)
    Array(Vec<Value>),
}

impl Value {
    pub fn simple(s: impl Into<String>) -> Self {
        Value::SimpleString(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        Value::Error(s.into())
    }

    pub fn integer(n: i64) -> Self {
        Value::Integer(n)
    }

    pub fn bulk(data: impl Into<Bytes>) -> Self {
        Value::BulkString(data.into())
    }

    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(items)
    }

    /// Get the kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::SimpleString(_) => ValueKind::SimpleString,
            Value::Error(_) => ValueKind::Error,
            Value::Integer(_) => ValueKind::Integer,
            Value::BulkString(_) => ValueKind::BulkString,
            Value::Array(_) => ValueKind::Array,
        }
    }

    /// Narrow to a simple string's text
    pub fn as_simple(&self) -> Result<&str> {
        match self {
            Value::SimpleString(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::SimpleString)),
        }
    }

    /// Narrow to an error's text
    pub fn as_error(&self) -> Result<&str> {
        match self {
            Value::Error(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::Error)),
        }
    }

    /// Narrow to an integer
    pub fn as_integer(&self) -> Result<i64> {
        match self {
            Value::Integer(n) => Ok(*n),
            other => Err(other.mismatch(ValueKind::Integer)),
        }
    }

    /// Narrow to a bulk string's payload bytes
    pub fn as_bulk(&self) -> Result<&Bytes> {
        match self {
            Value::BulkString(data) => Ok(data),
            other => Err(other.mismatch(ValueKind::BulkString)),
        }
    }

    /// Narrow to an array's elements
    pub fn as_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    fn mismatch(&self, expected: ValueKind) -> RespError {
        RespError::TypeMismatch {
            expected,
            actual: self.kind(),
        }
    }
}
