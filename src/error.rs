//! Error types for respline
//!
//! Every decode failure is terminal for the current call: nothing is retried
//! or logged internally, and the stream position after a failure is not
//! guaranteed to sit on a frame boundary. A caller that wants to keep
//! reading after an error must discard the connection.

use thiserror::Error;

use crate::protocol::ValueKind;

/// Result type alias using RespError
pub type Result<T> = std::result::Result<T, RespError>;

/// Unified error type for decode operations
#[derive(Debug, Error)]
pub enum RespError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// Underlying stream fault, including unexpected end of stream
    /// (`ErrorKind::UnexpectedEof`).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Framing Errors
    // -------------------------------------------------------------------------
    /// No line terminator found within the line-length limit.
    #[error("line exceeds limit of {0} bytes without a terminator")]
    LineTooLong(usize),

    /// An empty line where a value was expected.
    #[error("empty line where a value was expected")]
    Truncated,

    /// Bulk string payload not followed by an exact CRLF.
    #[error("bulk string payload not terminated by CRLF")]
    MalformedTerminator,

    // -------------------------------------------------------------------------
    // Header Errors
    // -------------------------------------------------------------------------
    /// Non-numeric or negative length/count header.
    #[error("malformed length header: {0:?}")]
    MalformedLength(String),

    /// Unparsable integer payload.
    #[error("malformed integer: {0:?}")]
    MalformedInteger(String),

    /// Unrecognized leading type tag byte.
    #[error("unknown type tag: 0x{0:02x}")]
    UnknownType(u8),

    // -------------------------------------------------------------------------
    // Narrowing Errors
    // -------------------------------------------------------------------------
    /// A decoded value narrowed to an incompatible variant.
    #[error("expected {expected}, found {actual}")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },
}
