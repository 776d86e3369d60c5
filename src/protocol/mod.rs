//! Protocol Module
//!
//! Decoding for the RESP wire format: typed values and client commands.
//!
//! ## Wire Format
//!
//! Every header line is terminated by CRLF (`\r\n`, exactly 2 bytes).
//!
//! ### Type Tags (single leading byte, case-sensitive)
//! ```text
//! +   simple string    +OK\r\n
//! -   error            -ERR message\r\n
//! :   integer          :42\r\n
//! $   bulk string      $<decimal length>\r\n<payload bytes>\r\n
//! *   array            *<decimal count>\r\n<count nested frames>
//! ```
//!
//! ### Command Frames
//! A client command is either a multibulk frame (an array whose elements are
//! all bulk strings):
//! ```text
//! *3\r\n$3\r\nset\r\n$3\r\nkey\r\n$5\r\nvalue\r\n
//! ```
//! or a legacy inline frame — a single line with no leading `*`, tokens
//! separated by runs of whitespace:
//! ```text
//! set key value\r\n
//! ```
//!
//! No negative lengths or counts are accepted; dialects that use `$-1`/`*-1`
//! for null values are rejected as malformed.

mod decoder;
mod value;

pub use decoder::{Decoder, DEFAULT_LINE_LIMIT};
pub use value::{Value, ValueKind};
