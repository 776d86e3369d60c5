//! # respline
//!
//! A blocking decoder for the RESP wire protocol (the line-oriented,
//! length-prefixed serialization format spoken by Redis clients), with:
//! - A typed value model with safe narrowing accessors
//! - Recursive decoding of nested arrays
//! - A command decoding mode accepting both multibulk and inline commands
//! - A hard line-length limit surfaced distinctly from I/O errors
//!
//! ## Data Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Byte Stream (Read)                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Line Scanner                              │
//! │             (CRLF framing, length limit)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Value Decoder                              │
//! │           (tag dispatch, recursive arrays)                   │
//! └──────────┬──────────────────────────────┬───────────────────┘
//!            │                              │
//!            ▼                              ▼
//!     ┌─────────────┐              ┌───────────────┐
//!     │    Value    │              │    Command    │
//!     │   (typed)   │              │ (Vec<String>) │
//!     └─────────────┘              └───────────────┘
//! ```
//!
//! The decoder is synchronous and blocking: each call reads from the
//! underlying stream until a complete value (including all nested elements)
//! is available or a failure occurs. One decoder per connection, one
//! connection per thread is the intended usage pattern; timeouts belong on
//! the transport (e.g. `TcpStream::set_read_timeout`), not here.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RespError, Result};
pub use protocol::{Decoder, Value, ValueKind, DEFAULT_LINE_LIMIT};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of respline
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
