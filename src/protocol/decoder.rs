//! Protocol decoder
//!
//! Blocking decode of values and commands from a buffered byte stream.
//!
//! The decoder owns its source for the lifetime of the session and is the
//! only thing advancing the read cursor. It is synchronous: a call returns
//! once a complete value has been read, or with the failure that invalidated
//! the stream. Concurrent calls against one decoder are not supported;
//! callers serialize access (one decoder per connection).

use std::io::{BufRead, BufReader, Error as IoError, ErrorKind, Read};

use bytes::Bytes;
use tracing::trace;

use crate::error::{RespError, Result};
use super::value::{Value, ValueKind};

/// Default line-length limit (header lines and inline commands)
pub const DEFAULT_LINE_LIMIT: usize = 64 * 1024;

/// Line terminator
const CRLF: &[u8] = b"\r\n";

/// Blocking protocol decoder over a buffered byte source
pub struct Decoder<R> {
    /// Buffered source (exclusively owned; the buffer is reused across
    /// reads, so decoded payloads are always copied out)
    source: BufReader<R>,

    /// Hard cap on line length, surfaced as `LineTooLong`
    line_limit: usize,
}

impl<R: Read> Decoder<R> {
    /// Create a decoder with the default line-length limit
    pub fn new(source: R) -> Self {
        Self::with_line_limit(source, DEFAULT_LINE_LIMIT)
    }

    /// Create a decoder with an explicit line-length limit
    pub fn with_line_limit(source: R, line_limit: usize) -> Self {
        Self {
            source: BufReader::new(source),
            line_limit,
        }
    }

    /// Read one line, excluding its terminator
    ///
    /// Consumes the terminator from the source. Accepts CRLF and tolerates a
    /// bare LF. Fails with [`RespError::LineTooLong`] if no terminator
    /// appears within the line limit, and with an `UnexpectedEof` I/O error
    /// if the stream ends before one.
    pub fn read_line(&mut self) -> Result<Vec<u8>> {
        let mut line = Vec::new();

        // Bound the read so an unterminated stream can't grow the line
        // without limit. +2 leaves room for the terminator itself.
        let budget = self.line_limit as u64 + 2;
        let n = (&mut self.source).take(budget).read_until(b'\n', &mut line)?;

        if n == 0 {
            return Err(IoError::new(
                ErrorKind::UnexpectedEof,
                "stream ended before a line",
            )
            .into());
        }
        if line.last() != Some(&b'\n') {
            if line.len() as u64 == budget {
                return Err(RespError::LineTooLong(self.line_limit));
            }
            return Err(IoError::new(
                ErrorKind::UnexpectedEof,
                "stream ended mid-line",
            )
            .into());
        }

        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Decode one complete protocol value
    ///
    /// Reads exactly the bytes belonging to the value: its header line, plus
    /// a length-declared payload for bulk strings, plus the declared number
    /// of recursively decoded elements for arrays. Any failure is terminal
    /// for the stream; there is no resynchronization.
    pub fn decode(&mut self) -> Result<Value> {
        let line = self.read_line()?;
        let (&tag, payload) = line.split_first().ok_or(RespError::Truncated)?;

        match ValueKind::from_tag(tag) {
            Some(ValueKind::SimpleString) => Ok(Value::SimpleString(lossy(payload))),
            Some(ValueKind::Error) => Ok(Value::Error(lossy(payload))),
            Some(ValueKind::Integer) => parse_integer(payload).map(Value::Integer),
            Some(ValueKind::BulkString) => {
                let len = parse_length(payload)?;
                self.read_bulk_payload(len).map(Value::BulkString)
            }
            Some(ValueKind::Array) => {
                let count = parse_length(payload)?;
                self.decode_array_body(count).map(Value::Array)
            }
            None => Err(RespError::UnknownType(tag)),
        }
    }

    /// Decode one client command as its ordered argument list
    ///
    /// Accepts both framings: a multibulk frame (`*<n>` header followed by
    /// `n` bulk strings, any other element kind failing with
    /// [`RespError::TypeMismatch`]), or an inline frame (any line with no
    /// leading `*`, split on runs of ASCII whitespace). An empty or
    /// all-whitespace inline line yields an empty argument list.
    pub fn decode_command(&mut self) -> Result<Vec<String>> {
        let line = self.read_line()?;

        if line.first() == Some(&b'*') {
            let count = parse_length(&line[1..])?;
            let elements = self.decode_array_body(count)?;

            let mut argv = Vec::with_capacity(elements.len());
            for element in &elements {
                let text = element.as_bulk()?;
                argv.push(String::from_utf8_lossy(text).into_owned());
            }
            trace!(argc = argv.len(), "decoded multibulk command");
            Ok(argv)
        } else {
            let text = String::from_utf8_lossy(&line);
            let argv: Vec<String> = text
                .split_ascii_whitespace()
                .map(str::to_owned)
                .collect();
            trace!(argc = argv.len(), "decoded inline command");
            Ok(argv)
        }
    }

    /// Read a bulk string payload of the declared length plus its terminator
    ///
    /// Loops until the full length is read; a short individual read is not a
    /// failure, only a genuine stream fault or EOF is. The terminator read
    /// tolerates EOF so that a payload shorter than declared reports
    /// `MalformedTerminator` rather than a bare I/O error.
    fn read_bulk_payload(&mut self, len: usize) -> Result<Bytes> {
        let mut payload = vec![0u8; len];
        self.source.read_exact(&mut payload)?;

        let mut terminator = [0u8; 2];
        let mut filled = 0;
        while filled < terminator.len() {
            match self.source.read(&mut terminator[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        if &terminator[..filled] != CRLF {
            return Err(RespError::MalformedTerminator);
        }

        Ok(Bytes::from(payload))
    }

    /// Decode the declared number of array elements, in order, fail-fast
    fn decode_array_body(&mut self, count: usize) -> Result<Vec<Value>> {
        // Don't trust the header for preallocation.
        let mut items = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            items.push(self.decode()?);
        }
        Ok(items)
    }
}

/// Parse a non-negative decimal length/count header payload
fn parse_length(payload: &[u8]) -> Result<usize> {
    std::str::from_utf8(payload)
        .ok()
        .and_then(|text| text.parse::<usize>().ok())
        .ok_or_else(|| RespError::MalformedLength(lossy(payload)))
}

/// Parse a base-10 signed integer payload
fn parse_integer(payload: &[u8]) -> Result<i64> {
    std::str::from_utf8(payload)
        .ok()
        .and_then(|text| text.parse::<i64>().ok())
        .ok_or_else(|| RespError::MalformedInteger(lossy(payload)))
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
