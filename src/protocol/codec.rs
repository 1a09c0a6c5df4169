//! Protocol codec
//!
//! Line-oriented I/O helpers: one JSON document per newline-terminated
//! line. The server side reads raw lines and parses them separately so a
//! malformed line can be answered with an error response instead of
//! tearing down the connection.

use std::io::{BufRead, Write};

use crate::error::{LexError, Result};

use super::{Request, Response};

/// Separator between meanings inside a single text field
pub const MEANING_SEPARATOR: char = '~';

/// Separator between the old meaning and the new meaning(s) in the
/// combined update field used by clients
pub const OLD_NEW_SEPARATOR: char = '*';

/// Message sent back when an inbound line fails to parse
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid JSON format.";

/// Read one newline-terminated line from the stream
///
/// Returns `Ok(None)` on end-of-stream. The trailing newline (and any
/// carriage return) is stripped.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let n = reader.read_line(&mut line)?;
    if n == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Parse a line into a request
///
/// Fails on anything that is not a JSON object with a `type` field; field
/// presence beyond that is the processor's concern.
pub fn parse_request(line: &str) -> Result<Request> {
    serde_json::from_str(line).map_err(|e| LexError::Protocol(e.to_string()))
}

/// Write a request as one line (client side)
pub fn write_request<W: Write>(writer: &mut W, request: &Request) -> Result<()> {
    let json =
        serde_json::to_string(request).map_err(|e| LexError::Protocol(e.to_string()))?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Read a response line (client side)
///
/// Returns `Ok(None)` on end-of-stream.
pub fn read_response<R: BufRead>(reader: &mut R) -> Result<Option<Response>> {
    match read_line(reader)? {
        None => Ok(None),
        Some(line) => {
            let response =
                serde_json::from_str(&line).map_err(|e| LexError::Protocol(e.to_string()))?;
            Ok(Some(response))
        }
    }
}

/// Write a response as one line (server side)
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    let json =
        serde_json::to_string(response).map_err(|e| LexError::Protocol(e.to_string()))?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
