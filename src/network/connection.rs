//! Connection Handler
//!
//! Handles individual client connections.
//!
//! One request line in, one response line out, until the peer closes the
//! stream. A line that fails to parse gets an error response and the loop
//! continues; transport failures end this connection only.

use std::io::{BufReader, BufWriter};
use std::net::TcpStream;
use std::sync::Arc;

use crate::error::{LexError, Result};
use crate::processor;
use crate::protocol::{parse_request, read_line, write_response, Response, INVALID_FORMAT_MESSAGE};
use crate::store::Lexicon;

/// Handles a single client connection
pub struct Connection {
    /// TCP stream reader (buffered for line reads)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered, flushed per response)
    writer: BufWriter<TcpStream>,

    /// Shared lexicon store
    store: Arc<Lexicon>,

    /// Fuzzy lookup threshold for query fallback
    max_distance: usize,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Create a new connection handler
    pub fn new(stream: TcpStream, store: Arc<Lexicon>, max_distance: usize) -> Result<Self> {
        // Get peer address for logging before we split the stream
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            store,
            max_distance,
            peer_addr,
        })
    }

    /// Handle the connection (blocking until closed)
    ///
    /// Reads request lines in a loop and sends responses. Returns when the
    /// client disconnects or an unrecoverable transport error occurs.
    pub fn handle(&mut self) -> Result<()> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        loop {
            let line = match read_line(&mut self.reader) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    // Client disconnected gracefully
                    tracing::debug!("Client {} disconnected", self.peer_addr);
                    return Ok(());
                }
                Err(LexError::Io(ref e)) if is_disconnect(e.kind()) => {
                    tracing::debug!("Connection lost to client {}: {}", self.peer_addr, e);
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!("Error reading from {}: {}", self.peer_addr, e);
                    return Err(e);
                }
            };

            // A malformed line gets an error response; the connection stays up
            let response = match parse_request(&line) {
                Ok(request) => {
                    tracing::trace!("Request from {}: {:?}", self.peer_addr, request);
                    processor::process(&self.store, self.max_distance, request)
                }
                Err(e) => {
                    tracing::debug!("Malformed request from {}: {}", self.peer_addr, e);
                    Response::error(INVALID_FORMAT_MESSAGE)
                }
            };

            if let Err(e) = self.send_response(&response) {
                // The client may vanish between the read and the write;
                // that ends this handler, never the server
                if let LexError::Io(ref io_err) = e {
                    if is_disconnect(io_err.kind()) {
                        tracing::debug!(
                            "Client {} disconnected before response could be sent: {}",
                            self.peer_addr,
                            e
                        );
                        return Ok(());
                    }
                }
                tracing::warn!("Error writing to {}: {}", self.peer_addr, e);
                return Err(e);
            }
        }
    }

    /// Send a response to the client
    fn send_response(&mut self, response: &Response) -> Result<()> {
        write_response(&mut self.writer, response)
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

/// I/O error kinds that mean the peer is gone rather than the server broke
fn is_disconnect(kind: std::io::ErrorKind) -> bool {
    matches!(
        kind,
        std::io::ErrorKind::UnexpectedEof
            | std::io::ErrorKind::ConnectionReset
            | std::io::ErrorKind::ConnectionAborted
            | std::io::ErrorKind::BrokenPipe
    )
}
