//! Network Module
//!
//! TCP server and connection handling.
//!
//! ## Architecture
//! - Single acceptor loop, polled against a shutdown flag
//! - One OS thread per client connection
//! - Requests routed through the request processor; the shared lexicon is
//!   the only cross-connection state

mod server;
mod connection;

pub use server::Server;
pub use connection::Connection;
