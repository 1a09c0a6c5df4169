//! TCP Server
//!
//! Accepts connections and spawns one handler thread per client.
//!
//! The listener runs non-blocking and the accept loop polls a shutdown
//! flag between attempts, so a shutdown signal turns into a clean return
//! from `run` without needing a wake-up connection.

use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::network::Connection;
use crate::store::Lexicon;

/// How often the accept loop checks the shutdown flag
const ACCEPT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// TCP server for the dictionary
pub struct Server {
    config: Config,
    store: Arc<Lexicon>,
    listener: TcpListener,
    local_addr: SocketAddr,
    shutdown: Arc<AtomicBool>,
}

impl Server {
    /// Bind the listener for the configured address
    pub fn bind(config: Config, store: Arc<Lexicon>) -> Result<Self> {
        let listener = TcpListener::bind(&config.listen_addr)?;
        listener.set_nonblocking(true)?;
        let local_addr = listener.local_addr()?;

        Ok(Self {
            config,
            store,
            listener,
            local_addr,
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// The address the listener is actually bound to
    ///
    /// Differs from the configured address when binding to port 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// A handle that makes `run` return when flipped
    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Run the accept loop (blocking)
    ///
    /// Returns once the shutdown flag is set. Connection handler threads
    /// already running are left to drain on their own; in-flight store
    /// mutations are never rolled back.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Listening on {}", self.local_addr);

        loop {
            if self.shutdown.load(Ordering::Relaxed) {
                tracing::info!("Shutdown requested, stopping accept loop");
                return Ok(());
            }

            match self.listener.accept() {
                Ok((stream, peer)) => {
                    tracing::debug!("Accepted connection from {}", peer);

                    // The listener is non-blocking; the stream must not be
                    stream.set_nonblocking(false)?;

                    let store = Arc::clone(&self.store);
                    let max_distance = self.config.max_distance;
                    thread::spawn(move || {
                        match Connection::new(stream, store, max_distance) {
                            Ok(mut connection) => {
                                if let Err(e) = connection.handle() {
                                    tracing::warn!(
                                        "Connection {} ended with error: {}",
                                        connection.peer_addr(),
                                        e
                                    );
                                }
                            }
                            Err(e) => {
                                tracing::warn!("Failed to set up connection from {}: {}", peer, e);
                            }
                        }
                    });
                }
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(ACCEPT_POLL_INTERVAL);
                }
                Err(e) => {
                    // A failed accept affects no existing connection
                    tracing::warn!("Accept failed: {}", e);
                }
            }
        }
    }
}
