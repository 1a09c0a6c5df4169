//! lexd Server Binary
//!
//! Starts the TCP dictionary server: loads the snapshot, serves requests
//! until Ctrl+C, then writes the snapshot back and exits.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use lexd::network::Server;
use lexd::{persist, Config, Lexicon};

/// lexd Server
#[derive(Parser, Debug)]
#[command(name = "lexd-server")]
#[command(about = "Concurrent in-memory dictionary server")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:7878")]
    listen: String,

    /// Dictionary snapshot file
    #[arg(short, long, default_value = "./dictionary.txt")]
    dict_file: String,

    /// Maximum edit distance for fuzzy query suggestions
    #[arg(short = 'x', long, default_value = "2")]
    max_distance: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lexd=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("lexd Server v{}", lexd::VERSION);
    tracing::info!("Listen address: {}", args.listen);
    tracing::info!("Dictionary file: {}", args.dict_file);

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .dict_path(&args.dict_file)
        .max_distance(args.max_distance)
        .build();

    // Populate the store from the snapshot; an unreadable file means we
    // start empty, not that we refuse to start
    let store = Arc::new(Lexicon::new());
    match persist::load(&config.dict_path, &store) {
        Ok(count) => tracing::info!("Loaded dictionary with {} entries", count),
        Err(e) => tracing::warn!("Failed to load dictionary: {}", e),
    }

    // Bind before installing the signal handler so a bad address fails fast
    let mut server = match Server::bind(config.clone(), Arc::clone(&store)) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", config.listen_addr, e);
            std::process::exit(1);
        }
    };

    // Ctrl+C flips the shutdown flag; the accept loop notices and returns
    let shutdown = server.shutdown_handle();
    if let Err(e) = ctrlc::set_handler(move || {
        tracing::info!("Received Ctrl+C, initiating shutdown...");
        shutdown.store(true, Ordering::Relaxed);
    }) {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    // Best-effort flush; a failed save must not block exit
    match persist::save(&config.dict_path, &store) {
        Ok(count) => tracing::info!("Saved dictionary with {} entries", count),
        Err(e) => tracing::error!("Failed to save dictionary: {}", e),
    }

    tracing::info!("Server stopped");
}
