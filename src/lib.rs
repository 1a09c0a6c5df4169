//! # lexd
//!
//! A network-accessible, in-memory dictionary server:
//! - Shared word → meanings store with per-entry mutation locks
//! - Fuzzy lookup fallback via Levenshtein distance
//! - Line-delimited JSON protocol over TCP
//! - Flat-file snapshot loaded at startup, flushed at shutdown
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                             │
//! │              (one thread per connection)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ one JSON line = one request
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Request Processor                           │
//! │        (validation, business rules, fuzzy fallback)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Lexicon   │          │   Matcher   │
//!   │  (DashMap + │          │ (Levenshtein│
//!   │ entry locks)│          │   distance) │
//!   └──────┬──────┘          └─────────────┘
//!          │ load at startup / save at shutdown
//!          ▼
//!   ┌─────────────┐
//!   │  Flat file  │
//!   │ word: m1~m2 │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod matcher;
pub mod processor;
pub mod protocol;
pub mod network;
pub mod persist;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LexError, Result};
pub use config::Config;
pub use store::Lexicon;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of lexd
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
