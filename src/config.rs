//! Configuration for lexd
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default maximum edit distance for the fuzzy lookup fallback
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Main configuration for a lexd server instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen address
    pub listen_addr: String,

    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// Flat-file dictionary snapshot, loaded at startup and written at
    /// shutdown. Format: one `word: meaning1~meaning2~...` line per entry.
    pub dict_path: PathBuf,

    // -------------------------------------------------------------------------
    // Lookup Configuration
    // -------------------------------------------------------------------------
    /// Maximum edit distance at which a near-miss key is still suggested
    /// when an exact query lookup fails
    pub max_distance: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:7878".to_string(),
            dict_path: PathBuf::from("./dictionary.txt"),
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the dictionary snapshot path
    pub fn dict_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dict_path = path.into();
        self
    }

    /// Set the fuzzy lookup distance threshold
    pub fn max_distance(mut self, distance: usize) -> Self {
        self.config.max_distance = distance;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
