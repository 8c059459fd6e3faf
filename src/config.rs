//! Configuration for FlatStore
//!
//! Centralized configuration with sensible defaults.

use crate::format::FORMAT_VERSION;

/// Configuration for a record store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Durability
    // -------------------------------------------------------------------------
    /// When to fsync after a header rewrite
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Format
    // -------------------------------------------------------------------------
    /// Version number written into newly created headers.
    /// Stored only; readers never interpret it.
    pub format_version: u32,
}

/// Sync strategy for appends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync after every append (record + header)
    EveryAppend,

    /// Leave flushing to the OS
    Never,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sync_strategy: SyncStrategy::Never,
            format_version: FORMAT_VERSION,
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
    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the version written into new headers
    pub fn format_version(mut self, version: u32) -> Self {
        self.config.format_version = version;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
