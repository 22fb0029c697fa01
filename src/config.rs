//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::DEFAULT_CAPACITY;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of mirrors kept for edit/delete propagation
    pub mirror_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Interval in seconds between stats log lines
    pub stats_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MIRROR_CAPACITY` - Mirrors kept in the index (default: 250)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `STATS_INTERVAL` - Stats reporting frequency in seconds (default: 60)
    ///
    /// Unparseable values fall back to the default. A zero capacity is
    /// accepted here and rejected when the index is built.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            mirror_capacity: env_or("MIRROR_CAPACITY", defaults.mirror_capacity),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            stats_interval: env_or("STATS_INTERVAL", defaults.stats_interval),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mirror_capacity: DEFAULT_CAPACITY,
            server_port: 3000,
            stats_interval: 60,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
