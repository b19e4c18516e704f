//! Configuration Module
//!
//! Loads server configuration from environment variables.

use std::env;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::cache::DEFAULT_CAPACITY;

const DEFAULT_SERVER_PORT: u16 = 8080;

/// Server configuration parameters.
///
/// Missing, unparsable or zero values fall back to the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum number of entries the shared cache holds
    pub cache_capacity: NonZeroUsize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 5)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config using `lookup` to resolve variable names.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            cache_capacity: parse(&lookup, "CACHE_CAPACITY").unwrap_or(DEFAULT_CAPACITY),
            server_port: parse(&lookup, "SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CAPACITY,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

fn parse<T, F>(lookup: &F, name: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(name).and_then(|raw| raw.trim().parse().ok())
}
