//! Configuration for the TCP marker sink
//!
//! Loads configuration from a TOML file with the minimal parameters needed
//! for streaming markers to external viewers.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Marker streaming configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VizConfig {
    /// TCP bind address for outbound marker data
    ///
    /// Examples:
    /// - `0.0.0.0:5560` - Bind to all interfaces on port 5560
    /// - `127.0.0.1:5560` - Localhost only
    pub bind_address: String,

    /// Capacity of the lock-free queue between callers and the publisher
    /// thread. Markers beyond this are dropped, not blocked on.
    pub queue_capacity: usize,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5560".to_string(),
            queue_capacity: 256,
        }
    }
}

impl VizConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(contents: &str) -> Result<Self> {
        let config: VizConfig = toml::from_str(contents)?;
        Ok(config)
    }
}
