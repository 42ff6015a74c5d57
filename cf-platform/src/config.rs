//! Platform services configuration.
//!
//! Nothing here is persisted. The struct is serde-ready so a host
//! application can embed it in its own settings.

use crate::memory::DEFAULT_MAXIMUM_MEMORY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Scratch directory to use instead of probing the environment.
    /// Ignored unless it names an existing directory.
    pub temp_dir: Option<PathBuf>,

    /// Ceiling applied to physical memory readings, in bytes.
    pub maximum_memory: u64,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            temp_dir: None,
            maximum_memory: DEFAULT_MAXIMUM_MEMORY,
        }
    }
}

impl PlatformConfig {
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    pub fn with_maximum_memory(mut self, bytes: u64) -> Self {
        self.maximum_memory = bytes;
        self
    }
}
