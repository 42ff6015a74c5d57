//! Physical memory detection for adaptive buffer sizing.
//!
//! The reading is advisory. A result of 0 means "unknown" and is never an
//! error.

use crate::registry::ProbeRegistry;
use crate::traits::MemoryProbe;

/// Default ceiling applied to memory readings.
///
/// Keeps the value addressable on 32-bit targets and bounds corrupt
/// readings elsewhere.
pub const DEFAULT_MAXIMUM_MEMORY: u64 = if usize::BITS < 64 {
    1 << 31
} else {
    1 << 40
};

/// Clamped view over a [`MemoryProbe`].
pub struct MemoryDetector {
    probe: Box<dyn MemoryProbe>,
    maximum: u64,
}

impl MemoryDetector {
    /// Detector for the current platform with the default ceiling.
    pub fn new() -> Self {
        Self::with_probe(ProbeRegistry::current(), DEFAULT_MAXIMUM_MEMORY)
    }

    pub fn with_probe(probe: Box<dyn MemoryProbe>, maximum: u64) -> Self {
        Self { probe, maximum }
    }

    pub fn probe_name(&self) -> &'static str {
        self.probe.name()
    }

    pub fn maximum(&self) -> u64 {
        self.maximum
    }

    /// Installed physical memory in bytes, at most [`maximum`](Self::maximum).
    pub fn physical_memory_bytes(&self) -> u64 {
        let bytes = self
            .probe
            .total_physical_memory()
            .unwrap_or(0)
            .min(self.maximum);
        tracing::debug!(probe = self.probe.name(), bytes, "physical memory");
        bytes
    }
}

impl Default for MemoryDetector {
    fn default() -> Self {
        Self::new()
    }
}
