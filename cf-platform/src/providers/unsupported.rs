//! Fallback probe for platforms without a memory query mechanism.

use crate::traits::MemoryProbe;

/// Provider that never knows the memory size.
pub struct UnsupportedProbe;

impl MemoryProbe for UnsupportedProbe {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn total_physical_memory(&self) -> Option<u64> {
        None
    }
}
