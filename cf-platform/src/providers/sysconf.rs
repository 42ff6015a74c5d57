//! Memory probe for systems that report page counts through `sysconf`.

use crate::traits::MemoryProbe;

/// Linux provider: physical page count times page size.
pub struct SysconfProbe;

impl MemoryProbe for SysconfProbe {
    fn name(&self) -> &'static str {
        "sysconf"
    }

    fn total_physical_memory(&self) -> Option<u64> {
        // SAFETY: sysconf has no preconditions; it returns -1 for unknown names.
        let pages = unsafe { libc::sysconf(libc::_SC_PHYS_PAGES) };
        let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };

        if pages <= 0 || page_size <= 0 {
            tracing::debug!(pages, page_size, "sysconf could not report physical memory");
            return None;
        }

        Some((pages as u64).saturating_mul(page_size as u64))
    }
}
