//! Memory probe for BSD-family kernels, queried through `sysctl(CTL_HW, ...)`.
//!
//! Each kernel names "total physical memory" differently, and some only
//! report it as a 32-bit quantity.

use crate::traits::MemoryProbe;
use std::mem::size_of;
use std::ptr;

// Values from each platform's <sys/sysctl.h>.
#[cfg(any(target_os = "macos", target_os = "ios"))]
const HW_TOTAL_MEMORY: libc::c_int = 24; // HW_MEMSIZE
#[cfg(any(target_os = "macos", target_os = "ios"))]
type MemoryWord = u64;

#[cfg(target_os = "netbsd")]
const HW_TOTAL_MEMORY: libc::c_int = 13; // HW_PHYSMEM64
#[cfg(target_os = "netbsd")]
type MemoryWord = u64;

#[cfg(target_os = "openbsd")]
const HW_TOTAL_MEMORY: libc::c_int = 19; // HW_PHYSMEM64
#[cfg(target_os = "openbsd")]
type MemoryWord = u64;

#[cfg(target_os = "freebsd")]
const HW_TOTAL_MEMORY: libc::c_int = 12; // HW_REALMEM
#[cfg(target_os = "freebsd")]
type MemoryWord = u32;

#[cfg(target_os = "dragonfly")]
const HW_TOTAL_MEMORY: libc::c_int = 5; // HW_PHYSMEM
#[cfg(target_os = "dragonfly")]
type MemoryWord = u32;

/// BSD and Apple provider.
pub struct SysctlProbe;

impl MemoryProbe for SysctlProbe {
    fn name(&self) -> &'static str {
        "sysctl"
    }

    fn total_physical_memory(&self) -> Option<u64> {
        let mut mib = [libc::CTL_HW, HW_TOTAL_MEMORY];
        let mut value: MemoryWord = 0;
        let mut len = size_of::<MemoryWord>();

        // SAFETY: `value` and `len` describe a writable buffer of exactly
        // `len` bytes, and no new value is being set.
        let rc = unsafe {
            libc::sysctl(
                mib.as_mut_ptr(),
                mib.len() as _,
                &mut value as *mut MemoryWord as *mut libc::c_void,
                &mut len,
                ptr::null_mut(),
                0,
            )
        };

        if rc != 0 || len != size_of::<MemoryWord>() {
            tracing::debug!(rc, len, "sysctl could not report physical memory");
            return None;
        }

        Some(u64::from(value))
    }
}
