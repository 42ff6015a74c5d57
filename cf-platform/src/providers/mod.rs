//! Platform-specific memory probe implementations.

#[cfg(all(
    any(target_os = "linux", target_os = "android"),
    not(all(target_arch = "x86_64", target_pointer_width = "32"))
))]
pub mod sysconf;

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "openbsd"
))]
pub mod sysctl;

// Always available so callers can force "unknown" explicitly.
pub mod unsupported;

#[cfg(all(
    any(target_os = "linux", target_os = "android"),
    not(all(target_arch = "x86_64", target_pointer_width = "32"))
))]
pub use sysconf::SysconfProbe;

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "openbsd"
))]
pub use sysctl::SysctlProbe;

pub use unsupported::UnsupportedProbe;
