//! Registry selecting the memory probe for the current platform.

use crate::providers::UnsupportedProbe;
use crate::traits::MemoryProbe;

#[cfg(all(
    any(target_os = "linux", target_os = "android"),
    not(all(target_arch = "x86_64", target_pointer_width = "32"))
))]
use crate::providers::SysconfProbe;

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "openbsd"
))]
use crate::providers::SysctlProbe;

/// Probe registry for detecting the current platform and creating probes.
pub struct ProbeRegistry;

impl ProbeRegistry {
    /// Get the memory probe for the current operating system.
    ///
    /// The choice is made at compile time; platforms without a supported
    /// mechanism get [`UnsupportedProbe`], which always reports "unknown".
    pub fn current() -> Box<dyn MemoryProbe> {
        sysconf_probe()
            .or_else(sysctl_probe)
            .unwrap_or_else(|| Box::new(UnsupportedProbe))
    }

    /// Get a probe by name.
    ///
    /// Returns `None` for names that are unknown or not compiled in on this
    /// platform.
    pub fn for_name(name: &str) -> Option<Box<dyn MemoryProbe>> {
        match name.to_lowercase().as_str() {
            "sysconf" => sysconf_probe(),
            "sysctl" => sysctl_probe(),
            "unsupported" => Some(Box::new(UnsupportedProbe)),
            _ => None,
        }
    }

    /// Name of the probe [`current`](Self::current) returns.
    pub fn current_probe_name() -> &'static str {
        Self::current().name()
    }

    /// Check if a probe is available by name.
    pub fn is_probe_supported(name: &str) -> bool {
        Self::for_name(name).is_some()
    }

    /// List all probe names usable with `for_name()` on this platform.
    pub fn supported_probes() -> Vec<&'static str> {
        let unsupported: Box<dyn MemoryProbe> = Box::new(UnsupportedProbe);
        [sysconf_probe(), sysctl_probe(), Some(unsupported)]
            .into_iter()
            .flatten()
            .map(|probe| probe.name())
            .collect()
    }
}

#[cfg(all(
    any(target_os = "linux", target_os = "android"),
    not(all(target_arch = "x86_64", target_pointer_width = "32"))
))]
fn sysconf_probe() -> Option<Box<dyn MemoryProbe>> {
    Some(Box::new(SysconfProbe))
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "android"),
    not(all(target_arch = "x86_64", target_pointer_width = "32"))
)))]
fn sysconf_probe() -> Option<Box<dyn MemoryProbe>> {
    None
}

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "openbsd"
))]
fn sysctl_probe() -> Option<Box<dyn MemoryProbe>> {
    Some(Box::new(SysctlProbe))
}

#[cfg(not(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "openbsd"
)))]
fn sysctl_probe() -> Option<Box<dyn MemoryProbe>> {
    None
}
