//! Platform Probe
//!
//! Answers "which OS family are we on?" for callers choosing between
//! platform-specific resources. The OS identifier comes from an injected
//! [`OsNameSource`] and is re-read on every query; nothing is cached.

use entities_platform::{is_linux_os_name, is_mac_os_name, is_windows_os_name, OsFamily};

/// Supplier of the host operating-system identifier string
pub trait OsNameSource {
    fn os_name(&self) -> String;
}

impl OsNameSource for str {
    fn os_name(&self) -> String {
        self.to_string()
    }
}

impl OsNameSource for String {
    fn os_name(&self) -> String {
        self.clone()
    }
}

impl<S: OsNameSource + ?Sized> OsNameSource for &S {
    fn os_name(&self) -> String {
        (**self).os_name()
    }
}

impl<S: OsNameSource + ?Sized> OsNameSource for Box<S> {
    fn os_name(&self) -> String {
        (**self).os_name()
    }
}

/// OS family queries over an [`OsNameSource`]
#[derive(Debug, Clone)]
pub struct PlatformProbe<S> {
    source: S,
}

impl<S: OsNameSource> PlatformProbe<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Current OS identifier as reported by the source
    pub fn os_name(&self) -> String {
        self.source.os_name()
    }

    pub fn is_windows(&self) -> bool {
        is_windows_os_name(&self.source.os_name())
    }

    pub fn is_mac(&self) -> bool {
        is_mac_os_name(&self.source.os_name())
    }

    pub fn is_linux(&self) -> bool {
        is_linux_os_name(&self.source.os_name())
    }

    pub fn family(&self) -> OsFamily {
        OsFamily::from_os_name(&self.source.os_name())
    }
}
