//! Host OS identifier
//!
//! Reports the operating system this binary runs on as a plain identifier
//! string (`"windows"`, `"macos"`, `"linux"`, `"freebsd"`, ...). The string is
//! only ever consumed through the substring heuristics of
//! `entities_platform`.

use usecases_native_loading::{OsNameSource, PlatformProbe};

/// [`OsNameSource`] backed by the host operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOsName;

impl OsNameSource for SystemOsName {
    fn os_name(&self) -> String {
        std::env::consts::OS.to_string()
    }
}

/// Platform probe over the host operating system
pub fn host_probe() -> PlatformProbe<SystemOsName> {
    PlatformProbe::new(SystemOsName)
}
