//! OS Identity Module
//!
//! Heuristic classification of an operating-system identifier string.
//!
//! The checks lower-case the name and look for a substring. They are not
//! precise OS detectors: `"Darwin"` contains `"win"` and is therefore reported
//! as Windows. Callers depend on exactly this matching, so it must not be
//! tightened.

use std::fmt;

/// Returns `true` when the lower-cased OS name contains `"win"`.
///
/// # Examples
///
/// ```rust
/// use entities_platform::is_windows_os_name;
///
/// assert!(is_windows_os_name("Windows 10"));
/// assert!(!is_windows_os_name("Linux"));
/// ```
pub fn is_windows_os_name(os_name: &str) -> bool {
    os_name.to_lowercase().contains("win")
}

/// Returns `true` when the lower-cased OS name contains `"mac"`.
pub fn is_mac_os_name(os_name: &str) -> bool {
    os_name.to_lowercase().contains("mac")
}

/// Returns `true` when the lower-cased OS name contains `"nix"` or `"nux"`.
pub fn is_linux_os_name(os_name: &str) -> bool {
    let lower = os_name.to_lowercase();
    lower.contains("nix") || lower.contains("nux")
}

/// Operating-system family used to choose between platform-specific resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    /// Any name matched by [`is_windows_os_name`]
    Windows,
    /// Any name matched by [`is_mac_os_name`]
    Mac,
    /// Any name matched by [`is_linux_os_name`]
    Linux,
    /// None of the above
    Other,
}

impl OsFamily {
    /// Classify an OS name
    ///
    /// The checks run in the order Windows, Mac, Linux; the first match wins.
    pub fn from_os_name(os_name: &str) -> Self {
        if is_windows_os_name(os_name) {
            OsFamily::Windows
        } else if is_mac_os_name(os_name) {
            OsFamily::Mac
        } else if is_linux_os_name(os_name) {
            OsFamily::Linux
        } else {
            OsFamily::Other
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsFamily::Windows => "windows",
            OsFamily::Mac => "mac",
            OsFamily::Linux => "linux",
            OsFamily::Other => "other",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_names() {
        assert!(is_windows_os_name("Windows 10"));
        assert!(is_windows_os_name("WINDOWS XP"));
        assert!(is_windows_os_name("windows"));
        assert!(!is_windows_os_name("Linux"));
        assert!(!is_windows_os_name("Mac OS X"));
    }

    #[test]
    fn test_mac_names() {
        assert!(is_mac_os_name("Mac OS X"));
        assert!(is_mac_os_name("macos"));
        assert!(!is_mac_os_name("Windows 10"));
        assert!(!is_mac_os_name("Linux"));
    }

    #[test]
    fn test_linux_names() {
        assert!(is_linux_os_name("Linux"));
        assert!(is_linux_os_name("linux"));
        assert!(is_linux_os_name("Unix"));
        assert!(!is_linux_os_name("Windows 10"));
        assert!(!is_linux_os_name("Mac OS X"));
    }

    #[test]
    fn test_substring_heuristic_is_not_precise() {
        // "Darwin" contains "win"
        assert!(is_windows_os_name("Darwin"));
        assert_eq!(OsFamily::from_os_name("Darwin"), OsFamily::Windows);
        // "Machine OS" contains "mac"
        assert!(is_mac_os_name("Machine OS"));
    }

    #[test]
    fn test_empty_name() {
        assert!(!is_windows_os_name(""));
        assert!(!is_mac_os_name(""));
        assert!(!is_linux_os_name(""));
        assert_eq!(OsFamily::from_os_name(""), OsFamily::Other);
    }

    #[test]
    fn test_family_order() {
        assert_eq!(OsFamily::from_os_name("Windows 10"), OsFamily::Windows);
        assert_eq!(OsFamily::from_os_name("Mac OS X"), OsFamily::Mac);
        assert_eq!(OsFamily::from_os_name("Linux"), OsFamily::Linux);
        assert_eq!(OsFamily::from_os_name("FreeBSD"), OsFamily::Other);
        assert_eq!(OsFamily::from_os_name("SunOS"), OsFamily::Other);
    }

    #[test]
    fn test_family_display() {
        assert_eq!(OsFamily::Windows.to_string(), "windows");
        assert_eq!(OsFamily::Other.to_string(), "other");
    }
}
