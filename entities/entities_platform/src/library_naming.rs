//! Library Naming Module
//!
//! Maps a logical library name (a short, platform-neutral identifier such as
//! `fluidsynthJNI`) to the file name the platform uses for native modules.

use crate::os_identity::OsFamily;

/// Native library file naming convention: `prefix + name + suffix`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryNaming {
    prefix: &'static str,
    suffix: &'static str,
}

impl LibraryNaming {
    /// Convention of the platform this binary was built for
    pub fn host() -> Self {
        Self {
            prefix: std::env::consts::DLL_PREFIX,
            suffix: std::env::consts::DLL_SUFFIX,
        }
    }

    /// Convention of an OS family
    ///
    /// | Family | Prefix | Suffix |
    /// |--------|--------|--------|
    /// | Windows | *(none)* | `.dll` |
    /// | Mac | `lib` | `.dylib` |
    /// | Linux, Other | `lib` | `.so` |
    pub fn for_family(family: OsFamily) -> Self {
        match family {
            OsFamily::Windows => Self { prefix: "", suffix: ".dll" },
            OsFamily::Mac => Self { prefix: "lib", suffix: ".dylib" },
            OsFamily::Linux | OsFamily::Other => Self { prefix: "lib", suffix: ".so" },
        }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn suffix(&self) -> &'static str {
        self.suffix
    }

    /// Platform file name for a logical library name
    ///
    /// The name is used verbatim; no validation or case folding is applied.
    pub fn map_library_name(&self, logical_name: &str) -> String {
        format!("{}{}{}", self.prefix, logical_name, self.suffix)
    }
}

impl Default for LibraryNaming {
    fn default() -> Self {
        Self::host()
    }
}
