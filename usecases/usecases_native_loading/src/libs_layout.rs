//! Bundled Libraries Layout
//!
//! ScoreDate ships its native libraries next to the application:
//!
//! ```text
//! libs/
//! ├── win32/            32-bit Windows libraries
//! │   └── <driver>/     audio driver specific DLLs
//! ├── win64/            64-bit Windows libraries
//! │   └── <driver>/
//! └── linux/            Linux libraries
//! ```
//!
//! macOS (and any unrecognised family) has no platform directory; libraries
//! there are looked up relative to the working directory and their own
//! install names.

use std::path::{Path, PathBuf};

use entities_platform::{DataModel, OsFamily};

/// Default root of the bundled libraries, relative to the working directory
pub const DEFAULT_LIBS_DIR: &str = "libs";

const WIN32_DIR: &str = "win32";
const WIN64_DIR: &str = "win64";
const LINUX_DIR: &str = "linux";

/// Location of bundled native libraries for each platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibsLayout {
    root: PathBuf,
}

impl LibsLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Platform directory, or `None` when the platform has none
    pub fn platform_dir(&self, family: OsFamily, data_model: DataModel) -> Option<PathBuf> {
        match (family, data_model) {
            (OsFamily::Windows, DataModel::Bits64) => Some(self.root.join(WIN64_DIR)),
            (OsFamily::Windows, DataModel::Bits32) => Some(self.root.join(WIN32_DIR)),
            (OsFamily::Linux, _) => Some(self.root.join(LINUX_DIR)),
            (OsFamily::Mac, _) | (OsFamily::Other, _) => None,
        }
    }

    /// Directory to join library file names onto
    ///
    /// Empty (i.e. the working directory) when there is no platform directory.
    pub fn library_dir(&self, family: OsFamily, data_model: DataModel) -> PathBuf {
        self.platform_dir(family, data_model).unwrap_or_default()
    }

    /// Directory holding the libraries of one audio driver
    pub fn driver_dir(&self, family: OsFamily, data_model: DataModel, driver: &str) -> PathBuf {
        self.library_dir(family, data_model).join(driver)
    }
}

impl Default for LibsLayout {
    fn default() -> Self {
        Self::new(DEFAULT_LIBS_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_dirs_follow_data_model() {
        let layout = LibsLayout::default();
        assert_eq!(
            layout.platform_dir(OsFamily::Windows, DataModel::Bits64),
            Some(PathBuf::from("libs").join("win64"))
        );
        assert_eq!(
            layout.platform_dir(OsFamily::Windows, DataModel::Bits32),
            Some(PathBuf::from("libs").join("win32"))
        );
    }

    #[test]
    fn test_linux_dir_ignores_data_model() {
        let layout = LibsLayout::new("/opt/scoredate/libs");
        let expected = Some(PathBuf::from("/opt/scoredate/libs/linux"));
        assert_eq!(layout.platform_dir(OsFamily::Linux, DataModel::Bits32), expected);
        assert_eq!(layout.platform_dir(OsFamily::Linux, DataModel::Bits64), expected);
    }

    #[test]
    fn test_mac_has_no_platform_dir() {
        let layout = LibsLayout::default();
        assert_eq!(layout.platform_dir(OsFamily::Mac, DataModel::Bits64), None);
        assert_eq!(layout.platform_dir(OsFamily::Other, DataModel::Bits64), None);
        assert_eq!(layout.library_dir(OsFamily::Mac, DataModel::Bits64), PathBuf::new());
        assert_eq!(
            layout.library_dir(OsFamily::Mac, DataModel::Bits64).join("libfoo.dylib"),
            PathBuf::from("libfoo.dylib")
        );
    }

    #[test]
    fn test_driver_dir() {
        let layout = LibsLayout::new("libs");
        assert_eq!(
            layout.driver_dir(OsFamily::Windows, DataModel::Bits64, "portaudio"),
            PathBuf::from("libs").join("win64").join("portaudio")
        );
    }

    #[test]
    fn test_root() {
        assert_eq!(LibsLayout::default().root(), Path::new(DEFAULT_LIBS_DIR));
    }
}
