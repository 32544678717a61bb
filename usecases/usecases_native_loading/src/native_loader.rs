//! Native Library Loader Module
//!
//! Loads native modules into the current process, either from a direct file
//! path or from a directory plus a logical library name.
//!
//! ## Loading Flow
//!
//! 1. `load_by_name(dir, name)` maps `name` to the platform file name
//!    (`libname.so`, `libname.dylib`, `name.dll`) and joins it onto `dir`
//! 2. `load_by_path(path)` canonicalizes the path; an I/O failure here is
//!    reported as [`NativeLinkError::Resolve`]
//! 3. The canonical path is handed to the [`ModuleLoader`]; a refusal is
//!    reported as [`NativeLinkError::Rejected`]
//!
//! Loading is process-global and cannot be undone. Callers must serialize
//! loads of the same module and load each module at most once; the loader
//! itself does no locking or bookkeeping.

use std::fs;
use std::path::{Path, PathBuf};

use entities_platform::LibraryNaming;
use tracing::{debug, info};

use crate::error::NativeLinkError;
use crate::module_loader::ModuleLoader;

/// Loads native libraries through a [`ModuleLoader`]
#[derive(Debug, Clone)]
pub struct NativeLibraryLoader<L> {
    module_loader: L,
    naming: LibraryNaming,
}

impl<L: ModuleLoader> NativeLibraryLoader<L> {
    /// Create a loader using the host's library naming convention
    pub fn new(module_loader: L) -> Self {
        Self::with_naming(module_loader, LibraryNaming::host())
    }

    /// Create a loader using an explicit naming convention
    pub fn with_naming(module_loader: L, naming: LibraryNaming) -> Self {
        Self {
            module_loader,
            naming,
        }
    }

    pub fn naming(&self) -> LibraryNaming {
        self.naming
    }

    pub fn module_loader(&self) -> &L {
        &self.module_loader
    }

    /// File that `load_by_name(directory, logical_name)` would load
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_platform::{LibraryNaming, OsFamily};
    /// use usecases_native_loading::{NativeLibraryLoader, RecordingModuleLoader};
    /// use std::path::{Path, PathBuf};
    ///
    /// let loader = NativeLibraryLoader::with_naming(
    ///     RecordingModuleLoader::new(),
    ///     LibraryNaming::for_family(OsFamily::Windows),
    /// );
    /// assert_eq!(
    ///     loader.resolve_library_file(Path::new("libs/win64"), "fluidsynthJNI"),
    ///     PathBuf::from("libs/win64/fluidsynthJNI.dll"),
    /// );
    /// ```
    pub fn resolve_library_file(&self, directory: &Path, logical_name: &str) -> PathBuf {
        directory.join(self.naming.map_library_name(logical_name))
    }

    /// Load a library by logical name from a directory
    ///
    /// # Arguments
    /// * `directory` - Directory the library is located in
    /// * `logical_name` - Platform-neutral library name, e.g. `fluidsynthJNI`
    ///
    /// # Errors
    ///
    /// Returns [`NativeLinkError`] if the mapped file does not exist, cannot
    /// be read, or is rejected by the platform loader.
    pub fn load_by_name(&self, directory: &Path, logical_name: &str) -> Result<(), NativeLinkError> {
        let file = self.resolve_library_file(directory, logical_name);
        debug!(
            logical_name,
            file = %file.display(),
            "Mapped logical library name"
        );
        self.load_by_path(&file)
    }

    /// Load a library from a file
    ///
    /// # Errors
    ///
    /// Returns [`NativeLinkError::Resolve`] (with the `io::Error` as cause) if
    /// the path cannot be canonicalized, or [`NativeLinkError::Rejected`] if
    /// the module loader refuses the canonical path.
    pub fn load_by_path(&self, file: &Path) -> Result<(), NativeLinkError> {
        let canonical = fs::canonicalize(file).map_err(|source| NativeLinkError::Resolve {
            path: file.to_path_buf(),
            source,
        })?;

        self.module_loader
            .load_module(&canonical)
            .map_err(|source| NativeLinkError::Rejected {
                path: canonical.clone(),
                source,
            })?;

        info!(path = %canonical.display(), "Loaded native library");
        Ok(())
    }
}
