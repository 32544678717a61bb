//! System Module Loader
//!
//! [`ModuleLoader`] implementation that loads modules with `libloading`
//! (`dlopen` on Unix, `LoadLibraryExW` on Windows).
//!
//! Every successfully opened [`Library`] handle is moved into a process-wide
//! registry and never dropped, so a loaded module stays mapped for the rest
//! of the process lifetime no matter how many `SystemModuleLoader` values are
//! created or dropped. There is no unload operation.

use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, PoisonError};

use libloading::Library;
use tracing::debug;
use usecases_native_loading::{ModuleLoadError, ModuleLoader};

/// Global registry of loaded modules, in load order
static LOADED_MODULES: LazyLock<Mutex<Vec<LoadedModule>>> = LazyLock::new(|| Mutex::new(Vec::new()));

#[derive(Debug)]
struct LoadedModule {
    path: PathBuf,
    _handle: Library,
}

/// Loads native modules into the current process through the OS loader
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemModuleLoader;

impl SystemModuleLoader {
    pub fn new() -> Self {
        SystemModuleLoader
    }

    /// Paths of every module loaded through any `SystemModuleLoader`, in load
    /// order. A module loaded twice appears twice.
    pub fn loaded_modules() -> Vec<PathBuf> {
        LOADED_MODULES
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|module| module.path.clone())
            .collect()
    }

    /// `true` if `path` was loaded through a `SystemModuleLoader`
    ///
    /// Compares paths as given; callers pass canonical paths.
    pub fn is_loaded(path: &Path) -> bool {
        LOADED_MODULES
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|module| module.path == path)
    }
}

impl ModuleLoader for SystemModuleLoader {
    fn load_module(&self, path: &Path) -> Result<(), ModuleLoadError> {
        // SAFETY: loading runs the module's initialisers. Only the bundled
        // libraries shipped with the application are passed here.
        let handle = unsafe { Library::new(path) }?;

        debug!(path = %path.display(), "Opened native module");
        LOADED_MODULES
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LoadedModule {
                path: path.to_path_buf(),
                _handle: handle,
            });
        Ok(())
    }
}
