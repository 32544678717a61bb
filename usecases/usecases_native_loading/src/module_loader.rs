//! Module Loader Capability
//!
//! The one operation native loading needs from the outside world: "load the
//! module at this canonical path into the process". Real implementations live
//! in the adapters layer; [`RecordingModuleLoader`] stands in for them in
//! tests.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::ModuleLoadError;

/// Capability to load a native module into the current process
///
/// Loading is process-global and irreversible. Implementations are not
/// required to tolerate a second load of the same module.
pub trait ModuleLoader {
    /// Load the module at `path`, which the caller has already canonicalized
    fn load_module(&self, path: &Path) -> Result<(), ModuleLoadError>;
}

impl<L: ModuleLoader + ?Sized> ModuleLoader for &L {
    fn load_module(&self, path: &Path) -> Result<(), ModuleLoadError> {
        (**self).load_module(path)
    }
}

impl<L: ModuleLoader + ?Sized> ModuleLoader for Box<L> {
    fn load_module(&self, path: &Path) -> Result<(), ModuleLoadError> {
        (**self).load_module(path)
    }
}

impl<L: ModuleLoader + ?Sized> ModuleLoader for Arc<L> {
    fn load_module(&self, path: &Path) -> Result<(), ModuleLoadError> {
        (**self).load_module(path)
    }
}

/// Fake loader that records every request instead of touching the OS
///
/// Requests whose file name was registered with [`reject_file_name`] fail
/// after being recorded.
///
/// [`reject_file_name`]: RecordingModuleLoader::reject_file_name
#[derive(Debug, Default)]
pub struct RecordingModuleLoader {
    requests: Mutex<Vec<PathBuf>>,
    rejected_file_names: HashSet<String>,
}

impl RecordingModuleLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every request for a file called `file_name` fail
    pub fn reject_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.rejected_file_names.insert(file_name.into());
        self
    }

    /// Paths requested so far, in order
    pub fn requests(&self) -> Vec<PathBuf> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// File names requested so far, in order
    pub fn requested_file_names(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect()
    }
}

impl ModuleLoader for RecordingModuleLoader {
    fn load_module(&self, path: &Path) -> Result<(), ModuleLoadError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_path_buf());

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.rejected_file_names.contains(&file_name) {
            return Err(format!("refused to load {}", path.display()).into());
        }
        Ok(())
    }
}
