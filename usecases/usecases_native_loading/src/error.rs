//! Native link error
//!
//! The single failure kind of native loading. Every variant keeps the
//! underlying cause so callers can report why a module could not be linked.

use std::error::Error as StdError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error produced by a [`ModuleLoader`](crate::ModuleLoader) implementation
pub type ModuleLoadError = Box<dyn StdError + Send + Sync + 'static>;

/// A native module could not be found, read, or linked into the process
#[derive(Debug, Error)]
pub enum NativeLinkError {
    /// The path could not be canonicalized (missing file, unreadable parent, ...)
    #[error("cannot resolve native library path {}", .path.display())]
    Resolve {
        /// Path as supplied by the caller
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The platform loader refused the module (wrong architecture, corrupt
    /// binary, unmet dependencies, ...)
    #[error("native library {} could not be loaded", .path.display())]
    Rejected {
        /// Canonical path handed to the loader
        path: PathBuf,
        #[source]
        source: ModuleLoadError,
    },
}

impl NativeLinkError {
    /// Path the failure refers to
    pub fn path(&self) -> &Path {
        match self {
            NativeLinkError::Resolve { path, .. } => path,
            NativeLinkError::Rejected { path, .. } => path,
        }
    }

    /// The underlying cause. Always present.
    pub fn underlying(&self) -> &(dyn StdError + 'static) {
        match self {
            NativeLinkError::Resolve { source, .. } => source,
            NativeLinkError::Rejected { source, .. } => &**source,
        }
    }

    /// `true` when canonicalization failed because the file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NativeLinkError::Resolve { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}
