//! Adapters Layer: Native Loader
//!
//! Connects the native loading use cases to the real operating system.
//!
//! ## Overview
//!
//! The `adapters_native_loader` crate provides the production implementations
//! of the two capabilities defined in `usecases_native_loading`:
//!
//! - **[`SystemModuleLoader`]**: loads modules with `libloading` and keeps
//!   every handle alive for the lifetime of the process
//! - **[`SystemOsName`]**: reports the host OS identifier
//!
//! ## Usage
//!
//! ```rust,no_run
//! use adapters_native_loader::system_native_loader;
//! use std::path::Path;
//!
//! let loader = system_native_loader();
//! loader.load_by_name(Path::new("libs/linux"), "PortAudioJNI")?;
//! # Ok::<(), usecases_native_loading::NativeLinkError>(())
//! ```

pub mod host_os;
pub mod system_loader;

pub use host_os::{host_probe, SystemOsName};
pub use system_loader::SystemModuleLoader;

use usecases_native_loading::NativeLibraryLoader;

/// Native library loader over the OS loader, using the host naming convention
pub fn system_native_loader() -> NativeLibraryLoader<SystemModuleLoader> {
    NativeLibraryLoader::new(SystemModuleLoader::new())
}
