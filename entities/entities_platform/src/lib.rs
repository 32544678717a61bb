//! Entities Layer: Platform Identity
//!
//! Provides the pure, side-effect free platform data used when loading native
//! libraries: operating-system family heuristics, the process data model
//! (32 or 64 bit) and the platform's native library naming convention.
//!
//! ## Overview
//!
//! The `entities_platform` crate is the innermost layer of the native loading
//! workspace. Nothing in here reads global state except the explicitly named
//! `host()` constructors, which only consult compile-time constants. OS names
//! are always passed in as strings so the heuristics are trivially testable.
//!
//! ## Modules
//!
//! - **[`os_identity`](os_identity/index.html)**: Substring heuristics over an
//!   OS identifier string and the resulting [`OsFamily`]
//!
//! - **[`data_model`](data_model/index.html)**: Process pointer width
//!   ([`DataModel`])
//!
//! - **[`library_naming`](library_naming/index.html)**: Mapping of logical
//!   library names to platform file names ([`LibraryNaming`])
//!
//! ## Usage
//!
//! ```rust
//! use entities_platform::{is_windows_os_name, LibraryNaming, OsFamily};
//!
//! assert!(is_windows_os_name("Windows 10"));
//! let naming = LibraryNaming::for_family(OsFamily::Linux);
//! assert_eq!(naming.map_library_name("fluidsynthJNI"), "libfluidsynthJNI.so");
//! ```
//!
//! ## See Also
//!
//! - [`usecases_native_loading`](../../usecases/usecases_native_loading/index.html): Loader built on these types

pub mod data_model;
pub mod library_naming;
pub mod os_identity;

pub use data_model::{DataModel, DataModelParseError};
pub use library_naming::LibraryNaming;
pub use os_identity::{is_linux_os_name, is_mac_os_name, is_windows_os_name, OsFamily};
