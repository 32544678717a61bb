//! Use Cases Layer: Native Library Loading
//!
//! Loads native (compiled, platform-specific) libraries into the running
//! process and answers the platform questions needed to pick the right ones.
//!
//! ## Overview
//!
//! Everything in this crate talks to the operating system through two small
//! capabilities, so it can be exercised without real native modules:
//!
//! - [`ModuleLoader`]: "load the module at this canonical path"
//! - [`OsNameSource`]: "what is the host OS identifier?"
//!
//! The real implementations live in `adapters_native_loader`.
//!
//! ## Modules
//!
//! - **[`native_loader`](native_loader/index.html)**: [`NativeLibraryLoader`],
//!   loading by logical name or by file path
//! - **[`module_loader`](module_loader/index.html)**: The [`ModuleLoader`]
//!   capability and the [`RecordingModuleLoader`] fake
//! - **[`platform_probe`](platform_probe/index.html)**: [`PlatformProbe`] OS
//!   family queries over an [`OsNameSource`]
//! - **[`error`](error/index.html)**: [`NativeLinkError`]
//! - **[`libs_layout`](libs_layout/index.html)**: Directory layout of the
//!   bundled libraries
//! - **[`load_plan`](load_plan/index.html)**: Ordered, staged loading of
//!   dependent libraries
//! - **[`audio_engine`](audio_engine/index.html)**: Load plans of the
//!   FluidSynth and PortAudio back ends
//!
//! ## Usage
//!
//! ```rust
//! use usecases_native_loading::{NativeLibraryLoader, NativeLinkError, RecordingModuleLoader};
//! use std::path::Path;
//!
//! let loader = NativeLibraryLoader::new(RecordingModuleLoader::new());
//! let result = loader.load_by_name(Path::new("/nonexistent"), "fluidsynthJNI");
//! assert!(matches!(result, Err(NativeLinkError::Resolve { .. })));
//! ```
//!
//! ## See Also
//!
//! - [`entities_platform`](../../entities/entities_platform/index.html): OS heuristics and naming
//! - [`adapters_native_loader`](../../adapters/adapters_native_loader/index.html): `libloading` backed loader

pub mod audio_engine;
pub mod error;
pub mod libs_layout;
pub mod load_plan;
pub mod module_loader;
pub mod native_loader;
pub mod platform_probe;

pub use audio_engine::{fluidsynth_plan, portaudio_plan, PlatformTarget, DEFAULT_AUDIO_DRIVER};
pub use error::{ModuleLoadError, NativeLinkError};
pub use libs_layout::{LibsLayout, DEFAULT_LIBS_DIR};
pub use load_plan::{FailurePolicy, LoadPlan, LoadReport, LoadStage, LoadTarget, SkippedStage};
pub use module_loader::{ModuleLoader, RecordingModuleLoader};
pub use native_loader::NativeLibraryLoader;
pub use platform_probe::{OsNameSource, PlatformProbe};
