//! Frameworks Layer: Native Initialization
//!
//! Loads ScoreDate's native libraries at startup.
//!
//! ## Overview
//!
//! The `frameworks_native_init` crate is the outermost layer of the native
//! loading workspace. It reads the configuration, builds the platform probe
//! and the `libloading` backed loader, and runs the load plans of the audio
//! engines in the right order.
//!
//! ## Modules
//!
//! - **[`config`](config/index.html)**: Environment configuration
//!   ([`NativeConfig`])
//!
//! - **[`runtime`](runtime/index.html)**: Startup wiring ([`NativeRuntime`])
//!
//! - **[`args`](args/index.html)**: Arguments of the `native-probe` binary
//!
//! ## Startup Sequence
//!
//! 1. Read [`NativeConfig`] from the environment
//! 2. Build a [`NativeRuntime`] over the system loader
//! 3. Load the PortAudio and/or FluidSynth libraries; a failure leaves the
//!    caller to decide whether to continue without that audio engine

pub mod args;
pub mod config;
pub mod runtime;

pub use config::{ConfigError, ConfiguredOsName, NativeConfig};
pub use runtime::{AudioEngine, NativeRuntime};

use std::error::Error;

/// Render an error and all of its causes, one per line
pub fn error_chain(error: &(dyn Error + 'static)) -> String {
    let mut rendered = error.to_string();
    let mut cause = error.source();
    while let Some(inner) = cause {
        rendered.push_str("\n  caused by: ");
        rendered.push_str(&inner.to_string());
        cause = inner.source();
    }
    rendered
}
