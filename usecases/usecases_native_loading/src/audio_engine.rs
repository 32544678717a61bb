//! Audio Engine Load Plans
//!
//! The native libraries behind ScoreDate's two audio back ends and the order
//! they have to be loaded in.
//!
//! - **FluidSynth**: on Windows the GLib/intl runtime, the PortAudio driver
//!   DLL and FluidSynth itself are preloaded on a best-effort basis; the JNI
//!   bridge `fluidsynthJNI` is required everywhere. macOS libraries carry
//!   their install names, so nothing is preloaded there.
//! - **PortAudio**: on Windows the PortAudio DLL matching the data model is
//!   required before the `PortAudioJNI` bridge.

use entities_platform::{DataModel, OsFamily};

use crate::libs_layout::LibsLayout;
use crate::load_plan::{file_in, LoadPlan, LoadStage, LoadTarget};

/// Audio driver used when none is configured
pub const DEFAULT_AUDIO_DRIVER: &str = "portaudio";

/// Target platform of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformTarget {
    pub family: OsFamily,
    pub data_model: DataModel,
}

impl PlatformTarget {
    pub fn new(family: OsFamily, data_model: DataModel) -> Self {
        Self { family, data_model }
    }
}

fn portaudio_logical_name(data_model: DataModel) -> &'static str {
    match data_model {
        DataModel::Bits64 => "portaudio_x64",
        DataModel::Bits32 => "portaudio_x86",
    }
}

/// Plan loading the FluidSynth synthesizer and its JNI bridge
///
/// # Arguments
/// * `layout` - Where the bundled libraries live
/// * `platform` - OS family and data model to load for
/// * `driver` - Audio driver subdirectory holding the driver DLL (Windows only)
pub fn fluidsynth_plan(layout: &LibsLayout, platform: PlatformTarget, driver: &str) -> LoadPlan {
    let directory = layout.library_dir(platform.family, platform.data_model);
    let mut plan = LoadPlan::new("fluidsynth");

    if platform.family == OsFamily::Windows {
        let driver_dir = layout.driver_dir(platform.family, platform.data_model, driver);
        let driver_dll = format!("{}.dll", portaudio_logical_name(platform.data_model));
        plan = plan.stage(
            LoadStage::best_effort("fluidsynth dependencies")
                .target(file_in(&directory, "libintl-8.dll"))
                .target(file_in(&directory, "libglib-2.0-0.dll"))
                .target(file_in(&directory, "libgthread-2.0-0.dll"))
                .target(file_in(&driver_dir, &driver_dll))
                .target(file_in(&directory, "libfluidsynth.dll")),
        );
    }

    plan.stage(
        LoadStage::required("fluidsynth bridge")
            .target(LoadTarget::named(directory, "fluidsynthJNI")),
    )
}

/// Plan loading PortAudio and its JNI bridge
pub fn portaudio_plan(layout: &LibsLayout, platform: PlatformTarget) -> LoadPlan {
    let directory = layout.library_dir(platform.family, platform.data_model);
    let mut plan = LoadPlan::new("portaudio");

    if platform.family == OsFamily::Windows {
        plan = plan.stage(
            LoadStage::required("portaudio runtime").target(LoadTarget::named(
                directory.clone(),
                portaudio_logical_name(platform.data_model),
            )),
        );
    }

    plan.stage(
        LoadStage::required("portaudio bridge")
            .target(LoadTarget::named(directory, "PortAudioJNI")),
    )
}
