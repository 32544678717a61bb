//! Native Runtime Module
//!
//! Wires configuration, platform probe and loader together and runs the audio
//! engine load plans at application startup.

use clap::ValueEnum;
use entities_platform::LibraryNaming;
use tracing::info;

use adapters_native_loader::SystemModuleLoader;
use usecases_native_loading::{
    fluidsynth_plan, portaudio_plan, LibsLayout, LoadPlan, LoadReport, ModuleLoader,
    NativeLibraryLoader, NativeLinkError, PlatformProbe, PlatformTarget,
};

use crate::config::{ConfiguredOsName, NativeConfig};

/// Audio back end whose native libraries can be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AudioEngine {
    /// FluidSynth software synthesizer
    Fluidsynth,
    /// PortAudio audio I/O
    Portaudio,
}

/// Startup state for native loading
#[derive(Debug)]
pub struct NativeRuntime<L = SystemModuleLoader> {
    config: NativeConfig,
    probe: PlatformProbe<ConfiguredOsName>,
    loader: NativeLibraryLoader<L>,
}

impl NativeRuntime<SystemModuleLoader> {
    /// Runtime over the real OS loader
    pub fn system(config: NativeConfig) -> Self {
        Self::with_module_loader(config, SystemModuleLoader::new())
    }
}

impl<L: ModuleLoader> NativeRuntime<L> {
    /// Runtime over an arbitrary module loader
    ///
    /// The naming convention follows the OS family seen at construction, so
    /// an OS name override also switches file names.
    pub fn with_module_loader(config: NativeConfig, module_loader: L) -> Self {
        let probe = PlatformProbe::new(config.os_name_source());
        let naming = LibraryNaming::for_family(probe.family());
        Self {
            config,
            probe,
            loader: NativeLibraryLoader::with_naming(module_loader, naming),
        }
    }

    pub fn config(&self) -> &NativeConfig {
        &self.config
    }

    pub fn probe(&self) -> &PlatformProbe<ConfiguredOsName> {
        &self.probe
    }

    pub fn loader(&self) -> &NativeLibraryLoader<L> {
        &self.loader
    }

    pub fn layout(&self) -> LibsLayout {
        LibsLayout::new(self.config.libs_dir.clone())
    }

    /// Platform the bundled libraries are chosen for
    pub fn platform(&self) -> PlatformTarget {
        PlatformTarget::new(self.probe.family(), self.config.data_model)
    }

    /// Load plan of an audio engine
    pub fn plan(&self, engine: AudioEngine) -> LoadPlan {
        match engine {
            AudioEngine::Fluidsynth => {
                fluidsynth_plan(&self.layout(), self.platform(), &self.config.audio_driver)
            }
            AudioEngine::Portaudio => portaudio_plan(&self.layout(), self.platform()),
        }
    }

    /// Load the native libraries of an audio engine
    ///
    /// # Errors
    ///
    /// Returns the [`NativeLinkError`] of the first required library that
    /// could not be loaded.
    pub fn load_engine(&self, engine: AudioEngine) -> Result<LoadReport, NativeLinkError> {
        let platform = self.platform();
        info!(
            engine = ?engine,
            os = %platform.family,
            "Running on {}bit system",
            platform.data_model.bits()
        );
        self.plan(engine).execute(&self.loader)
    }
}
