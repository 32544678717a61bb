//! Command-Line Argument Parsing Module
//!
//! Arguments of the `native-probe` binary. Uses clap for type-safe argument
//! parsing; global flags override the environment configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{parse_data_model, ConfigError, NativeConfig};
use crate::runtime::AudioEngine;

/// native-probe command-line arguments
#[derive(Parser, Debug)]
#[command(name = "native-probe")]
#[command(about = "Inspect the platform and load ScoreDate native libraries")]
pub struct ProbeArgs {
    /// Root of the bundled native libraries
    #[arg(long, global = true)]
    pub libs_dir: Option<PathBuf>,

    /// OS identifier to use instead of the host's (e.g. "Windows 10")
    #[arg(long, global = true)]
    pub os_name: Option<String>,

    /// Data model of the bundled libraries: 32 or 64
    #[arg(long, global = true)]
    pub data_model: Option<String>,

    #[command(subcommand)]
    pub command: ProbeCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ProbeCommand {
    /// Print the platform identity
    Platform {
        /// Also print the file name this logical library name maps to
        #[arg(long)]
        name: Option<String>,
    },
    /// Load a single native library
    Load {
        /// Library file to load
        #[arg(long, conflicts_with_all = ["dir", "name"], required_unless_present = "name")]
        path: Option<PathBuf>,

        /// Directory holding the library
        #[arg(long, requires = "name")]
        dir: Option<PathBuf>,

        /// Logical library name
        #[arg(long, requires = "dir")]
        name: Option<String>,
    },
    /// Load the native libraries of an audio engine
    Engine {
        #[arg(value_enum)]
        engine: AudioEngine,

        /// FluidSynth audio driver subdirectory
        #[arg(long)]
        driver: Option<String>,
    },
}

impl ProbeArgs {
    /// Apply command-line overrides on top of an environment configuration
    pub fn apply_overrides(&self, config: &mut NativeConfig) -> Result<(), ConfigError> {
        if let Some(dir) = &self.libs_dir {
            config.libs_dir = dir.clone();
        }
        if let Some(name) = &self.os_name {
            config.os_name_override = Some(name.clone());
        }
        if let Some(model) = &self.data_model {
            config.data_model = parse_data_model("--data-model", model)?;
        }
        if let ProbeCommand::Engine {
            driver: Some(driver),
            ..
        } = &self.command
        {
            config.audio_driver = driver.clone();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_platform::DataModel;

    #[test]
    fn test_parse_platform() {
        let args = ProbeArgs::try_parse_from(["native-probe", "platform", "--name", "fluidsynthJNI"]).unwrap();
        assert_eq!(
            args.command,
            ProbeCommand::Platform {
                name: Some("fluidsynthJNI".to_string())
            }
        );
    }

    #[test]
    fn test_parse_load_by_path() {
        let args = ProbeArgs::try_parse_from(["native-probe", "load", "--path", "libs/linux/libx.so"]).unwrap();
        assert_eq!(
            args.command,
            ProbeCommand::Load {
                path: Some(PathBuf::from("libs/linux/libx.so")),
                dir: None,
                name: None,
            }
        );
    }

    #[test]
    fn test_parse_load_by_name() {
        let args =
            ProbeArgs::try_parse_from(["native-probe", "load", "--dir", "libs/linux", "--name", "PortAudioJNI"]).unwrap();
        assert!(matches!(args.command, ProbeCommand::Load { path: None, .. }));
    }

    #[test]
    fn test_load_requires_a_target() {
        assert!(ProbeArgs::try_parse_from(["native-probe", "load"]).is_err());
        assert!(ProbeArgs::try_parse_from(["native-probe", "load", "--dir", "libs"]).is_err());
        assert!(ProbeArgs::try_parse_from(["native-probe", "load", "--path", "a", "--name", "b", "--dir", "c"]).is_err());
    }

    #[test]
    fn test_overrides() {
        let args = ProbeArgs::try_parse_from([
            "native-probe",
            "engine",
            "fluidsynth",
            "--driver",
            "dsound",
            "--os-name",
            "Windows 10",
            "--data-model",
            "32",
            "--libs-dir",
            "/opt/libs",
        ])
        .unwrap();

        let mut config = NativeConfig::default();
        args.apply_overrides(&mut config).unwrap();

        assert_eq!(config.audio_driver, "dsound");
        assert_eq!(config.os_name_override.as_deref(), Some("Windows 10"));
        assert_eq!(config.data_model, DataModel::Bits32);
        assert_eq!(config.libs_dir, PathBuf::from("/opt/libs"));
    }

    #[test]
    fn test_invalid_data_model_override() {
        let args = ProbeArgs::try_parse_from(["native-probe", "platform", "--data-model", "16"]).unwrap();
        let mut config = NativeConfig::default();
        assert!(args.apply_overrides(&mut config).is_err());
    }
}
