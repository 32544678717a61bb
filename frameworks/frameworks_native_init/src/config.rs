//! Native Configuration Module
//!
//! Reads the native loading settings from the environment.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `SCOREDATE_LIBS_DIR` | root of the bundled native libraries | `libs` |
//! | `SCOREDATE_OS_NAME` | override of the host OS identifier | host value |
//! | `SCOREDATE_DATA_MODEL` | `32` or `64` | host pointer width |
//! | `SCOREDATE_AUDIO_DRIVER` | FluidSynth driver subdirectory | `portaudio` |
//!
//! Empty values count as unset.

use std::env;
use std::path::PathBuf;

use adapters_native_loader::SystemOsName;
use entities_platform::{DataModel, DataModelParseError};
use thiserror::Error;
use usecases_native_loading::{OsNameSource, DEFAULT_AUDIO_DRIVER, DEFAULT_LIBS_DIR};

pub const LIBS_DIR_VAR: &str = "SCOREDATE_LIBS_DIR";
pub const OS_NAME_VAR: &str = "SCOREDATE_OS_NAME";
pub const DATA_MODEL_VAR: &str = "SCOREDATE_DATA_MODEL";
pub const AUDIO_DRIVER_VAR: &str = "SCOREDATE_AUDIO_DRIVER";

/// Invalid native loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}")]
    InvalidDataModel {
        var: &'static str,
        #[source]
        source: DataModelParseError,
    },
}

/// Native loading settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeConfig {
    /// Root of the bundled libraries
    pub libs_dir: PathBuf,
    /// OS identifier to use instead of the host's
    pub os_name_override: Option<String>,
    /// Data model the bundled libraries are chosen for
    pub data_model: DataModel,
    /// FluidSynth audio driver subdirectory
    pub audio_driver: String,
}

impl Default for NativeConfig {
    fn default() -> Self {
        Self {
            libs_dir: PathBuf::from(DEFAULT_LIBS_DIR),
            os_name_override: None,
            data_model: DataModel::host(),
            audio_driver: DEFAULT_AUDIO_DRIVER.to_string(),
        }
    }
}

impl NativeConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frameworks_native_init::NativeConfig;
    /// use std::path::PathBuf;
    ///
    /// let config = NativeConfig::from_lookup(|key| match key {
    ///     "SCOREDATE_LIBS_DIR" => Some("/opt/scoredate/libs".to_string()),
    ///     _ => None,
    /// })?;
    /// assert_eq!(config.libs_dir, PathBuf::from("/opt/scoredate/libs"));
    /// # Ok::<(), frameworks_native_init::ConfigError>(())
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = lookup(LIBS_DIR_VAR) {
            config.libs_dir = PathBuf::from(dir);
        }
        config.os_name_override = lookup(OS_NAME_VAR);
        if let Some(model) = lookup(DATA_MODEL_VAR) {
            config.data_model = parse_data_model(DATA_MODEL_VAR, &model)?;
        }
        if let Some(driver) = lookup(AUDIO_DRIVER_VAR) {
            config.audio_driver = driver;
        }

        Ok(config)
    }

    /// OS name source honouring the override
    pub fn os_name_source(&self) -> ConfiguredOsName {
        ConfiguredOsName {
            override_name: self.os_name_override.clone(),
        }
    }
}

/// Parse a data model value, naming its origin in the error
pub fn parse_data_model(origin: &'static str, value: &str) -> Result<DataModel, ConfigError> {
    value
        .parse()
        .map_err(|source| ConfigError::InvalidDataModel { var: origin, source })
}

/// [`OsNameSource`] returning the configured override, else the host name
#[derive(Debug, Clone, Default)]
pub struct ConfiguredOsName {
    override_name: Option<String>,
}

impl OsNameSource for ConfiguredOsName {
    fn os_name(&self) -> String {
        match &self.override_name {
            Some(name) => name.clone(),
            None => SystemOsName.os_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::error::Error;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = NativeConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, NativeConfig::default());
        assert_eq!(config.libs_dir, PathBuf::from("libs"));
        assert_eq!(config.audio_driver, "portaudio");
        assert_eq!(config.data_model, DataModel::host());
        assert!(config.os_name_override.is_none());
    }

    #[test]
    fn test_all_variables() {
        let config = NativeConfig::from_lookup(lookup_from(&[
            (LIBS_DIR_VAR, "/opt/libs"),
            (OS_NAME_VAR, "Windows 10"),
            (DATA_MODEL_VAR, "32"),
            (AUDIO_DRIVER_VAR, "dsound"),
        ]))
        .unwrap();

        assert_eq!(config.libs_dir, PathBuf::from("/opt/libs"));
        assert_eq!(config.os_name_override.as_deref(), Some("Windows 10"));
        assert_eq!(config.data_model, DataModel::Bits32);
        assert_eq!(config.audio_driver, "dsound");
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = NativeConfig::from_lookup(lookup_from(&[
            (LIBS_DIR_VAR, ""),
            (OS_NAME_VAR, "  "),
            (DATA_MODEL_VAR, ""),
        ]))
        .unwrap();
        assert_eq!(config, NativeConfig::default());
    }

    #[test]
    fn test_invalid_data_model() {
        let err = NativeConfig::from_lookup(lookup_from(&[(DATA_MODEL_VAR, "amd64")])).unwrap_err();
        assert!(err.to_string().contains(DATA_MODEL_VAR));
        assert!(err.source().unwrap().to_string().contains("amd64"));
    }

    #[test]
    fn test_os_name_override() {
        let config = NativeConfig {
            os_name_override: Some("Mac OS X".to_string()),
            ..NativeConfig::default()
        };
        assert_eq!(config.os_name_source().os_name(), "Mac OS X");
    }

    #[test]
    fn test_os_name_falls_back_to_host() {
        let source = NativeConfig::default().os_name_source();
        assert_eq!(source.os_name(), SystemOsName.os_name());
    }
}
