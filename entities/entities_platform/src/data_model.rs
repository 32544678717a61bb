//! Data Model Module
//!
//! The pointer width of the running process. Bundled native libraries exist
//! in separate 32-bit and 64-bit builds, so the loader needs to know which
//! one to pick.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Process data model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataModel {
    /// 32-bit process
    Bits32,
    /// 64-bit process
    Bits64,
}

/// Error returned when a data model string is neither `"32"` nor `"64"`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported data model {0:?}, expected \"32\" or \"64\"")]
pub struct DataModelParseError(pub String);

impl DataModel {
    /// Data model of the current process
    pub fn host() -> Self {
        if cfg!(target_pointer_width = "64") {
            DataModel::Bits64
        } else {
            DataModel::Bits32
        }
    }

    /// Number of bits, as reported in log output
    pub fn bits(self) -> u32 {
        match self {
            DataModel::Bits32 => 32,
            DataModel::Bits64 => 64,
        }
    }
}

impl FromStr for DataModel {
    type Err = DataModelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "32" => Ok(DataModel::Bits32),
            "64" => Ok(DataModel::Bits64),
            other => Err(DataModelParseError(other.to_string())),
        }
    }
}

impl fmt::Display for DataModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}
