//! Runtime configuration, optionally read from a TOML file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_REPORT_FILE: &str = "DxDiag.txt";
pub const DEFAULT_AMD_TABLE: &str = "driverDecodeAMD.csv";
pub const DEFAULT_NVIDIA_TABLE: &str = "driverDecodeNvidia.csv";
pub const DEFAULT_AMD_UPDATE_URL: &str =
    "https://raw.githubusercontent.com/CrushBug/DXDiagParse/main/driverDecodeAMD.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub amd_table: PathBuf,
    pub nvidia_table: PathBuf,
    pub amd_update_url: String,
    /// Check the remote AMD table for a newer version before parsing.
    pub update_check: bool,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            amd_table: PathBuf::from(DEFAULT_AMD_TABLE),
            nvidia_table: PathBuf::from(DEFAULT_NVIDIA_TABLE),
            amd_update_url: DEFAULT_AMD_UPDATE_URL.to_string(),
            update_check: true,
            timeout_secs: 10,
        }
    }
}

impl Config {
    /// Load from `path`, or return the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
