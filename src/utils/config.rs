//! Configuration and constants for the CLI.
//!
//! The run-wide lookup tables (device addresses, iteration count, folder
//! layout) live in [`RunConfig`], which is loaded once and passed by
//! reference into every pipeline unit.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Token inserted before the iteration number in overlay trace file names
pub const OVERLAY_FILE_TOKEN: &str = "tor";

/// Extension of capture exports
pub const TRACE_EXTENSION: &str = "csv";

/// Field separator of capture exports
pub const TRACE_DELIMITER: u8 = b'\t';

// Column names after dot normalization ("frame.len" -> "frame_len")
pub const FRAME_LEN_COLUMN: &str = "frame_len";
pub const FRAME_NUMBER_COLUMN: &str = "frame_number";
pub const IP_SRC_COLUMN: &str = "ip_src";
pub const IP_DST_COLUMN: &str = "ip_dst";

// Capture tools name the relative time column differently
pub const TIME_COLUMN_NAMES: &[&str] = &["_ws_col_Time", "frame_time_relative", "time"];

/// Run-wide settings for a `compare` batch
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunConfig {
    /// Folder holding one sub-folder of traces per app
    pub traces_dir: PathBuf,

    /// Folder holding one sub-folder of action scripts per app
    pub scripts_dir: PathBuf,

    /// Where feature reports are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Iterations performed per action and condition
    pub iterations: usize,

    /// Local device address per app, used for direction filtering
    pub devices: BTreeMap<String, String>,

    /// Restrict the batch to these feature names (all when absent)
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("Reports")
}

impl RunConfig {
    /// Load and validate a run config from a TOML file
    ///
    /// # Errors
    /// * `ConfigError::Io` - If file cannot be read
    /// * `ConfigError::Parse` - If TOML is invalid
    /// * `ConfigError::Invalid` - If values fail validation
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: RunConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that TOML typing alone cannot enforce
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::Invalid(
                "iterations must be greater than 0".to_string(),
            ));
        }

        if self.devices.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one device address is required".to_string(),
            ));
        }

        for (app, addr) in &self.devices {
            addr.parse::<IpAddr>().map_err(|e| {
                ConfigError::Invalid(format!("device address for '{}' ({}): {}", app, addr, e))
            })?;
        }

        Ok(())
    }

    /// Local device address for an app
    pub fn device_ip(&self, app: &str) -> Option<&str> {
        self.devices.get(app).map(String::as_str)
    }
}
