//! Portal configuration
//!
//! Read from a JSON file; every field is optional and falls back to the
//! calculator form defaults.

use crate::error::Result;
use crate::projection::CalculatorConfig;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Default config file looked up by the CLI
pub const DEFAULT_CONFIG_PATH: &str = "agent_portal.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub calculator: CalculatorConfig,

    /// Customer table loaded at startup
    pub customers_csv: Option<PathBuf>,

    /// JSON snapshot of the whole store, loaded at startup if present
    pub snapshot_path: Option<PathBuf>,
}

impl PortalConfig {
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load `path` if it exists, otherwise defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_json_path(path)
        } else {
            Ok(Self::default())
        }
    }
}
