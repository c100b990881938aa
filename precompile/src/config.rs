use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use smartdefi_common::{config::ASSET_BACKING_PRECOMPILE_ADDRESS, crypto::Address};

use crate::asset_backing::GasSchedule;

/// Runtime settings of the asset-backing precompile
///
/// Missing fields fall back to the chain constants, so an empty JSON object
/// is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetBackingConfig {
    /// Account holding the locked native coin of every pool
    pub custodial_address: Address,
    pub gas: GasSchedule,
}

impl Default for AssetBackingConfig {
    fn default() -> Self {
        Self {
            custodial_address: ASSET_BACKING_PRECOMPILE_ADDRESS,
            gas: GasSchedule::default(),
        }
    }
}

impl AssetBackingConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse asset backing config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}
