use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::params::TrainParams;
use crate::error::Result;
use crate::types::Phase;

pub const MANIFEST_NAME: &str = "run.json";

/// JSON sidecar written into each save directory: the resolved parameters,
/// the exact commands issued, and per-phase exit codes. The file is
/// rewritten after every phase so a crashed run still leaves a usable
/// record of how far it got.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub created: DateTime<Utc>,
    pub save: String,
    pub params: TrainParams,
    pub commands: Vec<String>,
    pub phases: Vec<PhaseRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseRecord {
    pub phase: Phase,
    /// Process exit code; `None` when the trainer was killed by a signal
    pub exit_code: Option<i32>,
    pub finished: DateTime<Utc>,
}

impl RunManifest {
    pub fn new(save: String, params: TrainParams, commands: Vec<String>) -> Self {
        Self {
            created: Utc::now(),
            save,
            params,
            commands,
            phases: Vec::new(),
        }
    }

    pub fn record(&mut self, phase: Phase, exit_code: Option<i32>) {
        self.phases.push(PhaseRecord {
            phase,
            exit_code,
            finished: Utc::now(),
        });
    }

    pub fn write(&self, save_dir: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(crate::error::Error::external)?;
        std::fs::write(save_dir.join(MANIFEST_NAME), json)?;
        Ok(())
    }

    pub fn read(save_dir: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(manifest_path(save_dir))?;
        serde_json::from_str(&raw).map_err(crate::error::Error::external)
    }
}

pub fn manifest_path(save_dir: &Path) -> PathBuf {
    save_dir.join(MANIFEST_NAME)
}
