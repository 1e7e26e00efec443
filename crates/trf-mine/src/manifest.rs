use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use trf_core::errors::ErrorInfo;
use trf_core::provenance::RunProvenance;
use trf_core::TrfError;

use crate::config::MineConfig;
use crate::kernel::RunSummary;

/// Structured manifest describing a completed mining run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    /// Configuration used for the run.
    pub config: MineConfig,
    /// Master seed used to derive the field substream.
    pub master_seed: u64,
    /// Optional seed label captured from the configuration.
    pub seed_label: Option<String>,
    /// Summary returned by the loop.
    pub summary: RunSummary,
    /// Records file written during the run, if any.
    pub records_file: Option<PathBuf>,
    /// Seed, substream and tool versions.
    pub provenance: RunProvenance,
}

impl RunManifest {
    /// Writes the manifest to a JSON file.
    pub fn write(&self, path: &Path) -> Result<(), TrfError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| {
                TrfError::Serde(
                    ErrorInfo::new("manifest-mkdir", err.to_string())
                        .with_context("path", parent.display()),
                )
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            TrfError::Serde(
                ErrorInfo::new("manifest-serialize", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        fs::write(path, json).map_err(|err| {
            TrfError::Serde(
                ErrorInfo::new("manifest-write", err.to_string())
                    .with_context("path", path.display()),
            )
        })
    }

    /// Loads a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, TrfError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            TrfError::Serde(
                ErrorInfo::new("manifest-read", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            TrfError::Serde(
                ErrorInfo::new("manifest-parse", err.to_string())
                    .with_context("path", path.display()),
            )
        })
    }
}
