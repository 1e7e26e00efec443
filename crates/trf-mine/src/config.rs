use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use trf_core::errors::{ErrorInfo, TrfError};
use trf_graph::ComplexityModel;

use crate::kernel::MineParams;

/// YAML-configurable parameters governing a mining run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MineConfig {
    /// Vertex count of the first field.
    #[serde(default = "default_initial_vertices")]
    pub initial_vertices: usize,
    /// Clique size searched for in every round.
    #[serde(default = "default_target_clique")]
    pub target_clique: usize,
    /// Optional number of rounds after which the run stops.
    #[serde(default)]
    pub max_rounds: Option<u64>,
    /// Complexity model applied to each field.
    #[serde(default)]
    pub complexity: ComplexityModel,
    /// Master seed and substream policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
    /// Delay inserted by the driver between rounds, in milliseconds.
    #[serde(default)]
    pub pacing_ms: u64,
    /// Output locations used by the driver.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_initial_vertices() -> usize {
    20
}

fn default_target_clique() -> usize {
    4
}

impl Default for MineConfig {
    fn default() -> Self {
        Self {
            initial_vertices: default_initial_vertices(),
            target_clique: default_target_clique(),
            max_rounds: None,
            complexity: ComplexityModel::default(),
            seed_policy: SeedPolicy::default(),
            pacing_ms: 0,
            output: OutputConfig::default(),
        }
    }
}

impl MineConfig {
    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TrfError> {
        serde_yaml::from_str(yaml)
            .map_err(|err| TrfError::Config(ErrorInfo::new("config-parse", err.to_string())))
    }

    /// Loads a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, TrfError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            TrfError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        Self::from_yaml_str(&contents).map_err(|err| err.with_context("path", path.display()))
    }

    /// Renders the configuration back to YAML.
    pub fn to_yaml(&self) -> Result<String, TrfError> {
        serde_yaml::to_string(self)
            .map_err(|err| TrfError::Serde(ErrorInfo::new("config-serialize", err.to_string())))
    }

    /// Core loop parameters, validated.
    pub fn params(&self) -> Result<MineParams, TrfError> {
        let params = MineParams {
            initial_vertices: self.initial_vertices,
            target_clique: self.target_clique,
            max_rounds: self.max_rounds,
            complexity: self.complexity,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed used for the run.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label recorded in manifests.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    0x05EE_D5EE_DD15_5EED_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}

/// Output file configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// JSON-lines file receiving result records. Stdout when unset.
    #[serde(default)]
    pub records_file: Option<PathBuf>,
    /// Manifest written when the run ends.
    #[serde(default)]
    pub manifest_file: Option<PathBuf>,
}
