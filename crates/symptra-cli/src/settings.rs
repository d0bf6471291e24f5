//! Where the CLI finds its model and reference tables.
//!
//! Precedence: command-line flags (or their `SYMPTRA_*` env vars), then the
//! TOML config file, then built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use symptra_deploy::Deployment;
use symptra_tables::TableFiles;

pub const DEFAULT_DATA_DIR: &str = "datasets";
pub const DEFAULT_MODEL: &str = "svc.json";

/// Shape of the optional TOML config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
  pub data_dir: Option<PathBuf>,
  /// Also accepted as `model_path`, so the server's file can be shared.
  #[serde(alias = "model_path")]
  pub model:    Option<PathBuf>,
  pub tables:   TableFiles,
}

impl ConfigFile {
  pub fn read(path: &Path) -> Result<Self> {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    Self::parse(&raw)
  }

  pub fn parse(raw: &str) -> Result<Self> {
    toml::from_str(raw).context("parsing config file")
  }
}

/// Resolve the deployment to load from flags and the config file.
pub fn resolve(
  file: ConfigFile,
  data_dir: Option<PathBuf>,
  model: Option<PathBuf>,
) -> Deployment {
  Deployment {
    data_dir: data_dir
      .or(file.data_dir)
      .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
    model:    model
      .or(file.model)
      .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL)),
    tables:   file.tables,
  }
}
