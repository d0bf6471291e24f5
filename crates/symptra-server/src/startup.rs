//! One-time startup load.
//!
//! Resolves `~` in the configured paths, loads the deployment before the
//! listener is bound, and warns about classifier labels the reference tables
//! know nothing about.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use symptra_deploy::{Deployment, SymptraPredictor, uncovered_classes};

use crate::ServerConfig;

/// The deployment `config` points at, with `~` expanded.
pub fn deployment(config: &ServerConfig) -> Deployment {
  Deployment {
    data_dir: expand_tilde(&config.data_dir),
    model:    expand_tilde(&config.model_path),
    tables:   config.tables.clone(),
  }
}

/// Load the predictor described by `config`.
pub fn load(config: &ServerConfig) -> anyhow::Result<SymptraPredictor> {
  let deployment = deployment(config);
  let predictor =
    symptra_deploy::load(&deployment).context("failed to load deployment")?;

  for (label, tables) in uncovered_classes(&predictor) {
    tracing::warn!(
      %label,
      missing = ?tables,
      "classifier label has no rows in some reference tables"
    );
  }
  Ok(predictor)
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use std::fs;

  use symptra_tables::TableFiles;

  use super::*;

  fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
      .join(format!("symptra-server-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
  }

  #[test]
  fn loads_from_server_config() {
    let dir = scratch_dir("config");
    let data = dir.join("datasets");
    fs::create_dir_all(&data).unwrap();
    let files = TableFiles::default();
    fs::write(data.join(&files.description), "Disease,Description\n").unwrap();
    fs::write(
      data.join(&files.precautions),
      "Disease,Precaution_1,Precaution_2,Precaution_3,Precaution_4\n",
    )
    .unwrap();
    fs::write(data.join(&files.medications), "Disease,Medication\n").unwrap();
    fs::write(data.join(&files.diets), "Disease,Diet\n").unwrap();
    fs::write(data.join(&files.workout), "disease,workout\n").unwrap();

    let mut coef = vec![0.0; 132];
    coef[0] = 1.0;
    let model = serde_json::json!({
      "classes":   ["Other", "Fungal infection"],
      "coef":      [coef],
      "intercept": [-0.5],
    });
    fs::write(dir.join("svc.json"), model.to_string()).unwrap();

    let config = ServerConfig {
      data_dir: data,
      model_path: dir.join("svc.json"),
      ..ServerConfig::default()
    };
    let predictor = load(&config).unwrap();
    assert_eq!(
      predictor.predict(["itching"]).unwrap().label.as_str(),
      "Fungal infection"
    );

    fs::remove_dir_all(&dir).ok();
  }

  #[test]
  fn load_failure_keeps_the_cause() {
    let config = ServerConfig {
      model_path: PathBuf::from("/nonexistent/svc.json"),
      ..ServerConfig::default()
    };
    let err = load(&config).unwrap_err();
    assert!(matches!(
      err.downcast_ref::<symptra_deploy::Error>(),
      Some(symptra_deploy::Error::Model { .. })
    ));
  }

  #[test]
  fn deployment_expands_tilde() {
    let Ok(home) = std::env::var("HOME") else {
      return;
    };
    let config = ServerConfig {
      model_path: PathBuf::from("~/models/svc.json"),
      ..ServerConfig::default()
    };
    let deployment = deployment(&config);
    assert_eq!(deployment.model, PathBuf::from(&home).join("models/svc.json"));
    assert_eq!(deployment.data_dir, PathBuf::from("datasets"));
  }

  #[test]
  fn tilde_expands_to_home() {
    let Ok(home) = std::env::var("HOME") else {
      return;
    };
    assert_eq!(
      expand_tilde(Path::new("~/data/svc.json")),
      PathBuf::from(home).join("data/svc.json")
    );
    assert_eq!(expand_tilde(Path::new("/abs/x")), PathBuf::from("/abs/x"));
  }
}
