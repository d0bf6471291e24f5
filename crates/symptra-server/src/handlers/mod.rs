pub mod health;
pub mod predict;
pub mod report;
pub mod symptoms;

use serde::Deserialize;

/// Body of `POST /predict` and `POST /report`.
#[derive(Debug, Clone, Deserialize)]
pub struct SymptomSelection {
  #[serde(default)]
  pub symptoms: Vec<String>,
}
