//! Disease labels and the per-request prediction result.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::reference::ReferenceEntry;

// ─── Label ───────────────────────────────────────────────────────────────────

/// The classifier's output and the join key into every reference table.
///
/// Opaque: compared byte-for-byte, never trimmed or case-folded.
#[derive(
  Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DiseaseLabel(String);

impl DiseaseLabel {
  pub fn new(label: impl Into<String>) -> Self { Self(label.into()) }

  pub fn as_str(&self) -> &str { &self.0 }

  pub fn into_inner(self) -> String { self.0 }
}

impl fmt::Display for DiseaseLabel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl AsRef<str> for DiseaseLabel {
  fn as_ref(&self) -> &str { &self.0 }
}

impl From<&str> for DiseaseLabel {
  fn from(s: &str) -> Self { Self(s.to_string()) }
}

impl From<String> for DiseaseLabel {
  fn from(s: String) -> Self { Self(s) }
}

// ─── Result ──────────────────────────────────────────────────────────────────

/// The answer to one prediction request: the label plus everything the
/// reference tables know about it. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
  pub label:       DiseaseLabel,
  /// Empty when the description table has no row for `label`.
  pub description: String,
  pub precautions: Vec<String>,
  pub medications: Vec<String>,
  pub diet:        Vec<String>,
  pub workout:     Vec<String>,
}

impl PredictionResult {
  pub fn new(label: DiseaseLabel, entry: ReferenceEntry) -> Self {
    Self {
      label,
      description: entry.description,
      precautions: entry.precautions,
      medications: entry.medications,
      diet: entry.diet,
      workout: entry.workout,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn label_serializes_as_plain_string() {
    let label = DiseaseLabel::new("Fungal infection");
    assert_eq!(
      serde_json::to_string(&label).unwrap(),
      "\"Fungal infection\""
    );
  }

  #[test]
  fn result_json_shape() {
    let result = PredictionResult::new("Flu".into(), ReferenceEntry {
      description: "A viral infection.".into(),
      precautions: vec!["rest".into()],
      ..ReferenceEntry::default()
    });
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["label"], "Flu");
    assert_eq!(json["description"], "A viral infection.");
    assert_eq!(json["precautions"][0], "rest");
    assert_eq!(json["medications"].as_array().unwrap().len(), 0);
  }
}
