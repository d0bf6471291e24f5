//! The `ReferenceSource` trait: the label-to-reference-data join.
//!
//! Implemented by `symptra-tables` over the five CSV tables. The pipeline
//! depends on this abstraction, not on any concrete table format.

use serde::{Deserialize, Serialize};

use crate::prediction::DiseaseLabel;

/// Everything the reference tables hold for one disease label.
///
/// A label the tables do not know yields the [`Default`] value: empty
/// description and empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
  pub description: String,
  pub precautions: Vec<String>,
  pub medications: Vec<String>,
  pub diet:        Vec<String>,
  pub workout:     Vec<String>,
}

impl ReferenceEntry {
  /// `true` when no table had anything for the label.
  pub fn is_empty(&self) -> bool {
    self.description.is_empty()
      && self.precautions.is_empty()
      && self.medications.is_empty()
      && self.diet.is_empty()
      && self.workout.is_empty()
  }
}

/// Read-only lookup of reference data by disease label.
///
/// Implementations are loaded once and then shared across requests, hence
/// `Send + Sync` and `&self` access only.
pub trait ReferenceSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Join `label` against every table. Missing rows are not an error; they
  /// produce empty fields.
  fn resolve(&self, label: &DiseaseLabel) -> Result<ReferenceEntry, Self::Error>;
}

impl<R: ReferenceSource + ?Sized> ReferenceSource for std::sync::Arc<R> {
  type Error = R::Error;

  fn resolve(&self, label: &DiseaseLabel) -> Result<ReferenceEntry, Self::Error> {
    (**self).resolve(label)
  }
}
