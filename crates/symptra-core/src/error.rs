//! Error types for `symptra-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("no symptoms selected")]
  EmptySelection,

  #[error("unknown symptom: {0:?}")]
  UnknownSymptom(String),

  #[error("symptom {0:?} appears more than once in the vocabulary")]
  DuplicateSymptom(String),

  #[error("vocabulary is empty")]
  EmptyVocabulary,

  #[error("feature count mismatch: expected {expected}, got {actual}")]
  FeatureCountMismatch { expected: usize, actual: usize },

  #[error("classifier error: {0}")]
  Classifier(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("reference lookup error: {0}")]
  Reference(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Whether the error was caused by the caller's symptom selection rather
  /// than by a broken deployment.
  pub fn is_validation(&self) -> bool {
    matches!(self, Self::EmptySelection | Self::UnknownSymptom(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
