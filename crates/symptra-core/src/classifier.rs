//! The `Classifier` trait and the adapter that pins it to a vocabulary.
//!
//! The classifier is an opaque, pre-trained function from a symptom vector
//! to a disease label. `symptra-model` provides the concrete implementation;
//! tests use small hand-written ones.

use crate::{
  Error, Result, prediction::DiseaseLabel, vector::SymptomVector,
  vocabulary::SymptomVocabulary,
};

/// A pre-trained, deterministic classifier.
pub trait Classifier: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Length of the input vector the classifier was trained on.
  fn feature_count(&self) -> usize;

  fn predict(&self, vector: &SymptomVector) -> Result<DiseaseLabel, Self::Error>;
}

impl<C: Classifier + ?Sized> Classifier for std::sync::Arc<C> {
  type Error = C::Error;

  fn feature_count(&self) -> usize { (**self).feature_count() }

  fn predict(&self, vector: &SymptomVector) -> Result<DiseaseLabel, Self::Error> {
    (**self).predict(vector)
  }
}

/// A classifier whose input width has been checked against a vocabulary.
///
/// Construction is the only place a width mismatch can surface; it is a
/// deployment error and should abort startup.
#[derive(Debug, Clone)]
pub struct ClassifierAdapter<C> {
  classifier:    C,
  feature_count: usize,
}

impl<C: Classifier> ClassifierAdapter<C> {
  pub fn new(classifier: C, vocabulary: &SymptomVocabulary) -> Result<Self> {
    let actual = classifier.feature_count();
    if actual != vocabulary.len() {
      return Err(Error::FeatureCountMismatch {
        expected: vocabulary.len(),
        actual,
      });
    }
    Ok(Self { classifier, feature_count: actual })
  }

  pub fn feature_count(&self) -> usize { self.feature_count }

  pub fn inner(&self) -> &C { &self.classifier }

  pub fn predict(&self, vector: &SymptomVector) -> Result<DiseaseLabel> {
    if vector.len() != self.feature_count {
      return Err(Error::FeatureCountMismatch {
        expected: self.feature_count,
        actual:   vector.len(),
      });
    }
    self
      .classifier
      .predict(vector)
      .map_err(|e| Error::Classifier(Box::new(e)))
  }
}
