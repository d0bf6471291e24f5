//! The prediction pipeline: selection → vector → label → reference join.
//!
//! A [`Predictor`] holds only read-only state, so one instance behind an
//! `Arc` can serve any number of concurrent requests without locking.

use std::sync::Arc;

use crate::{
  Error, Result,
  classifier::{Classifier, ClassifierAdapter},
  prediction::{DiseaseLabel, PredictionResult},
  reference::{ReferenceEntry, ReferenceSource},
  report::Report,
  vector::SymptomVector,
  vocabulary::SymptomVocabulary,
};

#[derive(Debug)]
pub struct Predictor<C, R> {
  vocabulary: Arc<SymptomVocabulary>,
  classifier: ClassifierAdapter<C>,
  references: R,
}

impl<C, R> Predictor<C, R>
where
  C: Classifier,
  R: ReferenceSource,
{
  /// Assemble a predictor. Fails if the classifier's input width does not
  /// match the vocabulary.
  pub fn new(
    vocabulary: Arc<SymptomVocabulary>,
    classifier: C,
    references: R,
  ) -> Result<Self> {
    let classifier = ClassifierAdapter::new(classifier, &vocabulary)?;
    Ok(Self { vocabulary, classifier, references })
  }

  pub fn vocabulary(&self) -> &SymptomVocabulary { &self.vocabulary }

  pub fn references(&self) -> &R { &self.references }

  /// The wrapped classifier.
  pub fn classifier(&self) -> &C { self.classifier.inner() }

  /// Encode `symptoms` and classify them. Validation errors
  /// ([`Error::EmptySelection`], [`Error::UnknownSymptom`]) are raised before
  /// the classifier is invoked.
  pub fn classify<I, S>(&self, symptoms: I) -> Result<DiseaseLabel>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let vector = SymptomVector::encode(&self.vocabulary, symptoms)?;
    self.classifier.predict(&vector)
  }

  /// Join `label` against the reference source.
  pub fn lookup(&self, label: &DiseaseLabel) -> Result<ReferenceEntry> {
    self
      .references
      .resolve(label)
      .map_err(|e| Error::Reference(Box::new(e)))
  }

  /// Run the full pipeline for one selection.
  pub fn predict<I, S>(&self, symptoms: I) -> Result<PredictionResult>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let label = self.classify(symptoms)?;
    let entry = self.lookup(&label)?;
    Ok(PredictionResult::new(label, entry))
  }

  /// Run the pipeline and format the result as a downloadable report.
  pub fn report<I, S>(&self, symptoms: I) -> Result<Report>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    Ok(Report::from_result(&self.predict(symptoms)?))
  }
}
