//! Assembles a ready-to-serve predictor from files on disk.
//!
//! Both binaries load the same three things: the standard vocabulary, the
//! classifier artifact and the five reference tables. Everything that can be
//! wrong with a deployment (missing files, malformed artifact, classifier
//! trained on another feature layout) fails here, before any request is
//! answered.

pub mod error;

pub use error::{Error, Result};

use std::{path::PathBuf, sync::Arc};

use symptra_core::{
  pipeline::Predictor, prediction::DiseaseLabel, vocabulary::SymptomVocabulary,
};
use symptra_model::LinearSvc;
use symptra_tables::{ReferenceCatalog, TableFiles};

pub type SymptraPredictor = Predictor<LinearSvc, ReferenceCatalog>;

/// Where a deployment's files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
  /// Directory holding the reference CSV files.
  pub data_dir: PathBuf,
  /// Serialized classifier (JSON).
  pub model:    PathBuf,
  /// Table file names, relative to `data_dir`.
  pub tables:   TableFiles,
}

impl Default for Deployment {
  fn default() -> Self {
    Self {
      data_dir: PathBuf::from("datasets"),
      model:    PathBuf::from("svc.json"),
      tables:   TableFiles::default(),
    }
  }
}

/// Load the standard vocabulary, the classifier and the five tables named by
/// `deployment`, and assemble them into a predictor.
pub fn load(deployment: &Deployment) -> Result<SymptraPredictor> {
  let vocabulary = Arc::new(SymptomVocabulary::standard());

  let model =
    LinearSvc::load(&deployment.model).map_err(|source| Error::Model {
      path: deployment.model.clone(),
      source,
    })?;
  model.check_features(&vocabulary).map_err(Error::Features)?;

  let catalog =
    ReferenceCatalog::open_with(&deployment.data_dir, &deployment.tables)
      .map_err(|source| Error::Tables {
        dir: deployment.data_dir.clone(),
        source,
      })?;

  Predictor::new(vocabulary, model, catalog).map_err(Error::Predictor)
}

/// Classifier labels that some reference table has no rows for, with the
/// names of those tables.
pub fn uncovered_classes(
  predictor: &SymptraPredictor,
) -> Vec<(&DiseaseLabel, Vec<&'static str>)> {
  let catalog = predictor.references();
  predictor
    .classifier()
    .classes()
    .iter()
    .map(|label| (label, catalog.missing_tables(label.as_str())))
    .filter(|(_, missing)| !missing.is_empty())
    .collect()
}
