//! Error type for `symptra-deploy`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to load classifier {path:?}")]
  Model {
    path:   PathBuf,
    #[source]
    source: symptra_model::Error,
  },

  #[error("classifier features do not match the symptom vocabulary")]
  Features(#[source] symptra_model::Error),

  #[error("failed to load reference tables from {dir:?}")]
  Tables {
    dir:    PathBuf,
    #[source]
    source: symptra_tables::Error,
  },

  #[error("classifier does not fit the symptom vocabulary")]
  Predictor(#[source] symptra_core::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
