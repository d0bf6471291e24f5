//! Error types for the model loader.

use std::path::PathBuf;

use thiserror::Error;

use crate::svc::Decision;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot read model artifact {path:?}: {source}")]
  Read {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed model artifact: {0}")]
  Json(#[from] serde_json::Error),

  #[error("model has no classes")]
  NoClasses,

  #[error(
    "{decision} model with {classes} classes cannot have {rows} coefficient \
     rows"
  )]
  CoefRows { decision: Decision, classes: usize, rows: usize },

  #[error(
    "{rows} coefficient rows for {classes} classes fit both one-vs-rest and \
     one-vs-one; set \"decision\" in the artifact"
  )]
  AmbiguousLayout { classes: usize, rows: usize },

  #[error(
    "{rows} coefficient rows fit neither one-vs-rest nor one-vs-one for \
     {classes} classes"
  )]
  UnknownLayout { classes: usize, rows: usize },

  #[error("model has {rows} coefficient rows but {intercepts} intercepts")]
  InterceptCount { rows: usize, intercepts: usize },

  #[error("coefficient row {row} has {width} entries, expected {expected}")]
  RaggedCoef { row: usize, width: usize, expected: usize },

  #[error("model lists {listed} feature names for {width} coefficients")]
  FeatureNameCount { listed: usize, width: usize },

  #[error(
    "feature {index} is {model:?} in the model but {vocabulary:?} in the \
     vocabulary"
  )]
  FeatureOrderMismatch {
    index:      usize,
    model:      String,
    vocabulary: String,
  },

  #[error("input has {actual} features, model expects {expected}")]
  InputWidth { expected: usize, actual: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
