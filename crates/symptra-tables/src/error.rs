//! Error type for `symptra-tables`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot open {table} table at {path:?}: {source}")]
  Open {
    table:  &'static str,
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed {table} table: {source}")]
  Csv {
    table:  &'static str,
    #[source]
    source: csv::Error,
  },

  #[error("{table} table has no {column:?} column")]
  MissingColumn { table: &'static str, column: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
