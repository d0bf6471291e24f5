//! CSV-backed reference tables for Symptra.
//!
//! Loads the five disease-keyed tables (description, precautions,
//! medications, diets, workout) once, indexes them by disease label, and
//! implements [`symptra_core::reference::ReferenceSource`] over them.

mod catalog;
mod table;

pub mod error;

pub use catalog::{ReferenceCatalog, TableFiles};
pub use error::{Error, Result};
pub use table::{
  DESCRIPTION, DIETS, MEDICATIONS, NA_MARKERS, PRECAUTIONS, ReferenceTable,
  TableSpec, WORKOUT, is_missing,
};
