//! The five-table catalog and its [`ReferenceSource`] implementation.

use std::{
  collections::BTreeSet,
  convert::Infallible,
  path::{Path, PathBuf},
};

use serde::Deserialize;
use symptra_core::{
  prediction::DiseaseLabel,
  reference::{ReferenceEntry, ReferenceSource},
};

use crate::{
  error::Result,
  table::{
    DESCRIPTION, DIETS, MEDICATIONS, PRECAUTIONS, ReferenceTable, TableSpec,
    WORKOUT,
  },
};

/// Matching descriptions are joined with this when a label has several rows.
const DESCRIPTION_SEPARATOR: &str = " ";

// ─── File names ──────────────────────────────────────────────────────────────

/// File name of each table, relative to the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableFiles {
  pub description: PathBuf,
  pub precautions: PathBuf,
  pub medications: PathBuf,
  pub diets:       PathBuf,
  pub workout:     PathBuf,
}

impl Default for TableFiles {
  fn default() -> Self {
    Self {
      description: "description.csv".into(),
      precautions: "precautions_df.csv".into(),
      medications: "medications.csv".into(),
      diets:       "diets.csv".into(),
      workout:     "workout_df.csv".into(),
    }
  }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// All reference data, loaded once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
  description: ReferenceTable,
  precautions: ReferenceTable,
  medications: ReferenceTable,
  diets:       ReferenceTable,
  workout:     ReferenceTable,
}

impl ReferenceCatalog {
  pub fn new(
    description: ReferenceTable,
    precautions: ReferenceTable,
    medications: ReferenceTable,
    diets: ReferenceTable,
    workout: ReferenceTable,
  ) -> Self {
    Self { description, precautions, medications, diets, workout }
  }

  /// Load every table from `dir` using the default file names.
  pub fn open(dir: &Path) -> Result<Self> {
    Self::open_with(dir, &TableFiles::default())
  }

  /// Load every table from `dir`. The first missing or malformed file aborts
  /// the load.
  pub fn open_with(dir: &Path, files: &TableFiles) -> Result<Self> {
    let load = |spec: TableSpec, file: &Path| {
      let path = dir.join(file);
      let table = ReferenceTable::from_path(spec, &path)?;
      tracing::info!(
        table = spec.name,
        path = %path.display(),
        rows = table.len(),
        "loaded reference table"
      );
      Ok::<_, crate::Error>(table)
    };

    Ok(Self {
      description: load(DESCRIPTION, &files.description)?,
      precautions: load(PRECAUTIONS, &files.precautions)?,
      medications: load(MEDICATIONS, &files.medications)?,
      diets:       load(DIETS, &files.diets)?,
      workout:     load(WORKOUT, &files.workout)?,
    })
  }

  pub fn description(&self) -> &ReferenceTable { &self.description }

  pub fn precautions(&self) -> &ReferenceTable { &self.precautions }

  pub fn medications(&self) -> &ReferenceTable { &self.medications }

  pub fn diets(&self) -> &ReferenceTable { &self.diets }

  pub fn workout(&self) -> &ReferenceTable { &self.workout }

  fn tables(&self) -> [&ReferenceTable; 5] {
    [
      &self.description,
      &self.precautions,
      &self.medications,
      &self.diets,
      &self.workout,
    ]
  }

  /// Every label any table knows about, sorted.
  pub fn diseases(&self) -> BTreeSet<&str> {
    self.tables().into_iter().flat_map(ReferenceTable::keys).collect()
  }

  /// Names of the tables that have no row for `label`.
  pub fn missing_tables(&self, label: &str) -> Vec<&'static str> {
    self
      .tables()
      .into_iter()
      .filter(|t| !t.contains_key(label))
      .map(|t| t.spec().name)
      .collect()
  }

  /// Join `label` against all five tables.
  pub fn lookup(&self, label: &str) -> ReferenceEntry {
    ReferenceEntry {
      description: self.description.joined(label, DESCRIPTION_SEPARATOR),
      precautions: self.precautions.collect(label),
      medications: self.medications.collect(label),
      diet:        self.diets.collect(label),
      workout:     self.workout.collect(label),
    }
  }
}

impl ReferenceSource for ReferenceCatalog {
  type Error = Infallible;

  fn resolve(&self, label: &DiseaseLabel) -> Result<ReferenceEntry, Infallible> {
    let entry = self.lookup(label.as_str());
    if entry.is_empty() {
      tracing::debug!(%label, "no reference data for label");
    }
    Ok(entry)
  }
}
