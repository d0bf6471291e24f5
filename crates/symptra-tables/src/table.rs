//! A single disease-keyed reference table.
//!
//! Every table has the same shape: one key column holding the disease label
//! and one or more value columns. A label may own several rows. Lookups
//! flatten the value columns of all matching rows, in file order, and skip
//! missing cells.
//!
//! Pipeline:
//!   CSV bytes
//!     └─ locate key + value columns in the header
//!          └─ per record: keep present cells  → rows
//!               └─ group row indices by key  → by_key

use std::{collections::HashMap, fs::File, io, path::Path};

use crate::error::{Error, Result};

// ─── Table layouts ───────────────────────────────────────────────────────────

/// Which columns of a CSV file form a reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
  pub name:          &'static str,
  pub key_column:    &'static str,
  pub value_columns: &'static [&'static str],
}

pub const DESCRIPTION: TableSpec = TableSpec {
  name:          "description",
  key_column:    "Disease",
  value_columns: &["Description"],
};

pub const PRECAUTIONS: TableSpec = TableSpec {
  name:          "precautions",
  key_column:    "Disease",
  value_columns: &[
    "Precaution_1",
    "Precaution_2",
    "Precaution_3",
    "Precaution_4",
  ],
};

pub const MEDICATIONS: TableSpec = TableSpec {
  name:          "medications",
  key_column:    "Disease",
  value_columns: &["Medication"],
};

pub const DIETS: TableSpec = TableSpec {
  name:          "diets",
  key_column:    "Disease",
  value_columns: &["Diet"],
};

// The workout export uses lower-case headers.
pub const WORKOUT: TableSpec = TableSpec {
  name:          "workout",
  key_column:    "disease",
  value_columns: &["workout"],
};

// ─── Missing values ──────────────────────────────────────────────────────────

/// Markers pandas' CSV reader turns into NaN by default.
pub const NA_MARKERS: &[&str] = &[
  "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
  "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a cell holds no value: blank (after trimming), one of
/// [`NA_MARKERS`], or `nan` in any case.
pub fn is_missing(cell: &str) -> bool {
  let cell = cell.trim();
  cell.is_empty()
    || cell.eq_ignore_ascii_case("nan")
    || NA_MARKERS.contains(&cell)
}

// ─── Table ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ReferenceTable {
  spec:   TableSpec,
  /// Present cells of each row, value columns in spec order.
  rows:   Vec<Vec<String>>,
  by_key: HashMap<String, Vec<usize>>,
}

impl ReferenceTable {
  /// Read a table from CSV text. The first record is the header; columns not
  /// named in `spec` are ignored.
  pub fn from_reader<R: io::Read>(spec: TableSpec, reader: R) -> Result<Self> {
    let csv_err = |source: csv::Error| Error::Csv { table: spec.name, source };

    let mut reader = csv::ReaderBuilder::new()
      .has_headers(true)
      .from_reader(reader);

    let headers = reader.headers().map_err(csv_err)?.clone();
    let position = |column: &'static str| {
      headers
        .iter()
        .position(|h| h == column)
        .ok_or(Error::MissingColumn { table: spec.name, column })
    };
    let key_at = position(spec.key_column)?;
    let value_at = spec
      .value_columns
      .iter()
      .map(|c| position(*c))
      .collect::<Result<Vec<_>>>()?;

    let mut rows = Vec::new();
    let mut by_key: HashMap<String, Vec<usize>> = HashMap::new();
    for record in reader.records() {
      let record = record.map_err(csv_err)?;
      let key = record.get(key_at).unwrap_or_default();
      let values = value_at
        .iter()
        .filter_map(|i| record.get(*i))
        .filter(|cell| !is_missing(cell))
        .map(str::to_string)
        .collect();

      by_key.entry(key.to_string()).or_default().push(rows.len());
      rows.push(values);
    }

    tracing::debug!(
      table = spec.name,
      rows = rows.len(),
      keys = by_key.len(),
      "parsed reference table"
    );
    Ok(Self { spec, rows, by_key })
  }

  /// Open and read a table file.
  pub fn from_path(spec: TableSpec, path: &Path) -> Result<Self> {
    let file = File::open(path).map_err(|source| Error::Open {
      table: spec.name,
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_reader(spec, io::BufReader::new(file))
  }

  pub fn spec(&self) -> &TableSpec { &self.spec }

  /// Number of data rows, including rows with only missing values.
  pub fn len(&self) -> usize { self.rows.len() }

  pub fn is_empty(&self) -> bool { self.rows.is_empty() }

  /// Distinct keys, in no particular order.
  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.by_key.keys().map(String::as_str)
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.by_key.contains_key(key)
  }

  /// All present values for `key`: rows in file order, columns in spec
  /// order. Empty when the key is unknown.
  pub fn values<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a str> {
    self
      .by_key
      .get(key)
      .into_iter()
      .flatten()
      .flat_map(move |row| self.rows[*row].iter().map(String::as_str))
  }

  /// [`values`](Self::values) collected into owned strings.
  pub fn collect(&self, key: &str) -> Vec<String> {
    self.values(key).map(str::to_string).collect()
  }

  /// [`values`](Self::values) joined with `separator`.
  pub fn joined(&self, key: &str, separator: &str) -> String {
    self.values(key).collect::<Vec<_>>().join(separator)
  }
}
