//! Subcommand implementations.
//!
//! Output goes to caller-supplied writers so the commands can be exercised
//! without a terminal.

use std::{
  io::Write,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use symptra_core::{
  classifier::Classifier, pipeline::Predictor, reference::ReferenceSource,
  report::Report, vocabulary::SymptomVocabulary,
};

use crate::suggest;

pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least one symptom!";

/// How a command ended, short of an internal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Done,
  /// The selection was rejected; a corrective message was printed.
  Rejected,
}

/// What `predict` does with the result.
#[derive(Debug, Clone, Default)]
pub struct PredictOptions {
  /// Print the structured result as JSON instead of the text report.
  pub json:        bool,
  /// Also write the report to this file.
  pub out:         Option<PathBuf>,
  /// Also write the report to `<label>_report.txt` in `report_dir`.
  pub save_report: bool,
  pub report_dir:  PathBuf,
}

// ─── symptoms ─────────────────────────────────────────────────────────────────

pub fn symptoms(
  vocabulary: &SymptomVocabulary,
  filter: Option<&str>,
  out: &mut impl Write,
) -> Result<Outcome> {
  for name in suggest::filter(vocabulary, filter.unwrap_or_default()) {
    writeln!(out, "{name}")?;
  }
  Ok(Outcome::Done)
}

// ─── predict ──────────────────────────────────────────────────────────────────

pub fn predict<C, R>(
  predictor: &Predictor<C, R>,
  symptoms: &[String],
  options: &PredictOptions,
  out: &mut impl Write,
  err: &mut impl Write,
) -> Result<Outcome>
where
  C: Classifier,
  R: ReferenceSource,
{
  let result = match predictor.predict(symptoms) {
    Ok(result) => result,
    Err(symptra_core::Error::EmptySelection) => {
      writeln!(err, "{EMPTY_SELECTION_MESSAGE}")?;
      return Ok(Outcome::Rejected);
    }
    Err(symptra_core::Error::UnknownSymptom(name)) => {
      writeln!(err, "Unknown symptom {name:?}.")?;
      let close = suggest::suggestions(predictor.vocabulary(), &name, 3);
      if !close.is_empty() {
        writeln!(err, "Did you mean: {}?", close.join(", "))?;
      }
      writeln!(err, "Run `symptra symptoms` to list every accepted name.")?;
      return Ok(Outcome::Rejected);
    }
    Err(e) => return Err(e.into()),
  };
  tracing::debug!(label = %result.label, "prediction");

  let report = Report::from_result(&result);
  if options.json {
    writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
  } else {
    write!(out, "{}", report.body)?;
  }

  if let Some(path) = &options.out {
    save(&report, path, err)?;
  }
  if options.save_report {
    let path = options.report_dir.join(local_file_name(&report.file_name));
    save(&report, &path, err)?;
  }
  Ok(Outcome::Done)
}

/// `name` as a single path component: separators and control characters
/// become `_`, so a label cannot steer the report out of its directory.
fn local_file_name(name: &str) -> String {
  name
    .chars()
    .map(|c| match c {
      '/' | '\\' | ':' => '_',
      c if c.is_control() => '_',
      c => c,
    })
    .collect()
}

fn save(report: &Report, path: &Path, err: &mut impl Write) -> Result<()> {
  std::fs::write(path, &report.body)
    .with_context(|| format!("writing report to {}", path.display()))?;
  writeln!(err, "Saved report to {}", path.display())?;
  Ok(())
}
