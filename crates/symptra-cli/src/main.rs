//! `symptra`: predict a disease from symptoms on the command line.
//!
//! # Usage
//!
//! ```
//! symptra symptoms --filter pain
//! symptra predict itching skin_rash nodal_skin_eruptions
//! symptra predict cough,high_fever --json
//! symptra --data-dir ~/symptra/datasets predict vomiting --save-report
//! ```

mod commands;
mod settings;
mod suggest;

use std::{io, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{Outcome, PredictOptions};
use settings::ConfigFile;
use symptra_core::vocabulary::SymptomVocabulary;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "symptra",
  version,
  about = "Predict a disease from symptoms and print its reference report"
)]
struct Args {
  /// Path to a TOML config file (data_dir, model, tables).
  #[arg(short, long, value_name = "FILE", global = true)]
  config: Option<PathBuf>,

  /// Directory holding the reference CSV files (default: datasets).
  #[arg(long, env = "SYMPTRA_DATA_DIR", global = true)]
  data_dir: Option<PathBuf>,

  /// Classifier artifact (default: svc.json).
  #[arg(long, env = "SYMPTRA_MODEL", global = true)]
  model: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List the accepted symptom names in feature order.
  Symptoms {
    /// Only show names fuzzily matching this text.
    #[arg(short, long)]
    filter: Option<String>,
  },

  /// Predict a disease and print the report.
  Predict {
    /// Symptom names, separated by spaces or commas.
    #[arg(value_delimiter = ',')]
    symptoms: Vec<String>,

    /// Print the result as JSON instead of the text report.
    #[arg(long)]
    json: bool,

    /// Write the report to FILE.
    #[arg(short, long, value_name = "FILE", conflicts_with = "save_report")]
    out: Option<PathBuf>,

    /// Write the report to `<disease>_report.txt` in the current directory.
    #[arg(long)]
    save_report: bool,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg = match &args.config {
    Some(path) => ConfigFile::read(path)?,
    None => ConfigFile::default(),
  };
  let deployment = settings::resolve(file_cfg, args.data_dir, args.model);

  let outcome = match args.command {
    Command::Symptoms { filter } => commands::symptoms(
      &SymptomVocabulary::standard(),
      filter.as_deref(),
      &mut io::stdout().lock(),
    )?,
    Command::Predict { symptoms, json, out, save_report } => {
      let predictor = symptra_deploy::load(&deployment)
        .context("failed to load deployment")?;
      let options = PredictOptions {
        json,
        out,
        save_report,
        report_dir: PathBuf::from("."),
      };
      commands::predict(
        &predictor,
        &symptoms,
        &options,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
      )?
    }
  };

  Ok(match outcome {
    Outcome::Done => ExitCode::SUCCESS,
    Outcome::Rejected => ExitCode::from(2),
  })
}
