//! Linear support vector classifier evaluated from exported weights.

use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};
use symptra_core::{
  classifier::Classifier, prediction::DiseaseLabel, vector::SymptomVector,
  vocabulary::SymptomVocabulary,
};

use crate::error::{Error, Result};

/// How coefficient rows map to classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
  /// One row per class; the highest score wins.
  Ovr,
  /// One row per class pair `(i, j)`, `i < j`, in the order
  /// `(0,1), (0,2), .., (1,2), ..`. A positive score votes for `i`.
  Ovo,
}

impl fmt::Display for Decision {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Decision::Ovr => "ovr",
      Decision::Ovo => "ovo",
    })
  }
}

/// On-disk shape of the artifact. Validated into a [`LinearSvc`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Artifact {
  classes:   Vec<String>,
  coef:      Vec<Vec<f64>>,
  intercept: Vec<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  decision:  Option<Decision>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  features:  Option<Vec<String>>,
}

/// Number of class pairs a one-vs-one model carries rows for.
fn pair_count(classes: usize) -> usize {
  classes * classes.saturating_sub(1) / 2
}

/// Work out the row layout from the class and row counts, honouring an
/// explicit `declared` layout. Three classes with three rows fit both
/// layouts and must be declared.
fn layout(
  classes: usize,
  rows: usize,
  declared: Option<Decision>,
) -> Result<Decision> {
  let ovr = rows == classes || (classes == 2 && rows == 1);
  let ovo = classes >= 2 && rows == pair_count(classes);
  match (declared, ovr, ovo) {
    (Some(Decision::Ovr), true, _) => Ok(Decision::Ovr),
    (Some(Decision::Ovo), _, true) => Ok(Decision::Ovo),
    (Some(decision), ..) => Err(Error::CoefRows { decision, classes, rows }),
    // Two classes, one row: both layouts read it the same way.
    (None, true, true) if rows == 1 => Ok(Decision::Ovr),
    (None, true, true) => Err(Error::AmbiguousLayout { classes, rows }),
    (None, true, false) => Ok(Decision::Ovr),
    (None, false, true) => Ok(Decision::Ovo),
    (None, false, false) => Err(Error::UnknownLayout { classes, rows }),
  }
}

/// Index of the largest value; ties go to the lowest index.
fn argmax<T: PartialOrd>(values: &[T]) -> usize {
  let mut best = 0;
  for (i, v) in values.iter().enumerate().skip(1) {
    if *v > values[best] {
      best = i;
    }
  }
  best
}

/// Linear SVM over binary symptom vectors.
///
/// A one-vs-rest model predicts the class with the highest
/// `coef · x + intercept` (ties go to the earlier class). A one-vs-one model
/// scores every class pair, counts votes and picks the class with the most,
/// again preferring the earlier class on a tie. A two-class model may carry
/// a single row, in which case a positive score selects the second class.
#[derive(Debug, Clone)]
pub struct LinearSvc {
  classes:   Vec<DiseaseLabel>,
  coef:      Vec<Vec<f64>>,
  intercept: Vec<f64>,
  decision:  Decision,
  features:  Option<Vec<String>>,
}

impl LinearSvc {
  /// Build a model from raw weights, checking that the shapes agree. With
  /// no `decision` the layout is inferred from the row count.
  pub fn new(
    classes: Vec<String>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
    decision: Option<Decision>,
    features: Option<Vec<String>>,
  ) -> Result<Self> {
    if classes.is_empty() {
      return Err(Error::NoClasses);
    }
    let rows = coef.len();
    let decision = layout(classes.len(), rows, decision)?;
    if intercept.len() != rows {
      return Err(Error::InterceptCount { rows, intercepts: intercept.len() });
    }

    let expected = coef[0].len();
    if let Some((row, r)) =
      coef.iter().enumerate().find(|(_, r)| r.len() != expected)
    {
      return Err(Error::RaggedCoef { row, width: r.len(), expected });
    }
    if let Some(names) = &features
      && names.len() != expected
    {
      return Err(Error::FeatureNameCount { listed: names.len(), width: expected });
    }

    Ok(Self {
      classes: classes.into_iter().map(DiseaseLabel::new).collect(),
      coef,
      intercept,
      decision,
      features,
    })
  }

  pub fn from_json(json: &str) -> Result<Self> {
    let a: Artifact = serde_json::from_str(json)?;
    Self::new(a.classes, a.coef, a.intercept, a.decision, a.features)
  }

  /// Read and validate the artifact at `path`.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| Error::Read {
      path: path.to_path_buf(),
      source,
    })?;
    let model = Self::from_json(&json)?;
    tracing::info!(
      path = %path.display(),
      classes = model.classes.len(),
      features = model.width(),
      decision = %model.decision,
      "loaded classifier"
    );
    Ok(model)
  }

  /// Serialize back to the artifact format, with the layout made explicit.
  pub fn to_json(&self) -> Result<String> {
    let artifact = Artifact {
      classes:   self.classes.iter().map(|c| c.to_string()).collect(),
      coef:      self.coef.clone(),
      intercept: self.intercept.clone(),
      decision:  Some(self.decision),
      features:  self.features.clone(),
    };
    Ok(serde_json::to_string(&artifact)?)
  }

  pub fn classes(&self) -> &[DiseaseLabel] { &self.classes }

  pub fn decision(&self) -> Decision { self.decision }

  /// Number of input features.
  pub fn width(&self) -> usize { self.coef[0].len() }

  /// Feature names recorded in the artifact, if any.
  pub fn features(&self) -> Option<&[String]> { self.features.as_deref() }

  /// Check recorded feature names against `vocabulary`, position by
  /// position. Artifacts without names pass.
  pub fn check_features(&self, vocabulary: &SymptomVocabulary) -> Result<()> {
    let Some(names) = &self.features else {
      return Ok(());
    };
    if names.len() != vocabulary.len() {
      return Err(Error::InputWidth {
        expected: names.len(),
        actual:   vocabulary.len(),
      });
    }
    for ((index, theirs), ours) in
      names.iter().enumerate().zip(vocabulary.names())
    {
      if theirs != ours {
        return Err(Error::FeatureOrderMismatch {
          index,
          model: theirs.clone(),
          vocabulary: ours.clone(),
        });
      }
    }
    Ok(())
  }

  /// Raw per-row scores for `vector`: one per class, or one per class pair.
  pub fn decision_function(&self, vector: &SymptomVector) -> Result<Vec<f64>> {
    if vector.len() != self.width() {
      return Err(Error::InputWidth {
        expected: self.width(),
        actual:   vector.len(),
      });
    }
    // Inputs are 0/1, so the dot product is the sum over active slots.
    let active: Vec<usize> = vector.active_indices().collect();
    Ok(
      self
        .coef
        .iter()
        .zip(&self.intercept)
        .map(|(row, b)| b + active.iter().map(|i| row[*i]).sum::<f64>())
        .collect(),
    )
  }

  /// Per-class vote counts of a one-vs-one model.
  fn votes(&self, scores: &[f64]) -> Vec<usize> {
    let n = self.classes.len();
    let mut votes = vec![0; n];
    let pairs = (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j)));
    for ((i, j), score) in pairs.zip(scores) {
      if *score > 0.0 {
        votes[i] += 1;
      } else {
        votes[j] += 1;
      }
    }
    votes
  }

  fn pick(&self, scores: &[f64]) -> &DiseaseLabel {
    if scores.len() == 1 && self.classes.len() == 2 {
      return &self.classes[usize::from(scores[0] > 0.0)];
    }
    let best = match self.decision {
      Decision::Ovr => argmax(scores),
      Decision::Ovo => argmax(&self.votes(scores)),
    };
    &self.classes[best]
  }
}

impl Classifier for LinearSvc {
  type Error = Error;

  fn feature_count(&self) -> usize { self.width() }

  fn predict(&self, vector: &SymptomVector) -> Result<DiseaseLabel> {
    let scores = self.decision_function(vector)?;
    Ok(self.pick(&scores).clone())
  }
}
