//! Plain-text report formatter.
//!
//! The output is a pure function of the [`PredictionResult`]: equal results
//! give byte-identical reports, so a downloaded report can be reproduced.

use serde::Serialize;

use crate::prediction::PredictionResult;

pub const REPORT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// A rendered report plus the metadata a download needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
  /// `<label>_report.txt`
  pub file_name:    String,
  pub content_type: &'static str,
  pub body:         String,
}

impl Report {
  pub fn from_result(result: &PredictionResult) -> Self {
    Self {
      file_name:    file_name(result),
      content_type: REPORT_CONTENT_TYPE,
      body:         render(result),
    }
  }
}

/// Suggested download name for the report of `result`.
pub fn file_name(result: &PredictionResult) -> String {
  format!("{}_report.txt", result.label)
}

/// Render `result` as text. List fields are joined with `", "`.
pub fn render(result: &PredictionResult) -> String {
  format!(
    "\nPredicted Disease: {}\n\nDescription:\n{}\n\nPrecautions:\n{}\n\n\
     Medications:\n{}\n\nDiet:\n{}\n\nWorkout:\n{}\n",
    result.label,
    result.description,
    result.precautions.join(", "),
    result.medications.join(", "),
    result.diet.join(", "),
    result.workout.join(", "),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::prediction::DiseaseLabel;

  fn flu() -> PredictionResult {
    PredictionResult {
      label:       DiseaseLabel::new("Flu"),
      description: "A viral infection.".into(),
      precautions: vec!["rest".into(), "fluids".into()],
      medications: vec!["Paracetamol".into()],
      diet:        vec!["Warm soup".into()],
      workout:     vec!["Light walking".into()],
    }
  }

  #[test]
  fn matches_template_exactly() {
    let expected = "
Predicted Disease: Flu

Description:
A viral infection.

Precautions:
rest, fluids

Medications:
Paracetamol

Diet:
Warm soup

Workout:
Light walking
";
    assert_eq!(render(&flu()), expected);
  }

  #[test]
  fn rendering_is_deterministic() {
    assert_eq!(render(&flu()), render(&flu().clone()));
  }

  #[test]
  fn empty_fields_render_as_empty_blocks() {
    let result = PredictionResult {
      label:       DiseaseLabel::new("Unknown"),
      description: String::new(),
      precautions: vec![],
      medications: vec![],
      diet:        vec![],
      workout:     vec![],
    };
    let text = render(&result);
    assert!(text.contains("Medications:\n\n\nDiet:"));
    assert!(text.ends_with("Workout:\n\n"));
  }

  #[test]
  fn report_metadata() {
    let report = Report::from_result(&flu());
    assert_eq!(report.file_name, "Flu_report.txt");
    assert_eq!(report.content_type, "text/plain; charset=utf-8");
    assert_eq!(report.body, render(&flu()));
  }
}
