//! Handler for `POST /report`: the downloadable plain-text report.

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::{HeaderValue, header},
  response::{IntoResponse, Response},
};
use symptra_core::{classifier::Classifier, reference::ReferenceSource};

use crate::{
  AppState, error::ApiError, etag::compute_etag, handlers::SymptomSelection,
};

/// `POST /report` with `{"symptoms": [...]}`.
pub async fn handler<C, R>(
  State(state): State<AppState<C, R>>,
  selection: Result<Json<SymptomSelection>, JsonRejection>,
) -> Result<Response, ApiError>
where
  C: Classifier,
  R: ReferenceSource,
{
  let Json(selection) = selection?;
  let report = state.predictor.report(&selection.symptoms)?;
  tracing::debug!(file_name = %report.file_name, "rendered report");

  let etag = HeaderValue::from_str(&compute_etag(report.body.as_bytes()))
    .map_err(|e| ApiError::Internal(e.to_string()))?;
  let headers = [
    (
      header::CONTENT_TYPE,
      HeaderValue::from_static(report.content_type),
    ),
    (
      header::CONTENT_DISPOSITION,
      content_disposition(&report.file_name),
    ),
    (header::ETAG, etag),
  ];
  Ok((headers, report.body).into_response())
}

/// `attachment; filename="..."`. Characters that cannot appear in a quoted
/// header parameter are replaced with `_`.
pub fn content_disposition(file_name: &str) -> HeaderValue {
  let safe: String = file_name
    .chars()
    .map(|c| match c {
      '"' | '\\' => '_',
      c if c.is_ascii_graphic() || c == ' ' => c,
      _ => '_',
    })
    .collect();
  HeaderValue::from_str(&format!("attachment; filename=\"{safe}\""))
    .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn plain_name_is_quoted() {
    assert_eq!(
      content_disposition("Fungal infection_report.txt"),
      "attachment; filename=\"Fungal infection_report.txt\""
    );
  }

  #[test]
  fn unsafe_characters_are_replaced() {
    assert_eq!(
      content_disposition("Bad \"name\"\u{e9}_report.txt"),
      "attachment; filename=\"Bad _name___report.txt\""
    );
  }
}
