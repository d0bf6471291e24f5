//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Shown when the request carries no symptoms.
pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least one symptom!";

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The symptom selection was rejected; the message tells the user how to
  /// fix it.
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("internal error: {0}")]
  Internal(String),
}

impl From<symptra_core::Error> for ApiError {
  fn from(e: symptra_core::Error) -> Self {
    match e {
      symptra_core::Error::EmptySelection => {
        ApiError::BadRequest(EMPTY_SELECTION_MESSAGE.to_string())
      }
      e if e.is_validation() => ApiError::BadRequest(e.to_string()),
      e => ApiError::Internal(e.to_string()),
    }
  }
}

// A body axum cannot read as a selection (wrong content type, bad JSON,
// wrong field types) is the caller's mistake, reported in the same shape.
impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
      ApiError::Internal(m) => {
        tracing::error!(error = %m, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, m)
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
