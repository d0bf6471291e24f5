//! Handler for `POST /predict`.

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use symptra_core::{
  classifier::Classifier, prediction::PredictionResult,
  reference::ReferenceSource,
};

use crate::{AppState, error::ApiError, handlers::SymptomSelection};

/// `POST /predict` with `{"symptoms": [...]}`.
pub async fn handler<C, R>(
  State(state): State<AppState<C, R>>,
  selection: Result<Json<SymptomSelection>, JsonRejection>,
) -> Result<Json<PredictionResult>, ApiError>
where
  C: Classifier,
  R: ReferenceSource,
{
  let Json(selection) = selection?;
  let result = state.predictor.predict(&selection.symptoms)?;
  tracing::info!(
    label = %result.label,
    symptoms = selection.symptoms.len(),
    "prediction"
  );
  Ok(Json(result))
}
