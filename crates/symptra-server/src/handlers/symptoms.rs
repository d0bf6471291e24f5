//! Handler for `GET /symptoms`.
//!
//! Lists the vocabulary in feature order, which is also the order a client
//! should present the choices in.

use axum::{
  Json,
  extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use symptra_core::{classifier::Classifier, reference::ReferenceSource};

use crate::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct SymptomParams {
  /// Case-insensitive substring filter.
  pub q: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomEntry {
  pub name:  String,
  pub index: usize,
}

/// `GET /symptoms[?q=...]`
pub async fn handler<C, R>(
  State(state): State<AppState<C, R>>,
  Query(params): Query<SymptomParams>,
) -> Json<Vec<SymptomEntry>>
where
  C: Classifier,
  R: ReferenceSource,
{
  let needle = params
    .q
    .map(|q| q.trim().to_lowercase())
    .filter(|q| !q.is_empty());

  let entries = state
    .predictor
    .vocabulary()
    .iter()
    .filter(|(_, name)| {
      needle
        .as_deref()
        .is_none_or(|n| name.to_lowercase().contains(n))
    })
    .map(|(index, name)| SymptomEntry { name: name.to_string(), index })
    .collect();
  Json(entries)
}
