//! HTTP JSON API for Symptra.
//!
//! Exposes an axum [`Router`] over a shared, read-only [`Predictor`]. All
//! reference data and the classifier are loaded once by [`startup::load`];
//! handlers only read.

pub mod error;
pub mod etag;
pub mod handlers;
pub mod startup;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use serde::Deserialize;
use symptra_core::{
  classifier::Classifier, pipeline::Predictor, reference::ReferenceSource,
};
use symptra_tables::TableFiles;
use tower_http::trace::TraceLayer;

use handlers::{health, predict, report, symptoms};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `symptra.toml` and
/// `SYMPTRA_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// Directory holding the reference CSV files.
  pub data_dir:   PathBuf,
  /// Serialized classifier (JSON).
  pub model_path: PathBuf,
  /// Table file names, relative to `data_dir`.
  pub tables:     TableFiles,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "127.0.0.1".to_string(),
      port:       8080,
      data_dir:   PathBuf::from("datasets"),
      model_path: PathBuf::from("svc.json"),
      tables:     TableFiles::default(),
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<C, R> {
  pub predictor: Arc<Predictor<C, R>>,
}

// Manual impl: cloning the `Arc` must not require `C: Clone` or `R: Clone`.
impl<C, R> Clone for AppState<C, R> {
  fn clone(&self) -> Self {
    Self { predictor: Arc::clone(&self.predictor) }
  }
}

impl<C, R> AppState<C, R> {
  pub fn new(predictor: Predictor<C, R>) -> Self {
    Self { predictor: Arc::new(predictor) }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the API router.
pub fn router<C, R>(state: AppState<C, R>) -> Router
where
  C: Classifier + 'static,
  R: ReferenceSource + 'static,
{
  Router::new()
    .route("/health", get(health::handler))
    .route("/symptoms", get(symptoms::handler::<C, R>))
    .route("/predict", post(predict::handler::<C, R>))
    .route("/report", post(report::handler::<C, R>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use symptra_core::{pipeline::Predictor, vocabulary::SymptomVocabulary};
  use symptra_model::LinearSvc;
  use symptra_tables::{
    DESCRIPTION, DIETS, MEDICATIONS, PRECAUTIONS, ReferenceCatalog,
    ReferenceTable, WORKOUT,
  };
  use tower::ServiceExt as _;

  use super::*;
  use crate::{etag::compute_etag, handlers::symptoms::SymptomEntry};

  type TestState = AppState<LinearSvc, ReferenceCatalog>;

  fn table(spec: symptra_tables::TableSpec, csv: &str) -> ReferenceTable {
    ReferenceTable::from_reader(spec, csv.as_bytes()).unwrap()
  }

  fn make_state() -> TestState {
    let vocabulary = Arc::new(
      SymptomVocabulary::from_names(["itching", "skin_rash", "cough", "fever"])
        .unwrap(),
    );
    let model = LinearSvc::from_json(
      r#"{
        "classes":   ["Fungal infection", "Common Cold"],
        "coef":      [[1.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 1.0]],
        "intercept": [0.0, 0.0]
      }"#,
    )
    .unwrap();
    let catalog = ReferenceCatalog::new(
      table(
        DESCRIPTION,
        "Disease,Description\nFungal infection,A fungal skin condition.\n",
      ),
      table(
        PRECAUTIONS,
        "Disease,Precaution_1,Precaution_2,Precaution_3,Precaution_4\n\
         Fungal infection,bath twice,use detol or neem in bathing water,\
         keep infected area dry,use clean cloths\n",
      ),
      table(MEDICATIONS, "Disease,Medication\nFungal infection,Fluconazole\n"),
      table(DIETS, "Disease,Diet\nFungal infection,Probiotics\n"),
      table(WORKOUT, "disease,workout\nFungal infection,Stay hydrated\n"),
    );
    AppState::new(Predictor::new(vocabulary, model, catalog).unwrap())
  }

  async fn send(
    state: TestState,
    method: &str,
    uri: &str,
    body: &str,
  ) -> axum::response::Response {
    send_as(state, method, uri, Some("application/json"), body).await
  }

  async fn send_as(
    state: TestState,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
  ) -> axum::response::Response {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
      req = req.header(header::CONTENT_TYPE, content_type);
    }
    let req = req.body(Body::from(body.to_string())).unwrap();
    router(state).oneshot(req).await.unwrap()
  }

  /// Asserts a `400` with a JSON `{"error": ...}` body and returns the message.
  async fn json_error(resp: axum::response::Response) -> String {
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
    let json: serde_json::Value =
      serde_json::from_str(&body_string(resp).await).unwrap();
    json["error"].as_str().unwrap().to_string()
  }

  async fn body_string(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  // ── Health / symptoms ───────────────────────────────────────────────────────

  #[tokio::test]
  async fn health_is_ok() {
    let resp = send(make_state(), "GET", "/health", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "ok");
  }

  #[tokio::test]
  async fn symptoms_are_listed_in_feature_order() {
    let resp = send(make_state(), "GET", "/symptoms", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let entries: Vec<SymptomEntry> =
      serde_json::from_str(&body_string(resp).await).unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["itching", "skin_rash", "cough", "fever"]);
    assert_eq!(entries[2].index, 2);
  }

  #[tokio::test]
  async fn symptoms_filter_is_case_insensitive() {
    let resp = send(make_state(), "GET", "/symptoms?q=SKIN", "").await;
    let entries: Vec<SymptomEntry> =
      serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(entries, vec![SymptomEntry {
      name:  "skin_rash".into(),
      index: 1,
    }]);
  }

  // ── Predict ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn predict_returns_joined_result() {
    let resp = send(
      make_state(),
      "POST",
      "/predict",
      r#"{"symptoms": ["skin_rash", "itching"]}"#,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value =
      serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["label"], "Fungal infection");
    assert_eq!(json["description"], "A fungal skin condition.");
    assert_eq!(json["precautions"].as_array().unwrap().len(), 4);
    assert_eq!(json["precautions"][0], "bath twice");
    assert_eq!(json["medications"][0], "Fluconazole");
  }

  #[tokio::test]
  async fn label_without_reference_rows_has_empty_fields() {
    let resp =
      send(make_state(), "POST", "/predict", r#"{"symptoms": ["cough"]}"#)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value =
      serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["label"], "Common Cold");
    assert_eq!(json["description"], "");
    assert!(json["medications"].as_array().unwrap().is_empty());
  }

  #[tokio::test]
  async fn empty_selection_is_a_bad_request() {
    let resp =
      send(make_state(), "POST", "/predict", r#"{"symptoms": []}"#).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value =
      serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["error"], "Please select at least one symptom!");
  }

  #[tokio::test]
  async fn missing_symptoms_field_is_an_empty_selection() {
    let resp = send(make_state(), "POST", "/predict", "{}").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn unknown_symptom_is_a_bad_request() {
    let resp = send(
      make_state(),
      "POST",
      "/predict",
      r#"{"symptoms": ["itching", "glowing"]}"#,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_string(resp).await;
    assert!(body.contains("glowing"), "body: {body}");
  }

  #[tokio::test]
  async fn mistyped_body_is_a_json_bad_request() {
    let resp =
      send(make_state(), "POST", "/predict", r#"{"symptoms": "itching"}"#)
        .await;
    let message = json_error(resp).await;
    assert!(message.contains("symptoms"), "message: {message}");
  }

  #[tokio::test]
  async fn malformed_json_is_a_json_bad_request() {
    let resp = send(make_state(), "POST", "/predict", "{\"symptoms\": [").await;
    json_error(resp).await;
  }

  #[tokio::test]
  async fn wrong_content_type_is_a_json_bad_request() {
    let body = r#"{"symptoms": ["itching"]}"#;
    let resp =
      send_as(make_state(), "POST", "/predict", Some("text/plain"), body).await;
    let message = json_error(resp).await;
    assert!(message.contains("application/json"), "message: {message}");

    let resp = send_as(make_state(), "POST", "/report", None, body).await;
    json_error(resp).await;
  }

  // ── Report ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn report_is_a_text_attachment() {
    let resp = send(
      make_state(),
      "POST",
      "/report",
      r#"{"symptoms": ["itching"]}"#,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers().clone();
    assert_eq!(
      headers[header::CONTENT_TYPE],
      "text/plain; charset=utf-8"
    );
    assert_eq!(
      headers[header::CONTENT_DISPOSITION],
      "attachment; filename=\"Fungal infection_report.txt\""
    );

    let body = body_string(resp).await;
    assert!(body.starts_with("\nPredicted Disease: Fungal infection\n"));
    assert!(body.contains(
      "bath twice, use detol or neem in bathing water, keep infected area \
       dry, use clean cloths"
    ));
    assert_eq!(
      headers[header::ETAG].to_str().unwrap(),
      compute_etag(body.as_bytes())
    );
  }

  #[tokio::test]
  async fn report_is_reproducible() {
    let state = make_state();
    let body = r#"{"symptoms": ["fever", "cough"]}"#;
    let a = send(state.clone(), "POST", "/report", body).await;
    let b = send(state, "POST", "/report", body).await;
    assert_eq!(a.headers()[header::ETAG], b.headers()[header::ETAG]);
    assert_eq!(body_string(a).await, body_string(b).await);
  }

  #[tokio::test]
  async fn report_rejects_empty_selection() {
    let resp =
      send(make_state(), "POST", "/report", r#"{"symptoms": []}"#).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }
}
