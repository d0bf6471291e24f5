//! Serialized classifier support for Symptra.
//!
//! The classifier is trained elsewhere and exported as JSON. This crate
//! loads that artifact, validates its shape, and evaluates it as a
//! [`symptra_core::classifier::Classifier`].
//!
//! # Artifact format
//!
//! ```json
//! {
//!   "classes":   ["Allergy", "Drug Reaction", "Fungal infection"],
//!   "decision":  "ovo",
//!   "coef":      [[0.0, 1.5, ...], [...], [...]],
//!   "intercept": [-0.2, 0.1, 0.4],
//!   "features":  ["itching", "skin_rash", ...]
//! }
//! ```
//!
//! `decision` is `"ovr"` (one row per class) or `"ovo"` (one row per class
//! pair, as a multiclass `SVC` exports `coef_`). It may be left out when the
//! row count allows only one reading.
//!
//! `features` is optional; when present it is checked against the
//! vocabulary's order with [`LinearSvc::check_features`].

pub mod error;
mod svc;

pub use error::{Error, Result};
pub use svc::{Decision, LinearSvc};
