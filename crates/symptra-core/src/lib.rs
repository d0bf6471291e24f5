//! Core types and trait definitions for Symptra.
//!
//! This crate holds the symptom vocabulary, the vector encoder, the
//! classifier and reference-source abstractions, the prediction pipeline and
//! the plain-text report formatter. It does no I/O: CSV tables live in
//! `symptra-tables`, the serialized model in `symptra-model`.

pub mod classifier;
pub mod error;
pub mod pipeline;
pub mod prediction;
pub mod reference;
pub mod report;
pub mod vector;
pub mod vocabulary;

pub use error::{Error, Result};
