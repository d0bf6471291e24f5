//! Symptom vector encoding.
//!
//! A [`SymptomVector`] is the classifier's input: one `0`/`1` slot per
//! vocabulary entry, in vocabulary order. It is built fresh for every request
//! and never mutated afterwards.

use crate::{Error, Result, vocabulary::SymptomVocabulary};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymptomVector {
  values: Vec<u8>,
}

impl SymptomVector {
  /// Encode a selection of symptom names against `vocabulary`.
  ///
  /// Every name must be in the vocabulary. An empty selection is rejected
  /// with [`Error::EmptySelection`] instead of producing an all-zero vector.
  /// Repeated names collapse, so the result depends only on the set of names
  /// and not on their order.
  pub fn encode<I, S>(vocabulary: &SymptomVocabulary, names: I) -> Result<Self>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut values = vec![0u8; vocabulary.len()];
    let mut selected = 0usize;
    for name in names {
      values[vocabulary.index_of(name.as_ref())?] = 1;
      selected += 1;
    }
    if selected == 0 {
      return Err(Error::EmptySelection);
    }
    Ok(Self { values })
  }

  pub fn len(&self) -> usize { self.values.len() }

  pub fn is_empty(&self) -> bool { self.values.is_empty() }

  /// The raw `0`/`1` values in vocabulary order.
  pub fn as_slice(&self) -> &[u8] { &self.values }

  /// Indices set to `1`, ascending.
  pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
    self
      .values
      .iter()
      .enumerate()
      .filter(|(_, v)| **v == 1)
      .map(|(i, _)| i)
  }

  /// Number of slots set to `1`.
  pub fn count_ones(&self) -> usize {
    self.values.iter().filter(|v| **v == 1).count()
  }

  /// The vector as floating-point features, for numeric classifiers.
  pub fn to_f64(&self) -> Vec<f64> {
    self.values.iter().map(|v| f64::from(*v)).collect()
  }
}
