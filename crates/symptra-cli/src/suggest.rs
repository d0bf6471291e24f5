//! "Did you mean" suggestions for symptom names the vocabulary lacks.

use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use symptra_core::vocabulary::SymptomVocabulary;

/// Up to `limit` vocabulary names that fuzzily match `input`, best first.
///
/// Spaces in `input` are read as underscores, since that is how the
/// vocabulary spells multi-word symptoms.
pub fn suggestions<'a>(
  vocabulary: &'a SymptomVocabulary,
  input: &str,
  limit: usize,
) -> Vec<&'a str> {
  let pattern = input.trim().to_lowercase().replace(' ', "_");
  if pattern.is_empty() {
    return Vec::new();
  }

  let matcher = SkimMatcherV2::default();
  let mut scored: Vec<(i64, usize, &str)> = vocabulary
    .iter()
    .filter_map(|(i, name)| {
      matcher.fuzzy_match(name, &pattern).map(|score| (score, i, name))
    })
    .collect();
  // Best score first; vocabulary order breaks ties.
  scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
  scored.into_iter().take(limit).map(|(_, _, name)| name).collect()
}

/// Vocabulary names matching `filter`, in vocabulary order.
pub fn filter<'a>(
  vocabulary: &'a SymptomVocabulary,
  filter: &str,
) -> Vec<&'a str> {
  let pattern = filter.trim().to_lowercase().replace(' ', "_");
  let matcher = SkimMatcherV2::default();
  vocabulary
    .iter()
    .map(|(_, name)| name)
    .filter(|name| {
      pattern.is_empty() || matcher.fuzzy_match(name, &pattern).is_some()
    })
    .collect()
}
