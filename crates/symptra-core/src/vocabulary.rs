//! The symptom vocabulary: the fixed `name -> index` mapping whose order is
//! the feature order the classifier was trained against.
//!
//! Built once at startup and shared read-only (typically behind an `Arc`).

use std::collections::HashMap;

use crate::{Error, Result};

// ─── Standard vocabulary ─────────────────────────────────────────────────────

/// Number of symptoms in [`STANDARD_SYMPTOMS`].
pub const STANDARD_SYMPTOM_COUNT: usize = 132;

/// The canonical 132-symptom feature order.
///
/// Some keys are odd (`spotting_ urination`, `foul_smell_of urine`,
/// `dischromic _patches`) and `fluid_overload.1` duplicates `fluid_overload`.
/// They are kept verbatim; the model's feature columns carry the same names.
pub const STANDARD_SYMPTOMS: [&str; STANDARD_SYMPTOM_COUNT] = [
  "itching",
  "skin_rash",
  "nodal_skin_eruptions",
  "continuous_sneezing",
  "shivering",
  "chills",
  "joint_pain",
  "stomach_pain",
  "acidity",
  "ulcers_on_tongue",
  "muscle_wasting",
  "vomiting",
  "burning_micturition",
  "spotting_ urination",
  "fatigue",
  "weight_gain",
  "anxiety",
  "cold_hands_and_feets",
  "mood_swings",
  "weight_loss",
  "restlessness",
  "lethargy",
  "patches_in_throat",
  "irregular_sugar_level",
  "cough",
  "high_fever",
  "sunken_eyes",
  "breathlessness",
  "sweating",
  "dehydration",
  "indigestion",
  "headache",
  "yellowish_skin",
  "dark_urine",
  "nausea",
  "loss_of_appetite",
  "pain_behind_the_eyes",
  "back_pain",
  "constipation",
  "abdominal_pain",
  "diarrhoea",
  "mild_fever",
  "yellow_urine",
  "yellowing_of_eyes",
  "acute_liver_failure",
  "fluid_overload",
  "swelling_of_stomach",
  "swelled_lymph_nodes",
  "malaise",
  "blurred_and_distorted_vision",
  "phlegm",
  "throat_irritation",
  "redness_of_eyes",
  "sinus_pressure",
  "runny_nose",
  "congestion",
  "chest_pain",
  "weakness_in_limbs",
  "fast_heart_rate",
  "pain_during_bowel_movements",
  "pain_in_anal_region",
  "bloody_stool",
  "irritation_in_anus",
  "neck_pain",
  "dizziness",
  "cramps",
  "bruising",
  "obesity",
  "swollen_legs",
  "swollen_blood_vessels",
  "puffy_face_and_eyes",
  "enlarged_thyroid",
  "brittle_nails",
  "swollen_extremeties",
  "excessive_hunger",
  "extra_marital_contacts",
  "drying_and_tingling_lips",
  "slurred_speech",
  "knee_pain",
  "hip_joint_pain",
  "muscle_weakness",
  "stiff_neck",
  "swelling_joints",
  "movement_stiffness",
  "spinning_movements",
  "loss_of_balance",
  "unsteadiness",
  "weakness_of_one_body_side",
  "loss_of_smell",
  "bladder_discomfort",
  "foul_smell_of urine",
  "continuous_feel_of_urine",
  "passage_of_gases",
  "internal_itching",
  "toxic_look_(typhos)",
  "depression",
  "irritability",
  "muscle_pain",
  "altered_sensorium",
  "red_spots_over_body",
  "belly_pain",
  "abnormal_menstruation",
  "dischromic _patches",
  "watering_from_eyes",
  "increased_appetite",
  "polyuria",
  "family_history",
  "mucoid_sputum",
  "rusty_sputum",
  "lack_of_concentration",
  "visual_disturbances",
  "receiving_blood_transfusion",
  "receiving_unsterile_injections",
  "coma",
  "stomach_bleeding",
  "distention_of_abdomen",
  "history_of_alcohol_consumption",
  "fluid_overload.1",
  "blood_in_sputum",
  "prominent_veins_on_calf",
  "palpitations",
  "painful_walking",
  "pus_filled_pimples",
  "blackheads",
  "scurring",
  "skin_peeling",
  "silver_like_dusting",
  "small_dents_in_nails",
  "inflammatory_nails",
  "blister",
  "red_sore_around_nose",
  "yellow_crust_ooze",
];

// ─── Vocabulary ──────────────────────────────────────────────────────────────

/// An ordered, immutable mapping from symptom name to a unique index in
/// `[0, len)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomVocabulary {
  names: Vec<String>,
  index: HashMap<String, usize>,
}

impl SymptomVocabulary {
  /// The built-in vocabulary, in [`STANDARD_SYMPTOMS`] order.
  pub fn standard() -> Self {
    Self::from_unique(STANDARD_SYMPTOMS.iter().map(|s| s.to_string()).collect())
  }

  /// Build a vocabulary from names in feature order.
  ///
  /// Names are taken verbatim. Fails on an empty list or a repeated name.
  pub fn from_names<I, S>(names: I) -> Result<Self>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    if names.is_empty() {
      return Err(Error::EmptyVocabulary);
    }

    let mut index = HashMap::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
      if index.insert(name.clone(), i).is_some() {
        return Err(Error::DuplicateSymptom(name.clone()));
      }
    }
    Ok(Self { names, index })
  }

  fn from_unique(names: Vec<String>) -> Self {
    let index = names
      .iter()
      .enumerate()
      .map(|(i, name)| (name.clone(), i))
      .collect();
    Self { names, index }
  }

  pub fn len(&self) -> usize { self.names.len() }

  pub fn is_empty(&self) -> bool { self.names.is_empty() }

  /// Index of `name`, or [`Error::UnknownSymptom`].
  pub fn index_of(&self, name: &str) -> Result<usize> {
    self
      .get(name)
      .ok_or_else(|| Error::UnknownSymptom(name.to_string()))
  }

  pub fn get(&self, name: &str) -> Option<usize> {
    self.index.get(name).copied()
  }

  pub fn contains(&self, name: &str) -> bool { self.index.contains_key(name) }

  pub fn name_at(&self, index: usize) -> Option<&str> {
    self.names.get(index).map(String::as_str)
  }

  /// All names in feature order.
  pub fn names(&self) -> &[String] { &self.names }

  /// `(index, name)` pairs in feature order.
  pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
    self.names.iter().map(String::as_str).enumerate()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn standard_vocabulary_is_contiguous_and_unique() {
    let vocab = SymptomVocabulary::standard();
    assert_eq!(vocab.len(), STANDARD_SYMPTOM_COUNT);
    for (i, name) in vocab.iter() {
      assert_eq!(vocab.index_of(name).unwrap(), i);
    }
    assert!(SymptomVocabulary::from_names(STANDARD_SYMPTOMS).is_ok());
  }

  #[test]
  fn standard_vocabulary_anchors() {
    let vocab = SymptomVocabulary::standard();
    assert_eq!(vocab.get("itching"), Some(0));
    assert_eq!(vocab.get("fluid_overload"), Some(45));
    assert_eq!(vocab.get("fluid_overload.1"), Some(117));
    assert_eq!(vocab.get("yellow_crust_ooze"), Some(131));
  }

  #[test]
  fn odd_keys_are_kept_verbatim() {
    let vocab = SymptomVocabulary::standard();
    assert_eq!(vocab.get("spotting_ urination"), Some(13));
    assert_eq!(vocab.get("foul_smell_of urine"), Some(90));
    assert_eq!(vocab.get("dischromic _patches"), Some(102));
    assert!(!vocab.contains("spotting_urination"));
  }

  #[test]
  fn unknown_name_is_an_error() {
    let vocab = SymptomVocabulary::standard();
    let err = vocab.index_of("glowing").unwrap_err();
    assert!(matches!(err, Error::UnknownSymptom(ref n) if n == "glowing"));
  }

  #[test]
  fn duplicate_names_are_rejected() {
    let err = SymptomVocabulary::from_names(["a", "b", "a"]).unwrap_err();
    assert!(matches!(err, Error::DuplicateSymptom(ref n) if n == "a"));
  }

  #[test]
  fn empty_vocabulary_is_rejected() {
    let err = SymptomVocabulary::from_names(Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, Error::EmptyVocabulary));
  }
}
